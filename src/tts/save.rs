//! Tabletop Simulator save file structures
//!
//! Field names follow the TTS save format exactly, which mixes PascalCase
//! object keys with camelCase transform keys.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Grey tint TTS applies to custom decks by default
pub const DECK_TINT: f64 = 0.713235259;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TtsSave {
    pub save_name: String,
    pub game_mode: String,
    pub gravity: f64,
    pub play_area: f64,
    pub date: String,
    pub table: String,
    pub sky: String,
    pub note: String,
    pub rules: String,
    #[serde(rename = "XmlUI")]
    pub xml_ui: String,
    pub lua_script: String,
    pub lua_script_state: String,
    pub object_states: Vec<ObjectState>,
    pub tab_states: BTreeMap<String, serde_json::Value>,
    pub version_number: String,
}

impl TtsSave {
    pub fn new(save_name: &str, object_states: Vec<ObjectState>) -> Self {
        TtsSave {
            save_name: save_name.to_string(),
            game_mode: "Free".to_string(),
            gravity: 0.5,
            play_area: 0.5,
            date: String::new(),
            table: "Table_None".to_string(),
            sky: "Sky_Museum".to_string(),
            note: String::new(),
            rules: String::new(),
            xml_ui: String::new(),
            lua_script: String::new(),
            lua_script_state: String::new(),
            object_states,
            tab_states: BTreeMap::new(),
            version_number: "v13.2.2".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transform {
    pub pos_x: f64,
    pub pos_y: f64,
    pub pos_z: f64,
    pub rot_x: f64,
    pub rot_y: f64,
    pub rot_z: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub scale_z: f64,
}

impl Transform {
    /// Face-down deck at the given table position
    pub fn at(x: f64, y: f64, z: f64) -> Self {
        Transform {
            pos_x: x,
            pos_y: y,
            pos_z: z,
            rot_x: 0.0,
            rot_y: 180.0,
            rot_z: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorDiffuse {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl ColorDiffuse {
    pub fn grey(value: f64) -> Self {
        ColorDiffuse {
            r: value,
            g: value,
            b: value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomDeckEntry {
    #[serde(rename = "FaceURL")]
    pub face_url: String,
    #[serde(rename = "BackURL")]
    pub back_url: String,
    pub num_width: u32,
    pub num_height: u32,
    pub back_is_hidden: bool,
    pub unique_back: bool,
    #[serde(rename = "Type")]
    pub kind: u32,
}

/// A custom deck object on the table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectState {
    pub name: String,
    pub transform: Transform,
    pub nickname: String,
    pub description: String,
    #[serde(rename = "GMNotes")]
    pub gm_notes: String,
    pub color_diffuse: ColorDiffuse,
    pub layout_group_sort_index: u32,
    pub value: u32,
    pub locked: bool,
    pub grid: bool,
    pub snap: bool,
    #[serde(rename = "IgnoreFoW")]
    pub ignore_fow: bool,
    pub measure_movement: bool,
    pub drag_selectable: bool,
    pub autoraise: bool,
    pub sticky: bool,
    pub tooltip: bool,
    pub grid_projection: bool,
    pub hide_when_face_down: bool,
    pub hands: bool,
    pub sideways_card: bool,
    #[serde(rename = "DeckIDs")]
    pub deck_ids: Vec<u32>,
    pub custom_deck: BTreeMap<String, CustomDeckEntry>,
    pub lua_script: String,
    pub lua_script_state: String,
    #[serde(rename = "XmlUI")]
    pub xml_ui: String,
    #[serde(rename = "GUID")]
    pub guid: String,
}

impl ObjectState {
    /// A `DeckCustom` with the standard table flags
    pub fn custom_deck(
        nickname: String,
        description: String,
        transform: Transform,
        deck_id: u32,
        deck_ids: Vec<u32>,
        entry: CustomDeckEntry,
        guid: String,
    ) -> Self {
        let mut custom_deck = BTreeMap::new();
        custom_deck.insert(deck_id.to_string(), entry);
        ObjectState {
            name: "DeckCustom".to_string(),
            transform,
            nickname,
            description,
            gm_notes: String::new(),
            color_diffuse: ColorDiffuse::grey(DECK_TINT),
            layout_group_sort_index: 0,
            value: 0,
            locked: false,
            grid: true,
            snap: true,
            ignore_fow: false,
            measure_movement: false,
            drag_selectable: true,
            autoraise: true,
            sticky: true,
            tooltip: true,
            grid_projection: false,
            hide_when_face_down: true,
            hands: true,
            sideways_card: false,
            deck_ids,
            custom_deck,
            lua_script: String::new(),
            lua_script_state: String::new(),
            xml_ui: String::new(),
            guid,
        }
    }
}
