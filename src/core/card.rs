//! Card records loaded from the card data files
//!
//! Everything here is read-only once loaded; a generation run never mutates
//! a card.

use crate::core::style::{Color, StyleSpec};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four card families, each with its own deck and card back
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKind {
    Move,
    Rhythm,
    Judge,
    Stumble,
}

impl CardKind {
    pub const ALL: [CardKind; 4] = [
        CardKind::Move,
        CardKind::Rhythm,
        CardKind::Judge,
        CardKind::Stumble,
    ];

    /// Lowercase identifier used in file names and CSS classes
    pub fn slug(self) -> &'static str {
        match self {
            CardKind::Move => "move",
            CardKind::Rhythm => "rhythm",
            CardKind::Judge => "judge",
            CardKind::Stumble => "stumble",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            CardKind::Move => "Move",
            CardKind::Rhythm => "Rhythm",
            CardKind::Judge => "Judge",
            CardKind::Stumble => "Stumble",
        }
    }

    pub fn back_color(self) -> Color {
        match self {
            CardKind::Move => Color::rgb(0x2C, 0x3E, 0x50),
            CardKind::Rhythm => Color::rgb(0x8E, 0x44, 0xAD),
            CardKind::Judge => Color::rgb(0xC0, 0x39, 0x2B),
            CardKind::Stumble => Color::rgb(0x34, 0x49, 0x5E),
        }
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Which move deck a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeckType {
    /// Dealt to every player at the start; printed once per player
    Starter,
    /// Drafted during play; printed once
    Pool,
}

impl DeckType {
    /// Anything other than `starter` is a pool move
    pub fn parse(raw: &str) -> Self {
        if raw.trim() == "starter" {
            DeckType::Starter
        } else {
            DeckType::Pool
        }
    }
}

/// Move types; each has its own icon on printed cards
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MoveType {
    Step,
    Spin,
    Jump,
    Pose,
    Flow,
    Pop,
    /// A type the generator has no icon for; printed as written
    Other(String),
}

impl MoveType {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Step" => MoveType::Step,
            "Spin" => MoveType::Spin,
            "Jump" => MoveType::Jump,
            "Pose" => MoveType::Pose,
            "Flow" => MoveType::Flow,
            "Pop" => MoveType::Pop,
            other => MoveType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            MoveType::Step => "Step",
            MoveType::Spin => "Spin",
            MoveType::Jump => "Jump",
            MoveType::Pose => "Pose",
            MoveType::Flow => "Flow",
            MoveType::Pop => "Pop",
            MoveType::Other(s) => s,
        }
    }
}

impl fmt::Display for MoveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a move gives back when it is spent for recovery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecoveryAction {
    #[default]
    Stamina,
    Inspiration,
    Refinement,
}

impl RecoveryAction {
    /// Empty or unrecognised values fall back to Stamina
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Inspiration" => RecoveryAction::Inspiration,
            "Refinement" => RecoveryAction::Refinement,
            _ => RecoveryAction::Stamina,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            RecoveryAction::Stamina => "Recover 1 Stamina",
            RecoveryAction::Inspiration => "Draw 1 card",
            RecoveryAction::Refinement => "Discard & redraw 1",
        }
    }
}

/// A move card (one row of `moves.csv`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub name: String,
    /// Technique value paid to perform the move
    pub cost: u32,
    pub move_type: MoveType,
    pub style: StyleSpec,
    pub bonus: u32,
    pub recovery: RecoveryAction,
    pub deck: DeckType,
}

/// A rhythm card (one row of `rhythm-cards.csv`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rhythm {
    pub name: String,
    pub effect: Option<String>,
    pub condition: Option<String>,
    pub flavor_text: Option<String>,
    /// Number of printed copies
    pub copies: u32,
}

impl Rhythm {
    /// Blank rhythm cards carry only flavor text
    pub fn is_blank(&self) -> bool {
        self.effect.is_none()
    }
}

/// A judge card (one row of `judge-cards.csv`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Judge {
    pub name: String,
    pub title: String,
    /// Star count
    pub difficulty: u32,
    pub flavor_quote: String,
    pub requirement: String,
    pub reward_points: u32,
    pub ongoing_effect: String,
}

impl Judge {
    pub fn stars(&self) -> String {
        "★".repeat(self.difficulty as usize)
    }
}

/// The stumble penalty card. It has no variable fields.
pub struct Stumble;

impl Stumble {
    pub const NAME: &'static str = "Stumble";
    pub const PENALTY: &'static str = "Lose your rhythm";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_type_parse() {
        assert_eq!(DeckType::parse("starter"), DeckType::Starter);
        assert_eq!(DeckType::parse(" starter "), DeckType::Starter);
        assert_eq!(DeckType::parse("pool"), DeckType::Pool);
        assert_eq!(DeckType::parse(""), DeckType::Pool);
    }

    #[test]
    fn test_recovery_defaults_to_stamina() {
        assert_eq!(RecoveryAction::parse(""), RecoveryAction::Stamina);
        assert_eq!(RecoveryAction::parse("Nap"), RecoveryAction::Stamina);
        assert_eq!(RecoveryAction::parse("Refinement"), RecoveryAction::Refinement);
        assert_eq!(RecoveryAction::Inspiration.description(), "Draw 1 card");
    }

    #[test]
    fn test_move_type_keeps_unknown_names() {
        assert_eq!(MoveType::parse("Spin"), MoveType::Spin);
        let other = MoveType::parse("Slide");
        assert_eq!(other, MoveType::Other("Slide".into()));
        assert_eq!(other.as_str(), "Slide");
    }

    #[test]
    fn test_judge_stars() {
        let judge = Judge {
            name: "Madame Fleur".into(),
            title: "The Purist".into(),
            difficulty: 3,
            flavor_quote: "Form is everything.".into(),
            requirement: "Perform 3 Classical moves".into(),
            reward_points: 5,
            ongoing_effect: "Street moves cost +1".into(),
        };
        assert_eq!(judge.stars(), "★★★");
    }

    #[test]
    fn test_kind_slugs_and_backs() {
        assert_eq!(CardKind::Rhythm.slug(), "rhythm");
        assert_eq!(CardKind::Judge.back_color().to_string(), "#C0392B");
    }
}
