//! Tabletop Simulator save file generation
//!
//! Every deck slice of the sprite layout becomes one custom deck on the
//! table, laid out left to right.

pub mod github;
pub mod save;

use crate::config::TtsConfig;
use crate::layout::{DeckSlice, SpriteLayout};
use crate::logger::BuildLogger;
use crate::Result;
use sha1::{Digest, Sha1};
use std::fs;
use std::path::{Path, PathBuf};

pub use github::{detect_remote, parse_remote, GitHubLocation};
pub use save::{CustomDeckEntry, ObjectState, TtsSave, Transform};

pub const SAVE_FILE_NAME: &str = "beat-by-beat.json";

/// Short stable object id derived from a deck's name and position
pub fn deck_guid(name: &str, x: f64, z: f64) -> String {
    let digest = Sha1::digest(format!("{name}{x}{z}").as_bytes());
    let mut hex = format!("{digest:x}");
    hex.truncate(6);
    hex
}

/// Card ids of a slice: `deck_id * 100` plus each card's index on its sheet
pub fn deck_card_ids(deck_id: u32, slice: &DeckSlice) -> Vec<u32> {
    let base = deck_id * 100 + slice.start as u32;
    (base..base + slice.len as u32).collect()
}

/// Build the save from the sprite layout
pub fn build_save(
    layout: &SpriteLayout<'_>,
    location: &GitHubLocation,
    config: &TtsConfig,
) -> TtsSave {
    let (y, z) = (1.0, 0.0);
    let objects = layout
        .slices
        .iter()
        .enumerate()
        .map(|(i, slice)| {
            let deck_id = i as u32 + 1;
            let x = i as f64 * config.deck_spacing;
            let entry = CustomDeckEntry {
                face_url: location.raw_url(&slice.face_file),
                back_url: location.raw_url(&slice.back_file),
                num_width: layout.grid.columns,
                num_height: layout.grid.rows,
                back_is_hidden: true,
                unique_back: false,
                kind: 0,
            };
            ObjectState::custom_deck(
                slice.nickname.clone(),
                slice.description.clone(),
                Transform::at(x, y, z),
                deck_id,
                deck_card_ids(deck_id, slice),
                entry,
                deck_guid(&slice.nickname, x, z),
            )
        })
        .collect();
    TtsSave::new(&config.save_name, objects)
}

/// Writes the TTS save next to the sprite sheets
pub struct TtsGenerator<'a> {
    output_dir: &'a Path,
    config: &'a TtsConfig,
    logger: &'a BuildLogger,
}

impl<'a> TtsGenerator<'a> {
    pub fn new(output_dir: &'a Path, config: &'a TtsConfig, logger: &'a BuildLogger) -> Self {
        TtsGenerator {
            output_dir,
            config,
            logger,
        }
    }

    /// Configured GitHub location, falling back to the git remote for
    /// whichever of user and repo is unset
    pub async fn resolve_location(&self) -> Result<GitHubLocation> {
        let (user, repo) = match (&self.config.github_user, &self.config.github_repo) {
            (Some(user), Some(repo)) => (user.clone(), repo.clone()),
            (user, repo) => {
                let (remote_user, remote_repo) = detect_remote().await?;
                (
                    user.clone().unwrap_or(remote_user),
                    repo.clone().unwrap_or(remote_repo),
                )
            }
        };
        self.logger.verbose(&format!("GitHub: {user}/{repo}"));
        Ok(GitHubLocation::new(
            &user,
            &repo,
            &self.config.branch,
            &self.config.url_prefix,
        ))
    }

    pub fn write(&self, layout: &SpriteLayout<'_>, location: &GitHubLocation) -> Result<PathBuf> {
        fs::create_dir_all(self.output_dir)?;
        let save = build_save(layout, location, self.config);
        let path = self.output_dir.join(SAVE_FILE_NAME);
        fs::write(&path, serde_json::to_string_pretty(&save)?)?;
        self.logger.normal(&format!(
            "Generated: {SAVE_FILE_NAME} ({} decks)",
            save.object_states.len()
        ));
        Ok(path)
    }

    pub async fn generate(&self, layout: &SpriteLayout<'_>) -> Result<PathBuf> {
        let location = self.resolve_location().await?;
        self.write(layout, &location)
    }
}
