//! Generator configuration
//!
//! Loaded from an optional JSON file; every field has a default so an empty
//! object (or no file at all) is a valid configuration. Command-line flags
//! are applied on top by the binary.

use crate::{CardGenError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory holding the card data CSV files
    pub data_dir: PathBuf,
    /// Root of generated output (`html/`, `pdf/`, `tts/` are created below it)
    pub output_dir: PathBuf,
    /// Copies of every starter move (one per player)
    pub starter_copies: u32,
    /// Number of stumble cards in the stumble deck
    pub stumble_count: u32,
    pub sprite: SpriteConfig,
    pub tts: TtsConfig,
    pub pdf: PdfConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            data_dir: PathBuf::from("card-data"),
            output_dir: PathBuf::from("output"),
            starter_copies: 5,
            stumble_count: 20,
            sprite: SpriteConfig::default(),
            tts: TtsConfig::default(),
            pdf: PdfConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteConfig {
    pub sheet_width: u32,
    pub sheet_height: u32,
    pub columns: u32,
    pub rows: u32,
    /// TrueType font to draw text with; system fonts are searched when unset
    pub font_path: Option<PathBuf>,
}

impl Default for SpriteConfig {
    fn default() -> Self {
        SpriteConfig {
            sheet_width: 2048,
            sheet_height: 2048,
            columns: 10,
            rows: 7,
            font_path: None,
        }
    }
}

impl SpriteConfig {
    pub fn card_width(&self) -> u32 {
        self.sheet_width / self.columns
    }

    pub fn card_height(&self) -> u32 {
        self.sheet_height / self.rows
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtsConfig {
    /// GitHub account hosting the sprite sheets; read from the git remote when unset
    pub github_user: Option<String>,
    pub github_repo: Option<String>,
    pub branch: String,
    /// Repository path of the sprite sheet directory
    pub url_prefix: String,
    pub save_name: String,
    /// Distance between deck spawn points along the X axis
    pub deck_spacing: f64,
}

impl Default for TtsConfig {
    fn default() -> Self {
        TtsConfig {
            github_user: None,
            github_repo: None,
            branch: "main".to_string(),
            url_prefix: "output/tts".to_string(),
            save_name: "Beat by Beat".to_string(),
            deck_spacing: 4.5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Chromium-compatible browser; searched on PATH when unset
    pub browser: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Load a configuration file and validate it
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: GeneratorConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject geometry that Tabletop Simulator cannot slice
    pub fn validate(&self) -> Result<()> {
        let s = &self.sprite;
        if !(1..=10).contains(&s.columns) || !(1..=7).contains(&s.rows) {
            return Err(CardGenError::InvalidConfig(format!(
                "sprite grid must be at most 10x7, got {}x{}",
                s.columns, s.rows
            )));
        }
        if s.card_width() == 0 || s.card_height() == 0 {
            return Err(CardGenError::InvalidConfig(format!(
                "sprite sheet {}x{} is too small for a {}x{} grid",
                s.sheet_width, s.sheet_height, s.columns, s.rows
            )));
        }
        if self.starter_copies == 0 {
            return Err(CardGenError::InvalidConfig(
                "starter_copies must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn html_dir(&self) -> PathBuf {
        self.output_dir.join("html")
    }

    pub fn pdf_dir(&self) -> PathBuf {
        self.output_dir.join("pdf")
    }

    pub fn tts_dir(&self) -> PathBuf {
        self.output_dir.join("tts")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::default();
        assert_eq!(config.starter_copies, 5);
        assert_eq!(config.stumble_count, 20);
        assert_eq!(config.sprite.card_width(), 204);
        assert_eq!(config.sprite.card_height(), 292);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GeneratorConfig =
            serde_json::from_str(r#"{ "stumble_count": 12, "tts": { "branch": "release" } }"#)
                .unwrap();
        assert_eq!(config.stumble_count, 12);
        assert_eq!(config.tts.branch, "release");
        assert_eq!(config.tts.url_prefix, "output/tts");
        assert_eq!(config.sprite.columns, 10);
    }

    #[test]
    fn test_rejects_oversized_grid() {
        let mut config = GeneratorConfig::default();
        config.sprite.columns = 12;
        assert!(matches!(
            config.validate(),
            Err(CardGenError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_output_subdirectories() {
        let config = GeneratorConfig::default();
        assert_eq!(config.tts_dir(), PathBuf::from("output/tts"));
        assert_eq!(config.html_dir(), PathBuf::from("output/html"));
    }
}
