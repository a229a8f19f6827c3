//! Font resolution for sprite sheet text
//!
//! A configured TrueType file wins; otherwise a sans-serif face is looked up
//! among the system fonts. Without any font the sheets are still drawn, just
//! without text.

use crate::config::SpriteConfig;
use crate::logger::BuildLogger;
use crate::{CardGenError, Result};
use ab_glyph::{Font, FontVec, PxScale};
use fontdb::{Database, Family, Query, Stretch, Style, Weight, ID};
use std::fs;
use std::path::Path;

/// The three text sizes used on cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    /// 36px bold (costs, back titles)
    Large,
    /// 20px bold (card names)
    Medium,
    /// 14px regular (labels and body text)
    Small,
}

impl TextSize {
    pub fn scale(self) -> PxScale {
        PxScale::from(match self {
            TextSize::Large => 36.0,
            TextSize::Medium => 20.0,
            TextSize::Small => 14.0,
        })
    }
}

pub struct Fonts {
    bold: Option<FontVec>,
    regular: Option<FontVec>,
    description: String,
}

impl Fonts {
    /// No fonts: text drawing becomes a no-op
    pub fn none() -> Self {
        Fonts {
            bold: None,
            regular: None,
            description: "none".to_string(),
        }
    }

    /// Use one font file for every size
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read(path)?;
        let font = FontVec::try_from_vec(data.clone())
            .map_err(|e| CardGenError::Font(format!("{}: {e}", path.display())))?;
        let bold = FontVec::try_from_vec(data)
            .map_err(|e| CardGenError::Font(format!("{}: {e}", path.display())))?;
        Ok(Fonts {
            bold: Some(bold),
            regular: Some(font),
            description: path.display().to_string(),
        })
    }

    /// Look up bold and regular sans-serif faces among the system fonts
    pub fn from_system() -> Option<Self> {
        let mut db = Database::new();
        db.load_system_fonts();
        Self::from_database(db)
    }

    /// Pick faces from an already loaded database
    ///
    /// The generic sans-serif family points at Arial unless told otherwise,
    /// so it is redirected to a sans family that is actually installed. When
    /// none is, any face that parses is used.
    pub fn from_database(mut db: Database) -> Option<Self> {
        if db.is_empty() {
            return None;
        }
        let family = sans_family(&db);
        if let Some(name) = &family {
            db.set_sans_serif_family(name.clone());
        }

        let regular = query_face(&db, Weight::NORMAL)?;
        // The query picks the nearest weight, so a family without bold yields its regular face
        let bold = query_face(&db, Weight::BOLD);
        Some(Fonts {
            bold,
            regular: Some(regular),
            description: family.unwrap_or_else(|| "first system face".to_string()),
        })
    }

    /// Resolve fonts for a sprite run
    pub fn load(config: &SpriteConfig, logger: &BuildLogger) -> Result<Self> {
        let fonts = match &config.font_path {
            Some(path) => Self::from_file(path)?,
            None => match Self::from_system() {
                Some(fonts) => fonts,
                None => {
                    logger.warn("no usable system font found; sprite sheets will have no text");
                    Self::none()
                }
            },
        };
        logger.verbose(&format!("Sprite font: {}", fonts.description));
        Ok(fonts)
    }

    pub fn get(&self, size: TextSize) -> Option<&FontVec> {
        match size {
            TextSize::Large | TextSize::Medium => self.bold.as_ref().or(self.regular.as_ref()),
            TextSize::Small => self.regular.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bold.is_none() && self.regular.is_none()
    }
}

/// Installed family to use as the generic sans-serif
///
/// Arial when present, otherwise the first family with "Sans" in its name
/// that is not a monospace variant.
fn sans_family(db: &Database) -> Option<String> {
    let names: Vec<&str> = db
        .faces()
        .flat_map(|face| face.families.iter().map(|(name, _)| name.as_str()))
        .collect();
    names
        .iter()
        .copied()
        .find(|name| *name == "Arial")
        .or_else(|| {
            names
                .iter()
                .copied()
                .find(|name| name.contains("Sans") && !name.contains("Mono"))
        })
        .map(str::to_string)
}

fn query_face(db: &Database, weight: Weight) -> Option<FontVec> {
    let families = [Family::SansSerif];
    let matched = db.query(&Query {
        families: &families,
        weight,
        stretch: Stretch::Normal,
        style: Style::Normal,
    });
    // The matched face first, then every other face in load order
    matched
        .into_iter()
        .chain(db.faces().map(|face| face.id))
        .find_map(|id| load_face(db, id))
}

fn load_face(db: &Database, id: ID) -> Option<FontVec> {
    let (data, index) = db.with_face_data(id, |data, index| (data.to_vec(), index))?;
    FontVec::try_from_vec_and_index(data, index).ok()
}

/// Whether `font` has a real glyph for every character of `text`
pub fn has_glyphs(font: &FontVec, text: &str) -> bool {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .all(|c| font.glyph_id(c).0 != 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_none_has_no_faces() {
        let fonts = Fonts::none();
        assert!(fonts.is_empty());
        assert!(fonts.get(TextSize::Small).is_none());
        assert!(fonts.get(TextSize::Large).is_none());
    }

    #[test]
    fn test_missing_font_file_is_an_error() {
        let err = Fonts::from_file(Path::new("/nonexistent/font.ttf"));
        assert!(err.is_err());
    }

    #[test]
    fn test_text_scales() {
        assert_eq!(TextSize::Large.scale(), PxScale::from(36.0));
        assert_eq!(TextSize::Small.scale(), PxScale::from(14.0));
    }

    #[test]
    fn test_missing_config_font_falls_back_without_error() {
        let logger = BuildLogger::capturing();
        // Either system fonts or none, but never an error when no path is configured
        let fonts = Fonts::load(&SpriteConfig::default(), &logger).unwrap();
        if fonts.is_empty() {
            assert!(logger
                .logs()
                .iter()
                .any(|l| l.category.as_deref() == Some("warning")));
        }
    }

    #[test]
    fn test_empty_database_has_no_system_fonts() {
        assert!(Fonts::from_database(Database::new()).is_none());
    }

    #[test]
    fn test_installed_faces_are_always_used() {
        let mut db = Database::new();
        db.load_system_fonts();
        let parseable = db.faces().any(|face| load_face(&db, face.id).is_some());
        let fonts = Fonts::from_database(db);
        if parseable {
            let fonts = fonts.expect("system faces are installed");
            assert!(!fonts.is_empty());
            assert!(fonts.get(TextSize::Small).is_some());
            assert!(fonts.get(TextSize::Large).is_some());
        } else {
            assert!(fonts.is_none());
        }
    }

    #[test]
    fn test_config_without_font_uses_installed_faces() {
        let mut db = Database::new();
        db.load_system_fonts();
        if !db.faces().any(|face| load_face(&db, face.id).is_some()) {
            return;
        }
        let logger = BuildLogger::capturing();
        let fonts = Fonts::load(&SpriteConfig::default(), &logger).unwrap();
        assert!(!fonts.is_empty());
        assert!(!logger
            .logs()
            .iter()
            .any(|l| l.category.as_deref() == Some("warning")));
    }
}
