//! Tabletop Simulator sprite sheets
//!
//! Face sheets are rendered on the full grid whatever the card count, so the
//! TTS save can always declare the same sheet dimensions. Backs are single
//! card-sized images, one per kind.

pub mod draw;
pub mod font;

use crate::config::SpriteConfig;
use crate::core::CardKind;
use crate::layout::{back_file_name, FaceSheet, SheetGrid, SpriteLayout};
use crate::logger::BuildLogger;
use crate::Result;
use draw::CardCell;
use font::Fonts;
use image::{Rgb, RgbImage};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

pub use font::TextSize;

/// Sheet and cell geometry in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetGeometry {
    pub width: u32,
    pub height: u32,
    pub card_width: u32,
    pub card_height: u32,
}

impl SheetGeometry {
    pub fn from_config(config: &SpriteConfig) -> Self {
        SheetGeometry {
            width: config.sheet_width,
            height: config.sheet_height,
            card_width: config.card_width(),
            card_height: config.card_height(),
        }
    }
}

/// Render one face sheet into an image
pub fn render_face_sheet(
    sheet: &FaceSheet<'_>,
    grid: SheetGrid,
    geometry: SheetGeometry,
    fonts: &Fonts,
) -> RgbImage {
    let mut img = RgbImage::from_pixel(geometry.width, geometry.height, Rgb([255, 255, 255]));
    for (index, card) in sheet.cards.iter().enumerate() {
        let origin = grid.origin_of(index, geometry.card_width, geometry.card_height);
        CardCell::new(
            &mut img,
            fonts,
            origin,
            geometry.card_width,
            geometry.card_height,
        )
        .draw(card);
    }
    img
}

/// Render the back image for a kind
pub fn render_back(kind: CardKind, geometry: SheetGeometry, fonts: &Fonts) -> RgbImage {
    let (w, h) = (geometry.card_width, geometry.card_height);
    let mut img = RgbImage::from_pixel(w, h, Rgb([255, 255, 255]));
    CardCell::new(&mut img, fonts, (0, 0), w, h).draw_back(kind);
    img
}

/// Writes sprite sheets and back images for a sprite layout
pub struct SpriteGenerator<'a> {
    output_dir: &'a Path,
    geometry: SheetGeometry,
    fonts: Fonts,
    logger: &'a BuildLogger,
}

impl<'a> SpriteGenerator<'a> {
    pub fn new(
        output_dir: &'a Path,
        config: &SpriteConfig,
        logger: &'a BuildLogger,
    ) -> Result<Self> {
        Ok(SpriteGenerator {
            output_dir,
            geometry: SheetGeometry::from_config(config),
            fonts: Fonts::load(config, logger)?,
            logger,
        })
    }

    /// A generator with explicit fonts, used when no font lookup is wanted
    pub fn with_fonts(
        output_dir: &'a Path,
        config: &SpriteConfig,
        fonts: Fonts,
        logger: &'a BuildLogger,
    ) -> Self {
        SpriteGenerator {
            output_dir,
            geometry: SheetGeometry::from_config(config),
            fonts,
            logger,
        }
    }

    /// Render every face sheet and back image, returning the written paths
    pub fn generate(&self, layout: &SpriteLayout<'_>) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(self.output_dir)?;

        // The logger is not Sync, so workers only see the render inputs
        let (output_dir, geometry, fonts) = (self.output_dir, self.geometry, &self.fonts);
        let faces = layout
            .faces
            .par_iter()
            .map(|sheet| {
                let path = output_dir.join(&sheet.file_name);
                render_face_sheet(sheet, layout.grid, geometry, fonts).save(&path)?;
                Ok((path, sheet.cards.len()))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut written = Vec::with_capacity(faces.len());
        for (path, count) in faces {
            self.logger
                .normal(&format!("Generated: {} ({count} cards)", display_name(&path)));
            written.push(path);
        }

        for kind in layout.kinds_present() {
            let path = self.output_dir.join(back_file_name(kind));
            render_back(kind, self.geometry, &self.fonts).save(&path)?;
            self.logger
                .normal(&format!("Generated: {}", display_name(&path)));
            written.push(path);
        }

        Ok(written)
    }
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
