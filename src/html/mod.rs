//! Printable HTML card sheets
//!
//! Each document is a sequence of letter-size sheets holding a 3x3 grid of
//! cards, with the stylesheet embedded so the file renders standalone.

pub mod cards;
pub mod css;
pub mod icons;

use crate::core::CardKind;
use crate::layout::{paginate, PrintDeck, PrintRun, PrintedCard};
use crate::logger::BuildLogger;
use crate::Result;
use std::fs;
use std::path::{Path, PathBuf};

pub use css::CARDS_PER_SHEET;

/// A written HTML document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlDocument {
    pub path: PathBuf,
    pub sheets: usize,
}

impl HtmlDocument {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Wrap pages of rendered card fragments into a complete document
pub fn render_document(pages: &[Vec<String>], title: &str) -> String {
    let sheets: String = pages
        .iter()
        .map(|page| format!("    <div class=\"sheet\">\n        {}\n    </div>", page.concat()))
        .collect();

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>Beat by Beat - {title} Cards</title>
    <style>{css}</style>
</head>
<body>
{sheets}
</body>
</html>"#,
        css = css::STYLESHEET,
    )
}

/// Lay cards out on 9-card sheets, padding the last one with empty cells
pub fn render_sheets(printed: &[PrintedCard<'_>]) -> Vec<Vec<String>> {
    paginate(printed, CARDS_PER_SHEET)
        .into_iter()
        .map(|page| {
            page.iter()
                .map(|cell| match cell {
                    Some(card) => cards::render_card(card),
                    None => cards::EMPTY_CELL.to_string(),
                })
                .collect()
        })
        .collect()
}

/// Writes every printable document for a print run
pub struct HtmlGenerator<'a> {
    output_dir: &'a Path,
    logger: &'a BuildLogger,
}

impl<'a> HtmlGenerator<'a> {
    pub fn new(output_dir: &'a Path, logger: &'a BuildLogger) -> Self {
        HtmlGenerator { output_dir, logger }
    }

    /// Write all card and back documents, returning them in write order
    ///
    /// Decks with no cards produce no document.
    pub fn generate(&self, run: &PrintRun<'_>) -> Result<Vec<HtmlDocument>> {
        fs::create_dir_all(self.output_dir)?;
        let mut written = Vec::new();

        for deck in PrintDeck::ALL {
            let printed = run.deck(deck);
            if printed.is_empty() {
                self.logger
                    .verbose(&format!("Skipping {}: no cards", deck.file_stem()));
                continue;
            }
            let doc = self.write(deck.file_stem(), deck.title(), &render_sheets(printed))?;
            written.push(doc);
        }

        // Starter and pool moves together, as one printable set
        let moves = run.cards_of(CardKind::Move);
        if !moves.is_empty() {
            written.push(self.write("move-cards", "Move", &render_sheets(&moves))?);
        }

        for kind in CardKind::ALL {
            let backs = vec![cards::card_back(kind); CARDS_PER_SHEET];
            let title = format!("{}-Back", kind.title());
            written.push(self.write(&format!("{}-backs", kind.slug()), &title, &[backs])?);
        }

        Ok(written)
    }

    fn write(&self, stem: &str, title: &str, pages: &[Vec<String>]) -> Result<HtmlDocument> {
        let path = self.output_dir.join(format!("{stem}.html"));
        fs::write(&path, render_document(pages, title))?;
        let doc = HtmlDocument {
            path,
            sheets: pages.len(),
        };
        self.logger.normal(&format!(
            "Generated: {} ({} sheets)",
            doc.file_name(),
            doc.sheets
        ));
        Ok(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sheets_pads_with_empty_cells() {
        let stumbles = vec![PrintedCard::Stumble; 10];
        let pages = render_sheets(&stumbles);
        assert_eq!(pages.len(), 2);
        assert!(pages.iter().all(|p| p.len() == CARDS_PER_SHEET));
        assert_eq!(
            pages[1].iter().filter(|c| c.as_str() == cards::EMPTY_CELL).count(),
            8
        );
    }

    #[test]
    fn test_render_document_structure() {
        let pages = vec![vec!["<p>a</p>".to_string()], vec!["<p>b</p>".to_string()]];
        let html = render_document(&pages, "Judge");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Beat by Beat - Judge Cards</title>"));
        assert_eq!(html.matches("<div class=\"sheet\">").count(), 2);
        assert!(html.contains("grid-template-columns: repeat(3, 2.5in);"));
    }
}
