//! Card file loaders (.csv format)
//!
//! One loader per card data file. Each exposes `load_from_file` and a
//! `parse` that works on in-memory text.

use crate::core::{DeckType, Judge, Move, MoveType, RecoveryAction, Rhythm, StyleSpec};
use crate::loader::table::CsvTable;
use crate::{CardGenError, Result};
use std::fs;
use std::path::Path;

fn read_data_file(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(CardGenError::MissingDataFile(path.to_path_buf()));
    }
    Ok(fs::read_to_string(path)?)
}

fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Loader for `moves.csv`
pub struct MoveLoader;

impl MoveLoader {
    pub const FILE_NAME: &'static str = "moves.csv";
    const COLUMNS: [&'static str; 6] = ["name", "cost", "type", "style", "bonus", "deck_type"];

    pub fn load_from_file(path: &Path) -> Result<Vec<Move>> {
        let content = read_data_file(path)?;
        Self::parse(&file_label(path), &content)
    }

    pub fn parse(file: &str, content: &str) -> Result<Vec<Move>> {
        let table = CsvTable::parse(file, content)?;
        table.require_columns(&Self::COLUMNS)?;

        table
            .rows()
            .map(|row| {
                Ok(Move {
                    name: row.string("name"),
                    cost: row.number("cost")?,
                    move_type: MoveType::parse(row.text("type")),
                    style: StyleSpec::parse(row.text("style")),
                    bonus: row.number("bonus")?,
                    // Optional column
                    recovery: RecoveryAction::parse(row.text("recovery_action")),
                    deck: DeckType::parse(row.text("deck_type")),
                })
            })
            .collect()
    }
}

/// Loader for `rhythm-cards.csv`
pub struct RhythmLoader;

impl RhythmLoader {
    pub const FILE_NAME: &'static str = "rhythm-cards.csv";
    const COLUMNS: [&'static str; 3] = ["name", "effect", "condition"];

    pub fn load_from_file(path: &Path) -> Result<Vec<Rhythm>> {
        let content = read_data_file(path)?;
        Self::parse(&file_label(path), &content)
    }

    pub fn parse(file: &str, content: &str) -> Result<Vec<Rhythm>> {
        let table = CsvTable::parse(file, content)?;
        table.require_columns(&Self::COLUMNS)?;

        table
            .rows()
            .map(|row| {
                Ok(Rhythm {
                    name: row.string("name"),
                    effect: row.optional("effect"),
                    condition: row.optional("condition"),
                    flavor_text: row.optional("flavor_text"),
                    copies: row.number_or("copies", 1)?,
                })
            })
            .collect()
    }
}

/// Loader for `judge-cards.csv`
pub struct JudgeLoader;

impl JudgeLoader {
    pub const FILE_NAME: &'static str = "judge-cards.csv";
    const COLUMNS: [&'static str; 7] = [
        "name",
        "title",
        "difficulty",
        "flavor_quote",
        "requirement",
        "reward_points",
        "ongoing_effect",
    ];

    pub fn load_from_file(path: &Path) -> Result<Vec<Judge>> {
        let content = read_data_file(path)?;
        Self::parse(&file_label(path), &content)
    }

    pub fn parse(file: &str, content: &str) -> Result<Vec<Judge>> {
        let table = CsvTable::parse(file, content)?;
        table.require_columns(&Self::COLUMNS)?;

        table
            .rows()
            .map(|row| {
                Ok(Judge {
                    name: row.string("name"),
                    title: row.string("title"),
                    difficulty: row.number("difficulty")?,
                    flavor_quote: row.string("flavor_quote"),
                    requirement: row.string("requirement"),
                    reward_points: row.number("reward_points")?,
                    ongoing_effect: row.string("ongoing_effect"),
                })
            })
            .collect()
    }
}
