//! Card data loaders
//!
//! Parsers for the card data files (`moves.csv`, `rhythm-cards.csv`,
//! `judge-cards.csv`)

pub mod card;
pub mod card_set;
pub mod table;

pub use card::{JudgeLoader, MoveLoader, RhythmLoader};
pub use card_set::CardSet;
