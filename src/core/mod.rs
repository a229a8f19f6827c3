//! Core card types

pub mod card;
pub mod style;

pub use card::{CardKind, DeckType, Judge, Move, MoveType, RecoveryAction, Rhythm, Stumble};
pub use style::{Color, Style, StyleSpec};
