//! Beat by Beat card generator
//!
//! Turns the card data CSV files into printable HTML/PDF sheets, Tabletop
//! Simulator sprite sheets and a TTS save file that references them.

pub mod config;
pub mod core;
pub mod error;
pub mod html;
pub mod layout;
pub mod loader;
pub mod logger;
pub mod pdf;
pub mod sprite;
pub mod stats;
pub mod tts;

pub use error::{CardGenError, Result};
