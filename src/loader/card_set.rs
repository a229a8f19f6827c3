//! The full set of card definitions for one generation run

use crate::core::{DeckType, Judge, Move, Rhythm};
use crate::loader::card::{JudgeLoader, MoveLoader, RhythmLoader};
use crate::Result;
use std::path::Path;

/// Every card definition, as loaded from the data directory
#[derive(Debug, Clone, Default)]
pub struct CardSet {
    pub moves: Vec<Move>,
    pub rhythms: Vec<Rhythm>,
    pub judges: Vec<Judge>,
}

impl CardSet {
    /// Load `moves.csv`, `rhythm-cards.csv` and `judge-cards.csv` from `data_dir`
    pub fn load(data_dir: &Path) -> Result<Self> {
        Ok(CardSet {
            moves: MoveLoader::load_from_file(&data_dir.join(MoveLoader::FILE_NAME))?,
            rhythms: RhythmLoader::load_from_file(&data_dir.join(RhythmLoader::FILE_NAME))?,
            judges: JudgeLoader::load_from_file(&data_dir.join(JudgeLoader::FILE_NAME))?,
        })
    }

    pub fn starter_moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| m.deck == DeckType::Starter)
    }

    pub fn pool_moves(&self) -> impl Iterator<Item = &Move> {
        self.moves.iter().filter(|m| m.deck == DeckType::Pool)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{MoveType, RecoveryAction, StyleSpec};

    fn mv(name: &str, deck: DeckType) -> Move {
        Move {
            name: name.to_string(),
            cost: 1,
            move_type: MoveType::Step,
            style: StyleSpec::None,
            bonus: 1,
            recovery: RecoveryAction::Stamina,
            deck,
        }
    }

    #[test]
    fn test_starter_and_pool_split_keeps_order() {
        let set = CardSet {
            moves: vec![
                mv("a", DeckType::Starter),
                mv("b", DeckType::Pool),
                mv("c", DeckType::Starter),
            ],
            ..Default::default()
        };
        let starters: Vec<_> = set.starter_moves().map(|m| m.name.as_str()).collect();
        let pool: Vec<_> = set.pool_moves().map(|m| m.name.as_str()).collect();
        assert_eq!(starters, vec!["a", "c"]);
        assert_eq!(pool, vec!["b"]);
    }
}
