//! Move type distribution of the pool deck

use crate::loader::CardSet;
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeShare {
    pub move_type: String,
    pub count: usize,
    /// Whole percent, half-way cases rounded to even
    pub percent: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolStats {
    pub total: usize,
    /// Sorted by type name
    pub shares: Vec<TypeShare>,
}

impl PoolStats {
    pub fn from_cards(cards: &CardSet) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for mv in cards.pool_moves() {
            *counts.entry(mv.move_type.as_str()).or_default() += 1;
        }
        let total: usize = counts.values().sum();
        let shares = counts
            .into_iter()
            .map(|(move_type, count)| TypeShare {
                move_type: move_type.to_string(),
                count,
                percent: percent_of(count, total),
            })
            .collect();
        PoolStats { total, shares }
    }

    pub fn percent(&self, move_type: &str) -> Option<u32> {
        self.shares
            .iter()
            .find(|s| s.move_type == move_type)
            .map(|s| s.percent)
    }
}

fn percent_of(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as f64 / total as f64 * 100.0).round_ties_even() as u32
}

impl fmt::Display for PoolStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Move Type Distribution in Pool Deck:")?;
        writeln!(f, "Total pool moves: {}", self.total)?;
        writeln!(f)?;
        for share in &self.shares {
            writeln!(
                f,
                "{:8} {:3} cards ({:2}%)",
                share.move_type, share.count, share.percent
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DeckType, Move, MoveType, RecoveryAction, StyleSpec};

    fn mv(move_type: &str, deck: DeckType) -> Move {
        Move {
            name: move_type.to_string(),
            cost: 1,
            move_type: MoveType::parse(move_type),
            style: StyleSpec::None,
            bonus: 0,
            recovery: RecoveryAction::Stamina,
            deck,
        }
    }

    fn cards(types: &[&str]) -> CardSet {
        let mut moves: Vec<Move> = types.iter().map(|t| mv(t, DeckType::Pool)).collect();
        moves.push(mv("Step", DeckType::Starter));
        CardSet {
            moves,
            ..CardSet::default()
        }
    }

    #[test]
    fn test_only_pool_moves_count() {
        let stats = PoolStats::from_cards(&cards(&["Spin", "Step", "Spin", "Jump"]));
        assert_eq!(stats.total, 4);
        assert_eq!(stats.percent("Spin"), Some(50));
        assert_eq!(stats.percent("Step"), Some(25));
        assert_eq!(stats.percent("Pose"), None);
        let names: Vec<&str> = stats.shares.iter().map(|s| s.move_type.as_str()).collect();
        assert_eq!(names, vec!["Jump", "Spin", "Step"]);
    }

    #[test]
    fn test_half_percent_rounds_to_even() {
        // 1/8 = 12.5% and 3/8 = 37.5%
        let stats = PoolStats::from_cards(&cards(&[
            "Pop", "Flow", "Flow", "Flow", "Step", "Step", "Step", "Step",
        ]));
        assert_eq!(stats.percent("Pop"), Some(12));
        assert_eq!(stats.percent("Flow"), Some(38));
        assert_eq!(stats.percent("Step"), Some(50));
    }

    #[test]
    fn test_empty_pool() {
        let stats = PoolStats::from_cards(&CardSet::default());
        assert_eq!(stats.total, 0);
        assert!(stats.shares.is_empty());
    }

    #[test]
    fn test_display() {
        let text = PoolStats::from_cards(&cards(&["Spin", "Spin"])).to_string();
        assert!(text.contains("Total pool moves: 2"));
        assert!(text.contains("Spin       2 cards (100%)"));
    }
}
