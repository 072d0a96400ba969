//! Session leaderboard
//!
//! Tracks the top 10 finished runs for as long as the process lives.

use serde::{Deserialize, Serialize};

use crate::sim::GameOverSummary;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

/// A single high score entry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    /// Seconds survived
    pub elapsed: f32,
}

/// High score leaderboard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Position a score would take, 0-indexed. Ties rank below earlier runs.
    fn slot(&self, score: u64) -> Option<usize> {
        if score == 0 {
            return None;
        }
        let slot = self.entries.partition_point(|e| e.score >= score);
        (slot < MAX_HIGH_SCORES).then_some(slot)
    }

    /// Check if a score would make the board
    pub fn qualifies(&self, score: u64) -> bool {
        self.slot(score).is_some()
    }

    /// Record a finished run. Returns the rank reached (1-indexed), or
    /// `None` if the run didn't make the board.
    pub fn add_run(&mut self, summary: &GameOverSummary) -> Option<usize> {
        let slot = self.slot(summary.score)?;
        self.entries.insert(
            slot,
            HighScoreEntry {
                score: summary.score,
                elapsed: summary.elapsed,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);
        Some(slot + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(score: u64) -> GameOverSummary {
        GameOverSummary {
            elapsed: 12.0,
            score,
        }
    }

    #[test]
    fn test_zero_never_qualifies() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_run(&run(0)), None);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_sorted_descending() {
        let mut scores = HighScores::new();
        assert_eq!(scores.add_run(&run(100)), Some(1));
        assert_eq!(scores.add_run(&run(300)), Some(1));
        assert_eq!(scores.add_run(&run(200)), Some(2));
        let ordered: Vec<u64> = scores.entries.iter().map(|e| e.score).collect();
        assert_eq!(ordered, vec![300, 200, 100]);
        assert_eq!(scores.top_score(), Some(300));
    }

    #[test]
    fn test_capped_at_max() {
        let mut scores = HighScores::new();
        for s in 1..=(MAX_HIGH_SCORES as u64 + 5) {
            scores.add_run(&run(s * 10));
        }
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
        assert!(!scores.qualifies(10));
        assert_eq!(scores.add_run(&run(1000)), Some(1));
        assert_eq!(scores.entries.len(), MAX_HIGH_SCORES);
    }

    #[test]
    fn test_ties_rank_below_earlier_runs() {
        let mut scores = HighScores::new();
        scores.add_run(&GameOverSummary {
            elapsed: 1.0,
            score: 50,
        });
        assert_eq!(scores.add_run(&run(50)), Some(2));
        assert_eq!(scores.entries[0].elapsed, 1.0);
        assert_eq!(scores.entries[1].elapsed, 12.0);
    }
}
