//! High score leaderboard
//!
//! Persisted to LocalStorage, tracks the top 10 sessions. The best entry is
//! the high score carried across sessions.

use serde::{Deserialize, Serialize};

use crate::sim::SessionSummary;
use crate::storage;

/// Maximum number of high scores to keep
pub const MAX_HIGH_SCORES: usize = 10;

const STORAGE_KEY: &str = "coin_rush_highscores";

/// A single high score entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u32,
    pub coins_collected: u32,
    pub obstacles_hit: u32,
    /// Unix timestamp (ms) when achieved
    pub timestamp: f64,
}

/// Leaderboard, sorted by descending score
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// A non-zero score places if the board has room or it beats the last entry
    pub fn qualifies(&self, score: u32) -> bool {
        score > 0
            && (self.entries.len() < MAX_HIGH_SCORES
                || self.entries.last().is_some_and(|e| score > e.score))
    }

    /// Record a finished session, returning its 1-based rank if it placed
    ///
    /// Ties rank below existing entries with the same score.
    pub fn record(&mut self, summary: &SessionSummary, timestamp: f64) -> Option<usize> {
        if !self.qualifies(summary.score) {
            return None;
        }

        let idx = self.entries.partition_point(|e| e.score >= summary.score);
        self.entries.insert(
            idx,
            HighScoreEntry {
                score: summary.score,
                coins_collected: summary.stats.coins_collected,
                obstacles_hit: summary.stats.obstacles_hit,
                timestamp,
            },
        );
        self.entries.truncate(MAX_HIGH_SCORES);

        log::info!("New high score {} (rank {})", summary.score, idx + 1);
        Some(idx + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score ever recorded (0 when empty)
    pub fn best(&self) -> u32 {
        self.entries.first().map_or(0, |e| e.score)
    }

    /// Stored leaderboard, or an empty one
    pub fn load() -> Self {
        match storage::load_json::<Self>(STORAGE_KEY) {
            Some(scores) => {
                log::info!("Loaded {} high scores", scores.entries.len());
                scores
            }
            None => Self::new(),
        }
    }

    pub fn save(&self) {
        if storage::save_json(STORAGE_KEY, self) {
            log::info!("High scores saved ({} entries)", self.entries.len());
        }
    }
}
