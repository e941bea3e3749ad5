//! Game tuning and preferences
//!
//! Persisted separately from high scores in LocalStorage.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{Result, SimError};
use crate::storage;

const STORAGE_KEY: &str = "coin_rush_config";

/// Savings tips shown when a coin is collected
pub const DEFAULT_TIPS: &[&str] = &[
    "Pay yourself first: move savings out on payday.",
    "Build an emergency fund worth three months of expenses.",
    "Track every expense for a month to find leaks.",
    "Compare prices before any purchase over $50.",
    "Automate bill payments to avoid late fees.",
    "Cancel subscriptions you have not used this month.",
    "Cook at home: meal prep beats takeout.",
    "Wait 24 hours before an impulse purchase.",
];

/// "Bad decision" labels, assigned to obstacles by cycling index
pub const DEFAULT_OBSTACLE_LABELS: &[&str] = &[
    "Impulse shopping spree",
    "Payday loan",
    "Maxed-out credit card",
    "Skipping the budget",
    "Lottery tickets",
];

/// Simulation tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    // === Arena ===
    /// Play area spans [-half_extent, half_extent] on both axes
    pub half_extent: f32,
    /// Number of coins kept active
    pub coin_count: usize,
    /// Number of obstacles kept active
    pub obstacle_count: usize,

    // === Movement & collisions ===
    /// Player speed (units per second)
    pub player_speed: f32,
    pub coin_radius: f32,
    pub obstacle_radius: f32,
    /// Minimum distance from the player for newly placed entities
    pub exclusion_radius: f32,
    /// Rejection sampling cap; the last candidate is kept when exhausted
    pub max_placement_attempts: u32,

    // === Scoring ===
    pub coin_points: u32,
    pub obstacle_penalty: u32,
    /// Session length (whole seconds)
    pub session_seconds: u32,

    // === HUD ===
    pub banner_seconds: f32,

    // === Content ===
    pub tips: Vec<String>,
    pub obstacle_labels: Vec<String>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            half_extent: PLAY_HALF_EXTENT,
            coin_count: COIN_COUNT,
            obstacle_count: OBSTACLE_COUNT,

            player_speed: PLAYER_SPEED,
            coin_radius: COIN_RADIUS,
            obstacle_radius: OBSTACLE_RADIUS,
            exclusion_radius: EXCLUSION_RADIUS,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,

            coin_points: COIN_POINTS,
            obstacle_penalty: OBSTACLE_PENALTY,
            session_seconds: SESSION_SECONDS,

            banner_seconds: BANNER_SECONDS,

            tips: DEFAULT_TIPS.iter().map(|s| s.to_string()).collect(),
            obstacle_labels: DEFAULT_OBSTACLE_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl SimConfig {
    /// Override arena size and entity population, keeping other defaults
    pub fn with_arena(
        half_extent: f32,
        coin_count: usize,
        obstacle_count: usize,
        obstacle_labels: Vec<String>,
    ) -> Self {
        Self {
            half_extent,
            coin_count,
            obstacle_count,
            obstacle_labels,
            ..Self::default()
        }
    }

    /// Reject configurations that would put a session into an invalid state
    pub fn validate(&self) -> Result<()> {
        fn invalid(msg: impl Into<String>) -> Result<()> {
            Err(SimError::InvalidConfig(msg.into()))
        }

        if !self.half_extent.is_finite() || self.half_extent <= 0.0 {
            return invalid(format!("half_extent must be positive, got {}", self.half_extent));
        }
        if self.coin_count == 0 {
            return invalid("coin_count must be at least 1");
        }
        if self.obstacle_count == 0 {
            return invalid("obstacle_count must be at least 1");
        }
        if self.obstacle_labels.is_empty() {
            return invalid("obstacle_labels must not be empty");
        }
        if self.tips.is_empty() {
            return invalid("tips must not be empty");
        }
        for (name, value) in [
            ("player_speed", self.player_speed),
            ("coin_radius", self.coin_radius),
            ("obstacle_radius", self.obstacle_radius),
            ("exclusion_radius", self.exclusion_radius),
            ("banner_seconds", self.banner_seconds),
        ] {
            if !value.is_finite() || value < 0.0 {
                return invalid(format!("{} must be finite and non-negative, got {}", name, value));
            }
        }
        if self.max_placement_attempts == 0 {
            return invalid("max_placement_attempts must be at least 1");
        }
        if self.session_seconds == 0 {
            return invalid("session_seconds must be at least 1");
        }
        Ok(())
    }

    /// Parse and validate a JSON config; missing fields take defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Label for the obstacle at `index` (cycles through the list)
    pub fn label_for(&self, index: usize) -> &str {
        &self.obstacle_labels[index % self.obstacle_labels.len()]
    }

    /// Stored config if present and valid, otherwise defaults
    pub fn load() -> Self {
        let stored = storage::load_json::<Self>(STORAGE_KEY);
        match stored.map(|config| config.validate().map(|_| config)) {
            Some(Ok(config)) => {
                log::info!("Loaded config from LocalStorage");
                config
            }
            Some(Err(e)) => {
                log::warn!("Ignoring stored config: {}", e);
                Self::default()
            }
            None => Self::default(),
        }
    }

    /// Persist this config; returns whether a backing store took it
    pub fn save(&self) -> bool {
        let saved = storage::save_json(STORAGE_KEY, self);
        if saved {
            log::info!("Config saved");
        }
        saved
    }
}
