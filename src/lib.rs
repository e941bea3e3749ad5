//! Coin Rush - finance-themed coin collecting mini-game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, session state)
//! - `driver`: Frame/timer driver that owns a session
//! - `hud`: Transient tip/warning banners
//! - `highscores`: Leaderboard retained across sessions
//! - `config`: Data-driven game tuning
//! - `storage`: LocalStorage persistence (browser only)
//!
//! Positions live on the horizontal plane. They are stored in a `Vec2` whose
//! `x` is world X and whose `y` carries world Z; height is never simulated.

pub mod config;
pub mod driver;
pub mod error;
pub mod highscores;
pub mod hud;
pub mod sim;
pub mod storage;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::SimConfig;
pub use driver::Driver;
pub use error::SimError;
pub use highscores::HighScores;

use glam::Vec2;

/// Game configuration constants (defaults for `SimConfig`)
pub mod consts {
    /// Half the side length of the square play area (plane spans [-14, 14])
    pub const PLAY_HALF_EXTENT: f32 = 14.0;

    /// Entity counts
    pub const COIN_COUNT: usize = 10;
    pub const OBSTACLE_COUNT: usize = 5;

    /// Player movement speed (units per second)
    pub const PLAYER_SPEED: f32 = 5.0;

    /// Collision radii (planar distance, strict less-than)
    pub const COIN_RADIUS: f32 = 1.2;
    pub const OBSTACLE_RADIUS: f32 = 1.3;

    /// Minimum distance between the player and a freshly placed entity
    pub const EXCLUSION_RADIUS: f32 = 5.0;
    /// Rejection sampling attempts before accepting the last candidate
    pub const MAX_PLACEMENT_ATTEMPTS: u32 = 100;

    /// Scoring
    pub const COIN_POINTS: u32 = 10;
    pub const OBSTACLE_PENALTY: u32 = 5;

    /// Session length in whole seconds
    pub const SESSION_SECONDS: u32 = 60;

    /// How long a tip/warning banner stays on screen
    pub const BANNER_SECONDS: f32 = 3.0;
    /// Largest frame delta fed to the simulation (avoids huge jumps after a stall)
    pub const MAX_FRAME_DT: f32 = 0.1;
}

/// Planar Euclidean distance; the vertical axis is never compared
#[inline]
pub fn planar_distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Clamp a position into the square [-half_extent, half_extent] on both axes
#[inline]
pub fn clamp_to_bounds(pos: Vec2, half_extent: f32) -> Vec2 {
    pos.clamp(Vec2::splat(-half_extent), Vec2::splat(half_extent))
}
