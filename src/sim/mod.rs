//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Caller-supplied time deltas only (no clocks)
//! - Seeded RNG only
//! - Stable iteration order (container order, replacements keep their slot)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod placement;
pub mod state;
pub mod tick;

pub use collision::{CollisionResult, player_entity_collision};
pub use placement::{Placement, place_away_from};
pub use state::{
    Axis, Coin, Direction, GameEvent, Obstacle, ObstacleView, Player, Session, SessionPhase,
    SessionSnapshot, SessionStats, SessionSummary,
};
pub use tick::{decrement_timer, end_session, tick};
