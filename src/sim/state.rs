//! Session state and core simulation types
//!
//! One `Session` holds everything a play-through mutates. There is no shared
//! global state: the driver owns the session and passes it to `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::error::Result;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Timer counting down, ticks advance the world
    Running,
    /// Timer expired or session abandoned; state is frozen
    Ended,
}

/// Movement axis on the play plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    X,
    Z,
}

/// Per-axis movement direction, each component in {-1, 0, 1}
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    pub x: i8,
    pub z: i8,
}

impl Direction {
    /// Set one axis; out-of-range values snap to the nearest of -1, 0, 1
    pub fn set(&mut self, axis: Axis, value: i32) {
        let value = value.clamp(-1, 1) as i8;
        match axis {
            Axis::X => self.x = value,
            Axis::Z => self.z = value,
        }
    }

    pub fn get(&self, axis: Axis) -> i8 {
        match axis {
            Axis::X => self.x,
            Axis::Z => self.z,
        }
    }

    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x as f32, self.z as f32)
    }

    pub fn is_idle(&self) -> bool {
        self.x == 0 && self.z == 0
    }
}

/// The player avatar
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub direction: Direction,
}

/// A collectible coin
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub id: u32,
    pub pos: Vec2,
}

/// A "bad decision" obstacle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub id: u32,
    pub pos: Vec2,
    /// Shown to the player when this obstacle is hit
    pub label: String,
}

/// Something that happened during a tick or timer update
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Coin picked up; carries a random savings tip
    CoinCollected { coin_id: u32, pos: Vec2, tip: String },
    /// Player ran into an obstacle; carries its label
    ObstacleHit { obstacle_id: u32, pos: Vec2, label: String },
    /// Session finished (timer expiry or explicit end)
    SessionEnded { final_score: u32 },
}

/// Counters reported at the end of a session
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionStats {
    pub coins_collected: u32,
    pub obstacles_hit: u32,
    /// Simulation tick counter
    pub ticks: u64,
    /// Simulated seconds of movement
    pub elapsed: f32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    pub config: SimConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: SessionPhase,
    pub score: u32,
    /// Whole seconds left on the countdown
    pub time_remaining: u32,
    pub player: Player,
    /// Active coins; length always equals `config.coin_count`
    pub coins: Vec<Coin>,
    /// Active obstacles; length always equals `config.obstacle_count`
    pub obstacles: Vec<Obstacle>,
    pub stats: SessionStats,
    /// Next entity ID
    next_id: u32,
}

impl Session {
    /// Start a fresh session: player at origin, entities scattered uniformly
    pub fn new(config: SimConfig, seed: u64) -> Result<Self> {
        config.validate()?;

        let mut session = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: SessionPhase::Running,
            score: 0,
            time_remaining: config.session_seconds,
            player: Player::default(),
            coins: Vec::with_capacity(config.coin_count),
            obstacles: Vec::with_capacity(config.obstacle_count),
            stats: SessionStats::default(),
            next_id: 1,
            config,
        };

        // Initial placement skips the exclusion check
        for _ in 0..session.config.coin_count {
            let id = session.next_entity_id();
            let pos = session.random_position();
            session.coins.push(Coin { id, pos });
        }
        for i in 0..session.config.obstacle_count {
            let id = session.next_entity_id();
            let pos = session.random_position();
            let label = session.config.label_for(i).to_string();
            session.obstacles.push(Obstacle { id, pos, label });
        }

        log::info!(
            "Session started (seed {}, {} coins, {} obstacles, {}s)",
            seed,
            session.coins.len(),
            session.obstacles.len(),
            session.time_remaining
        );

        Ok(session)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Uniform random point inside the play bounds
    pub fn random_position(&mut self) -> Vec2 {
        let h = self.config.half_extent;
        Vec2::new(self.rng.random_range(-h..=h), self.rng.random_range(-h..=h))
    }

    /// Random savings tip
    pub fn random_tip(&mut self) -> String {
        let idx = self.rng.random_range(0..self.config.tips.len());
        self.config.tips[idx].clone()
    }

    /// Update the player's movement direction on one axis
    pub fn set_direction(&mut self, axis: Axis, value: i32) {
        self.player.direction.set(axis, value);
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    pub fn is_ended(&self) -> bool {
        self.phase == SessionPhase::Ended
    }

    /// Read-only view for presentation
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase,
            score: self.score,
            time_remaining: self.time_remaining,
            player: self.player.pos,
            coins: self.coins.iter().map(|c| c.pos).collect(),
            obstacles: self
                .obstacles
                .iter()
                .map(|o| ObstacleView { pos: o.pos, label: o.label.clone() })
                .collect(),
        }
    }

    /// Final numbers for score reporting
    pub fn summary(&self) -> SessionSummary {
        SessionSummary {
            seed: self.seed,
            score: self.score,
            stats: self.stats.clone(),
        }
    }
}

/// Obstacle as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObstacleView {
    pub pos: Vec2,
    pub label: String,
}

/// Positions and counters needed to redraw a frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub score: u32,
    pub time_remaining: u32,
    pub player: Vec2,
    pub coins: Vec<Vec2>,
    pub obstacles: Vec<ObstacleView>,
}

/// Outcome of a finished session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub seed: u64,
    pub score: u32,
    pub stats: SessionStats,
}
