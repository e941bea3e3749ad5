//! Session driver
//!
//! Owns the one live `Session` and feeds it from two logical clocks: the
//! per-frame delta (movement and collisions) and a whole-second countdown
//! derived from the same deltas. Because both run through `advance`, only a
//! single writer ever touches the session.

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::consts::MAX_FRAME_DT;
use crate::error::Result;
use crate::highscores::HighScores;
use crate::hud::{Banner, BannerQueue};
use crate::sim::autopilot;
use crate::sim::{Axis, GameEvent, Session, SessionSnapshot, SessionSummary};
use crate::sim::{decrement_timer, end_session, tick};

/// Slack on the whole-second check; frame deltas like 1/60 don't sum to
/// exactly 1.0
const SECOND_EPSILON: f64 = 1e-6;

/// Everything the presentation layer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub session: SessionSnapshot,
    pub banners: Vec<Banner>,
    pub high_score: u32,
    /// Leaderboard rank of the last finished session, if it placed
    pub last_rank: Option<usize>,
}

pub struct Driver {
    session: Session,
    banners: BannerQueue,
    high_scores: HighScores,
    /// Fractional seconds not yet taken off the countdown
    second_accumulator: f64,
    /// Let the built-in steering play (demo/idle mode)
    autopilot: bool,
    /// Final score already written to the leaderboard
    recorded: bool,
    last_rank: Option<usize>,
}

impl Driver {
    pub fn new(config: SimConfig, seed: u64, high_scores: HighScores) -> Result<Self> {
        let banners = BannerQueue::new(config.banner_seconds);
        let session = Session::new(config, seed)?;
        Ok(Self {
            session,
            banners,
            high_scores,
            second_accumulator: 0.0,
            autopilot: false,
            recorded: false,
            last_rank: None,
        })
    }

    /// Start a new session with the same tuning; the leaderboard carries over
    pub fn restart(&mut self, seed: u64) -> Result<()> {
        self.session = Session::new(self.session.config.clone(), seed)?;
        self.banners.clear();
        self.second_accumulator = 0.0;
        self.recorded = false;
        self.last_rank = None;
        Ok(())
    }

    /// Run one animation frame
    ///
    /// Frame deltas above `MAX_FRAME_DT` are clamped so a stalled tab doesn't
    /// teleport the player. Returns every event raised this frame.
    pub fn advance(&mut self, frame_dt: f32) -> Vec<GameEvent> {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };

        if self.autopilot && self.session.is_running() {
            self.session.player.direction = autopilot::steer(&self.session);
        }

        let mut events = tick(&mut self.session, dt);

        // Countdown driver: one decrement per whole elapsed second
        if self.session.is_running() {
            self.second_accumulator += f64::from(dt);
            while self.second_accumulator >= 1.0 - SECOND_EPSILON {
                self.second_accumulator -= 1.0;
                if let Some(event) = decrement_timer(&mut self.session, 1) {
                    events.push(event);
                    break;
                }
            }
        }

        self.banners.update(dt);
        for event in &events {
            self.banners.push_event(event);
        }

        if self.session.is_ended() {
            self.record_final_score();
        }

        events
    }

    /// Abandon the current session early
    pub fn end(&mut self) -> Option<GameEvent> {
        let event = end_session(&mut self.session);
        if let Some(event) = &event {
            self.banners.push_event(event);
        }
        self.record_final_score();
        event
    }

    fn record_final_score(&mut self) {
        if self.recorded {
            return;
        }
        self.recorded = true;

        let summary = self.session.summary();
        self.last_rank = self.high_scores.record(&summary, now_ms());
        if self.last_rank.is_some() {
            self.high_scores.save();
        }
    }

    pub fn set_direction(&mut self, axis: Axis, value: i32) {
        self.session.set_direction(axis, value);
    }

    pub fn set_autopilot(&mut self, enabled: bool) {
        self.autopilot = enabled;
        if !enabled {
            self.session.player.direction = Default::default();
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn banners(&self) -> &[Banner] {
        self.banners.visible()
    }

    /// Summary of the finished session, `None` while still running
    pub fn result(&self) -> Option<SessionSummary> {
        self.session.is_ended().then(|| self.session.summary())
    }

    pub fn snapshot(&self) -> FrameSnapshot {
        FrameSnapshot {
            session: self.session.snapshot(),
            banners: self.banners.visible().to_vec(),
            high_score: self.high_scores.best(),
            last_rank: self.last_rank,
        }
    }
}

/// Wall clock in milliseconds, used only to timestamp leaderboard entries
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}
