//! Transient HUD banners
//!
//! Each game event turns into a short-lived message (savings tip, warning,
//! game over) that the presentation layer draws until it expires.

use serde::{Deserialize, Serialize};

use crate::sim::GameEvent;

/// Most banners kept at once; the oldest is dropped first
pub const MAX_BANNERS: usize = 4;

/// Banner flavor (drives color/icon in the UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BannerKind {
    Tip,
    Warning,
    GameOver,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Banner {
    pub kind: BannerKind,
    pub text: String,
    /// Seconds left on screen
    pub remaining: f32,
}

impl Banner {
    pub fn from_event(event: &GameEvent, duration: f32) -> Self {
        let (kind, text) = match event {
            GameEvent::CoinCollected { tip, .. } => (BannerKind::Tip, tip.clone()),
            GameEvent::ObstacleHit { label, .. } => {
                (BannerKind::Warning, format!("Bad decision: {}", label))
            }
            GameEvent::SessionEnded { final_score } => {
                (BannerKind::GameOver, format!("Time's up! Final score: {}", final_score))
            }
        };
        Self {
            kind,
            text,
            remaining: duration,
        }
    }
}

/// Queue of visible banners, newest last
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BannerQueue {
    banners: Vec<Banner>,
    /// How long each new banner stays up
    duration: f32,
}

impl BannerQueue {
    pub fn new(duration: f32) -> Self {
        Self {
            banners: Vec::with_capacity(MAX_BANNERS),
            duration,
        }
    }

    pub fn push_event(&mut self, event: &GameEvent) {
        self.banners.push(Banner::from_event(event, self.duration));
        if self.banners.len() > MAX_BANNERS {
            self.banners.remove(0);
        }
    }

    /// Age every banner and drop the expired ones
    pub fn update(&mut self, dt: f32) {
        for banner in &mut self.banners {
            banner.remaining -= dt;
        }
        self.banners.retain(|b| b.remaining > 0.0);
    }

    pub fn visible(&self) -> &[Banner] {
        &self.banners
    }

    pub fn clear(&mut self) {
        self.banners.clear();
    }
}
