//! Respawn placement with an exclusion radius around the player
//!
//! Rejection sampling: draw uniform points in the play bounds until one is at
//! least `exclusion_radius` from the player. The loop is capped; once the cap
//! is hit the last candidate is used even if it is too close.

use glam::Vec2;
use rand::Rng;

use crate::planar_distance;

/// Outcome of a placement attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub pos: Vec2,
    /// Candidates drawn, including the accepted one
    pub attempts: u32,
    /// True when the cap ran out before a valid candidate was found
    pub capped: bool,
}

/// Sample a position inside `[-half_extent, half_extent]²` away from `player_pos`
pub fn place_away_from<R: Rng>(
    rng: &mut R,
    half_extent: f32,
    player_pos: Vec2,
    exclusion_radius: f32,
    max_attempts: u32,
) -> Placement {
    let max_attempts = max_attempts.max(1);
    let mut candidate = Vec2::ZERO;

    for attempt in 1..=max_attempts {
        candidate = Vec2::new(
            rng.random_range(-half_extent..=half_extent),
            rng.random_range(-half_extent..=half_extent),
        );
        if planar_distance(candidate, player_pos) >= exclusion_radius {
            return Placement {
                pos: candidate,
                attempts: attempt,
                capped: false,
            };
        }
    }

    log::warn!(
        "Placement gave up after {} attempts; accepting ({:.2}, {:.2}) near player",
        max_attempts,
        candidate.x,
        candidate.y
    );
    Placement {
        pos: candidate,
        attempts: max_attempts,
        capped: true,
    }
}
