//! Idle/demo steering
//!
//! Picks a direction toward the nearest coin, sidestepping an obstacle that
//! sits on the way. Produces the same `Direction` a keyboard would.

use glam::Vec2;

use super::state::{Direction, Session};

/// Per-axis dead zone so the player doesn't jitter around a target
const DEAD_ZONE: f32 = 0.25;

/// How close an obstacle must be to the straight path before we dodge it
const DODGE_MARGIN: f32 = 1.0;

fn axis_sign(delta: f32) -> i8 {
    if delta > DEAD_ZONE {
        1
    } else if delta < -DEAD_ZONE {
        -1
    } else {
        0
    }
}

/// Direction toward the nearest coin, or idle if there is none
pub fn steer(state: &Session) -> Direction {
    let player = state.player.pos;

    let Some(target) = nearest_coin(state) else {
        return Direction::default();
    };

    let to_target = target - player;
    let mut direction = Direction {
        x: axis_sign(to_target.x),
        z: axis_sign(to_target.y),
    };

    // Dodge: if the next step heads straight into an obstacle, drop that axis
    let step = direction.as_vec2().normalize_or_zero();
    let blocked = state.obstacles.iter().any(|o| {
        let to_obstacle = o.pos - player;
        let ahead = to_obstacle.dot(step);
        let lateral = (to_obstacle - step * ahead).length();
        ahead > 0.0
            && ahead < to_target.length()
            && lateral < state.config.obstacle_radius + DODGE_MARGIN
    });
    if blocked {
        // Sidestep on the other axis until the path clears
        if to_target.x.abs() >= to_target.y.abs() {
            direction.z = if direction.z == 0 { 1 } else { direction.z };
            direction.x = 0;
        } else {
            direction.x = if direction.x == 0 { 1 } else { direction.x };
            direction.z = 0;
        }
    }

    direction
}

/// Nearest coin position, if any
pub fn nearest_coin(state: &Session) -> Option<Vec2> {
    let player = state.player.pos;
    state
        .coins
        .iter()
        .map(|c| c.pos)
        .min_by(|a, b| {
            a.distance_squared(player)
                .partial_cmp(&b.distance_squared(player))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
}
