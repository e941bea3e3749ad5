//! Planar collision checks between the player and round entities
//!
//! Everything is a circle on the horizontal plane. Height is ignored, so two
//! entities overlap purely by their (x, z) projection.

use glam::Vec2;

use crate::planar_distance;

/// Result of a proximity check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionResult {
    /// Whether the entity is inside the collision radius
    pub hit: bool,
    /// Planar distance between the two centers
    pub distance: f32,
}

/// Check whether an entity at `entity_pos` touches the player
///
/// Uses strict less-than: an entity exactly `radius` away is a miss.
#[inline]
pub fn player_entity_collision(player_pos: Vec2, entity_pos: Vec2, radius: f32) -> CollisionResult {
    let distance = planar_distance(player_pos, entity_pos);
    CollisionResult {
        hit: distance < radius,
        distance,
    }
}

/// Indices of every position within `radius` of the player, in container order
pub fn overlapping_indices<'a>(
    player_pos: Vec2,
    positions: impl IntoIterator<Item = &'a Vec2>,
    radius: f32,
) -> Vec<usize> {
    positions
        .into_iter()
        .enumerate()
        .filter(|(_, pos)| player_entity_collision(player_pos, **pos, radius).hit)
        .map(|(i, _)| i)
        .collect()
}
