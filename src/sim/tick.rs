//! Per-frame simulation tick and countdown bookkeeping
//!
//! `tick` is a plain update function: whoever owns the session (a render
//! loop, a timer thread, a test) decides when to call it.

use super::collision::overlapping_indices;
use super::placement::place_away_from;
use super::state::{Coin, GameEvent, Session, SessionPhase};
use crate::clamp_to_bounds;

/// Advance the session by `dt` seconds and return the events it produced
///
/// Order within a tick: move and clamp the player, then resolve coins, then
/// obstacles. Collisions are tested against the post-move position.
pub fn tick(state: &mut Session, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    // Frozen once ended
    if state.phase == SessionPhase::Ended {
        return events;
    }

    let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
    state.stats.ticks += 1;
    state.stats.elapsed += dt;

    // Move player (direct velocity, no momentum)
    let velocity = state.player.direction.as_vec2() * state.config.player_speed;
    state.player.pos = clamp_to_bounds(
        state.player.pos + velocity * dt,
        state.config.half_extent,
    );

    let player_pos = state.player.pos;
    let half_extent = state.config.half_extent;
    let exclusion = state.config.exclusion_radius;
    let max_attempts = state.config.max_placement_attempts;

    // Coins: collect and respawn in the same slot
    let coin_hits = overlapping_indices(
        player_pos,
        state.coins.iter().map(|c| &c.pos),
        state.config.coin_radius,
    );
    for i in coin_hits {
        let coin_pos = state.coins[i].pos;
        let old_id = state.coins[i].id;
        state.score = state.score.saturating_add(state.config.coin_points);
        state.stats.coins_collected += 1;

        let placed = place_away_from(&mut state.rng, half_extent, player_pos, exclusion, max_attempts);
        let id = state.next_entity_id();
        state.coins[i] = Coin { id, pos: placed.pos };

        let tip = state.random_tip();
        log::debug!("Coin {} collected, score {}", old_id, state.score);
        events.push(GameEvent::CoinCollected {
            coin_id: old_id,
            pos: coin_pos,
            tip,
        });
    }

    // Obstacles: penalize and relocate in place
    let obstacle_hits = overlapping_indices(
        player_pos,
        state.obstacles.iter().map(|o| &o.pos),
        state.config.obstacle_radius,
    );
    for i in obstacle_hits {
        let obstacle_pos = state.obstacles[i].pos;
        state.score = state.score.saturating_sub(state.config.obstacle_penalty);
        state.stats.obstacles_hit += 1;

        let placed = place_away_from(&mut state.rng, half_extent, player_pos, exclusion, max_attempts);
        let obstacle = &mut state.obstacles[i];
        obstacle.pos = placed.pos;

        log::debug!("Hit obstacle {} ({}), score {}", obstacle.id, obstacle.label, state.score);
        events.push(GameEvent::ObstacleHit {
            obstacle_id: obstacle.id,
            pos: obstacle_pos,
            label: obstacle.label.clone(),
        });
    }

    events
}

/// Count the timer down by whole seconds, ending the session at zero
///
/// Returns `SessionEnded` on the call that reaches zero. No-op once ended.
pub fn decrement_timer(state: &mut Session, seconds: u32) -> Option<GameEvent> {
    if state.phase == SessionPhase::Ended {
        return None;
    }

    state.time_remaining = state.time_remaining.saturating_sub(seconds);
    if state.time_remaining == 0 {
        return end_session(state);
    }
    None
}

/// Stop the session early; score and timer freeze. Idempotent.
pub fn end_session(state: &mut Session) -> Option<GameEvent> {
    if state.phase == SessionPhase::Ended {
        return None;
    }

    state.phase = SessionPhase::Ended;
    log::info!(
        "Session ended: score {}, {} coins, {} obstacles, {}s left",
        state.score,
        state.stats.coins_collected,
        state.stats.obstacles_hit,
        state.time_remaining
    );
    Some(GameEvent::SessionEnded {
        final_score: state.score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimConfig;
    use crate::planar_distance;
    use crate::sim::state::Axis;
    use glam::Vec2;

    /// Default session with every entity parked far from the origin
    fn quiet_session(seed: u64) -> Session {
        let mut state = Session::new(SimConfig::default(), seed).unwrap();
        for coin in &mut state.coins {
            coin.pos = Vec2::new(13.0, 13.0);
        }
        for obstacle in &mut state.obstacles {
            obstacle.pos = Vec2::new(-13.0, -13.0);
        }
        state
    }

    #[test]
    fn test_player_moves_with_direction() {
        let mut state = quiet_session(1);
        state.set_direction(Axis::X, 1);
        state.set_direction(Axis::Z, -1);

        tick(&mut state, 0.5);
        assert!((state.player.pos.x - 2.5).abs() < 1e-5);
        assert!((state.player.pos.y + 2.5).abs() < 1e-5);
    }

    #[test]
    fn test_player_clamped_to_bounds() {
        let mut state = quiet_session(1);
        state.set_direction(Axis::X, -1);

        // 10 seconds at 5 u/s would reach -50
        tick(&mut state, 10.0);
        assert_eq!(state.player.pos.x, -14.0);
        assert_eq!(state.player.pos.y, 0.0);
    }

    #[test]
    fn test_bad_dt_is_ignored() {
        let mut state = quiet_session(1);
        state.set_direction(Axis::X, 1);
        tick(&mut state, -1.0);
        tick(&mut state, f32::NAN);
        assert_eq!(state.player.pos, Vec2::ZERO);
    }

    #[test]
    fn test_collect_coin() {
        let mut state = quiet_session(2);
        let old_id = state.coins[0].id;
        state.coins[0].pos = Vec2::new(0.0, 0.5);

        let events = tick(&mut state, 0.0);
        assert_eq!(state.score, 10);
        assert_eq!(state.coins.len(), 10);
        assert_ne!(state.coins[0].id, old_id);
        assert!(planar_distance(state.coins[0].pos, state.player.pos) >= 5.0);

        assert_eq!(events.len(), 1);
        match &events[0] {
            GameEvent::CoinCollected { coin_id, tip, .. } => {
                assert_eq!(*coin_id, old_id);
                assert!(state.config.tips.contains(tip));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_hit_obstacle() {
        let mut state = quiet_session(3);
        state.score = 20;
        let id = state.obstacles[2].id;
        let label = state.obstacles[2].label.clone();
        state.obstacles[2].pos = Vec2::new(0.0, 1.0);

        let events = tick(&mut state, 0.0);
        assert_eq!(state.score, 15);
        assert_eq!(state.obstacles.len(), 5);
        // Relocated, not replaced
        assert_eq!(state.obstacles[2].id, id);
        assert_eq!(state.obstacles[2].label, label);
        assert!(planar_distance(state.obstacles[2].pos, state.player.pos) >= 5.0);

        assert_eq!(
            events,
            vec![GameEvent::ObstacleHit {
                obstacle_id: id,
                pos: Vec2::new(0.0, 1.0),
                label,
            }]
        );
    }

    #[test]
    fn test_obstacle_score_floor() {
        let mut state = quiet_session(4);
        state.score = 3;
        state.obstacles[0].pos = Vec2::new(0.0, 1.0);

        tick(&mut state, 0.0);
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_multiple_collisions_one_tick() {
        let mut state = quiet_session(5);
        state.coins[1].pos = Vec2::new(0.3, 0.0);
        state.coins[4].pos = Vec2::new(-0.3, 0.0);
        state.obstacles[0].pos = Vec2::new(0.0, 0.2);

        let events = tick(&mut state, 0.0);
        assert_eq!(events.len(), 3);
        assert!(matches!(events[0], GameEvent::CoinCollected { .. }));
        assert!(matches!(events[1], GameEvent::CoinCollected { .. }));
        assert!(matches!(events[2], GameEvent::ObstacleHit { .. }));
        assert_eq!(state.score, 15);
        assert_eq!(state.stats.coins_collected, 2);
        assert_eq!(state.stats.obstacles_hit, 1);
    }

    #[test]
    fn test_collision_uses_post_move_position() {
        let mut state = quiet_session(6);
        // Coin sits ahead of the player; one big step lands on it
        state.coins[0].pos = Vec2::new(5.0, 0.0);
        state.set_direction(Axis::X, 1);

        let events = tick(&mut state, 1.0);
        assert_eq!(state.player.pos.x, 5.0);
        assert_eq!(events.len(), 1);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_timer_expiry_ends_session() {
        let mut state = quiet_session(7);
        assert_eq!(decrement_timer(&mut state, 59), None);
        assert!(state.is_running());

        let event = decrement_timer(&mut state, 1);
        assert_eq!(event, Some(GameEvent::SessionEnded { final_score: 0 }));
        assert!(state.is_ended());
        assert_eq!(state.time_remaining, 0);
    }

    #[test]
    fn test_full_decrement_then_tick_is_frozen() {
        let mut state = quiet_session(8);
        state.score = 30;
        decrement_timer(&mut state, 60);
        assert!(state.is_ended());

        state.coins[0].pos = Vec2::new(0.0, 0.5);
        state.set_direction(Axis::X, 1);
        let events = tick(&mut state, 1.0);
        assert!(events.is_empty());
        assert_eq!(state.score, 30);
        assert_eq!(state.player.pos, Vec2::ZERO);
        assert_eq!(decrement_timer(&mut state, 5), None);
    }

    #[test]
    fn test_decrement_saturates() {
        let mut state = quiet_session(9);
        decrement_timer(&mut state, 500);
        assert_eq!(state.time_remaining, 0);
        assert!(state.is_ended());
    }

    #[test]
    fn test_end_session_idempotent() {
        let mut once = quiet_session(10);
        let mut twice = quiet_session(10);
        once.score = 40;
        twice.score = 40;
        decrement_timer(&mut once, 12);
        decrement_timer(&mut twice, 12);

        assert!(end_session(&mut once).is_some());
        assert!(end_session(&mut twice).is_some());
        assert!(end_session(&mut twice).is_none());

        assert_eq!(once.phase, twice.phase);
        assert_eq!(once.score, twice.score);
        assert_eq!(once.time_remaining, twice.time_remaining);
        assert_eq!(once.time_remaining, 48);
    }

    #[test]
    fn test_determinism() {
        // Two sessions with the same seed and inputs stay identical
        let mut state1 = Session::new(SimConfig::default(), 99999).unwrap();
        let mut state2 = Session::new(SimConfig::default(), 99999).unwrap();

        let inputs = [(1, 0), (1, 1), (0, -1), (-1, -1), (0, 0)];
        for (x, z) in inputs {
            for state in [&mut state1, &mut state2] {
                state.set_direction(Axis::X, x);
                state.set_direction(Axis::Z, z);
            }
            for _ in 0..120 {
                let e1 = tick(&mut state1, 1.0 / 60.0);
                let e2 = tick(&mut state2, 1.0 / 60.0);
                assert_eq!(e1, e2);
            }
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.coins, state2.coins);
        assert_eq!(state1.obstacles, state2.obstacles);
    }

    #[test]
    fn test_custom_config_counts() {
        let config = SimConfig::with_arena(6.0, 3, 2, vec!["Overspending".into()]);
        let mut state = Session::new(config, 11).unwrap();
        state.set_direction(Axis::X, 1);
        state.set_direction(Axis::Z, 1);
        for _ in 0..600 {
            tick(&mut state, 1.0 / 30.0);
            assert_eq!(state.coins.len(), 3);
            assert_eq!(state.obstacles.len(), 2);
            assert!(state.player.pos.x.abs() <= 6.0 && state.player.pos.y.abs() <= 6.0);
        }
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        fn step() -> impl Strategy<Value = (i32, i32, f32)> {
            (-3i32..=3, -3i32..=3, 0.0f32..0.5)
        }

        proptest! {
            #[test]
            fn invariants_hold(seed in any::<u64>(), steps in prop::collection::vec(step(), 1..200)) {
                let mut state = Session::new(SimConfig::default(), seed).unwrap();
                for (x, z, dt) in steps {
                    state.set_direction(Axis::X, x);
                    state.set_direction(Axis::Z, z);
                    let newest_before = state
                        .coins
                        .iter()
                        .map(|c| c.id)
                        .chain(state.obstacles.iter().map(|o| o.id))
                        .max()
                        .unwrap_or(0);
                    let events = tick(&mut state, dt);

                    let h = state.config.half_extent;
                    let player = state.player.pos;
                    let exclusion = state.config.exclusion_radius;
                    prop_assert!(player.x.abs() <= h);
                    prop_assert!(player.y.abs() <= h);
                    prop_assert_eq!(state.coins.len(), state.config.coin_count);
                    prop_assert_eq!(state.obstacles.len(), state.config.obstacle_count);

                    // Respawned coins carry fresh ids and sit outside the exclusion radius
                    for coin in state.coins.iter().filter(|c| c.id > newest_before) {
                        prop_assert!(planar_distance(coin.pos, player) >= exclusion);
                    }

                    for event in &events {
                        match event {
                            GameEvent::CoinCollected { coin_id, .. } => {
                                prop_assert!(state.coins.iter().all(|c| c.id != *coin_id));
                            }
                            GameEvent::ObstacleHit { obstacle_id, .. } => {
                                let o = state.obstacles.iter().find(|o| o.id == *obstacle_id);
                                prop_assert!(o.is_some());
                                if let Some(o) = o {
                                    prop_assert!(planar_distance(o.pos, player) >= exclusion);
                                }
                            }
                            GameEvent::SessionEnded { .. } => {
                                prop_assert!(false, "tick never ends a session");
                            }
                        }
                    }
                }
            }

            #[test]
            fn score_tracks_events(seed in any::<u64>(), start in 0u32..40) {
                let mut state = Session::new(SimConfig::default(), seed).unwrap();
                state.score = start;
                state.set_direction(Axis::X, 1);
                state.set_direction(Axis::Z, 1);
                let mut expected = start;
                for _ in 0..300 {
                    for event in tick(&mut state, 1.0 / 30.0) {
                        match event {
                            GameEvent::CoinCollected { .. } => expected += 10,
                            GameEvent::ObstacleHit { .. } => expected = expected.saturating_sub(5),
                            GameEvent::SessionEnded { .. } => {}
                        }
                    }
                    prop_assert_eq!(state.score, expected);
                }
            }
        }
    }
}
