//! Fixed timestep simulation tick
//!
//! One call advances the game by exactly one step. Bounce is checked before
//! death, and both can fire in the same tick.

use super::collision::hits_any_spike;
use super::spawn::spawn_spike_set;
use super::state::{DeathCause, GameState, Side, TickOutcome};

/// Advance the game state by one tick
pub fn tick(state: &mut GameState) -> TickOutcome {
    let mut outcome = TickOutcome::default();
    state.time_ticks += 1;

    state.player.integrate();

    let width = state.config.canvas_width;
    let height = state.config.canvas_height;
    let pos = state.player.pos;
    let radius = state.player.radius;

    // Side walls: bounce, score, and spawn spikes on the wall we're heading to
    if pos.x + radius > width || pos.x - radius < 0.0 {
        state.player.vel.x = -state.player.vel.x;
        state.score += 1;

        let side = if pos.x > state.config.mid_x() {
            Side::Left
        } else {
            Side::Right
        };
        let anchor_x = side.anchor_x(&state.config);
        state.spikes = Some(spawn_spike_set(&mut state.rng, anchor_x, &state.config));
        outcome.bounced = true;

        log::debug!(
            "Bounce at x={:.1}, score {}, {} spikes on {:?}",
            pos.x,
            state.score,
            state.active_spikes().len(),
            side
        );
    }

    // Top/bottom edges and spikes end the run
    let death = if pos.y - radius < 0.0 {
        Some(DeathCause::Ceiling)
    } else if pos.y + radius > height {
        Some(DeathCause::Floor)
    } else if hits_any_spike(pos, radius, state.active_spikes()) {
        Some(DeathCause::Spike)
    } else {
        None
    };

    if let Some(cause) = death {
        log::debug!(
            "Died ({:?}) with score {} after {} ticks",
            cause,
            state.score,
            state.time_ticks
        );
        state.deaths += 1;
        state.reset();
        outcome.death = Some(cause);
    }

    outcome
}

/// Apply a jump immediately (not deferred to the next tick)
pub fn on_jump_requested(state: &mut GameState) {
    state.player.jump();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Player, Spike, SpikeSet};
    use glam::Vec2;

    fn left_spikes(ys: &[f32]) -> SpikeSet {
        SpikeSet {
            side: Side::Left,
            spikes: ys
                .iter()
                .map(|&y| Spike::new(0.0, y, 20.0, 30.0, 500.0))
                .collect(),
        }
    }

    #[test]
    fn test_quiet_tick_only_moves_player() {
        let mut state = GameState::with_seed(1);
        state.score = 3;
        state.spikes = Some(left_spikes(&[30.0, 300.0]));
        let before = state.spikes.clone();

        let outcome = tick(&mut state);

        assert_eq!(outcome, TickOutcome::default());
        assert_eq!(state.score, 3);
        assert_eq!(state.spikes, before);
        assert_eq!(state.player.pos, Vec2::new(255.0, 252.0));
        assert_eq!(state.player.vel, Vec2::new(5.0, 2.5));
    }

    #[test]
    fn test_right_wall_bounce_spawns_left_spikes() {
        let mut state = GameState::with_seed(2);
        state.score = 7;
        state.player.pos = Vec2::new(476.0, 250.0);

        let outcome = tick(&mut state);

        assert!(outcome.bounced);
        assert_eq!(outcome.death, None);
        assert_eq!(state.score, 8);
        assert_eq!(state.player.vel.x, -5.0);
        assert_eq!(state.spike_side(), Some(Side::Left));
        let set = state.spikes.as_ref().unwrap();
        assert!((1..=5).contains(&set.len()));
        assert!(set.spikes.iter().all(|s| s.anchor_x == 0.0));
    }

    #[test]
    fn test_left_wall_bounce_spawns_right_spikes() {
        let mut state = GameState::with_seed(3);
        state.player.pos = Vec2::new(24.0, 250.0);
        state.player.vel.x = -5.0;

        let outcome = tick(&mut state);

        assert!(outcome.bounced);
        assert_eq!(state.score, 1);
        assert_eq!(state.player.vel.x, 5.0);
        assert_eq!(state.spike_side(), Some(Side::Right));
        assert!(state.active_spikes().iter().all(|s| s.anchor_x == 460.0));
    }

    #[test]
    fn test_floor_death_restores_defaults() {
        let mut state = GameState::with_seed(4);
        state.score = 7;
        state.player.pos = Vec2::new(250.0, 490.0);
        state.spikes = Some(left_spikes(&[30.0, 90.0, 150.0]));

        let outcome = tick(&mut state);

        assert_eq!(outcome.death, Some(DeathCause::Floor));
        assert_eq!(state.score, 0);
        assert_eq!(state.best_score, 7);
        assert_eq!(state.deaths, 1);
        assert_eq!(state.player.pos, Vec2::new(250.0, 250.0));
        assert_eq!(state.player.vel, Vec2::new(5.0, 2.0));
        assert!(state.spikes.is_none());
    }

    #[test]
    fn test_ceiling_death() {
        let mut state = GameState::with_seed(5);
        state.player.pos = Vec2::new(250.0, 25.0);
        state.player.vel.y = -10.0;

        let outcome = tick(&mut state);
        assert_eq!(outcome.death, Some(DeathCause::Ceiling));
        assert_eq!(state.player, Player::new(&state.config));
    }

    #[test]
    fn test_spike_death() {
        let mut state = GameState::with_seed(6);
        state.player.pos = Vec2::new(35.0, 113.0);
        state.player.vel = Vec2::new(-5.0, 2.0);
        state.spikes = Some(left_spikes(&[100.0]));

        // Moves to (30, 115): apex at (20, 115) is within radius
        let outcome = tick(&mut state);
        assert!(!outcome.bounced);
        assert_eq!(outcome.death, Some(DeathCause::Spike));
        assert!(state.spikes.is_none());
    }

    #[test]
    fn test_bounce_and_death_same_tick() {
        let mut state = GameState::with_seed(7);
        state.score = 2;
        state.player.pos = Vec2::new(478.0, 479.0);

        let outcome = tick(&mut state);

        assert!(outcome.bounced);
        assert_eq!(outcome.death, Some(DeathCause::Floor));
        // Bounce scored first, then the reset wiped it
        assert_eq!(state.best_score, 3);
        assert_eq!(state.score, 0);
        assert!(state.spikes.is_none());
    }

    #[test]
    fn test_jump_is_immediate() {
        let mut state = GameState::with_seed(8);
        state.player.vel.y = 3.0;

        on_jump_requested(&mut state);
        assert_eq!(state.player.vel.y, -10.0);

        // Next tick moves with the jump velocity, then gravity kicks in
        tick(&mut state);
        assert_eq!(state.player.pos.y, 240.0);
        assert_eq!(state.player.vel.y, -9.5);
    }

    #[test]
    fn test_repeated_jumps_do_not_stack() {
        let mut state = GameState::with_seed(9);
        on_jump_requested(&mut state);
        on_jump_requested(&mut state);
        assert_eq!(state.player.vel.y, -10.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::with_seed(99999);
        let mut state2 = GameState::with_seed(99999);

        for i in 0..600 {
            if i % 25 == 0 {
                on_jump_requested(&mut state1);
                on_jump_requested(&mut state2);
            }
            assert_eq!(tick(&mut state1), tick(&mut state2));
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.spikes, state2.spikes);
    }
}
