//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use autopilot::{safe_lane_center, should_jump};
pub use collision::{
    circle_intersects_triangle, derive_vertices, hits_any_spike, intervals_overlap,
    point_in_triangle,
};
pub use spawn::{GenerateError, fallback_layout, generate_spikes, roll_spike_count, spawn_spike_set};
pub use state::{DeathCause, GameState, Player, Side, Spike, SpikeSet, TickOutcome};
pub use tick::{on_jump_requested, tick};
