//! Spike Bounce - a single-screen bouncing ball arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spike generation, collisions)
//! - `renderer`: Draw-call adapter the simulation is painted through
//! - `driver`: Fixed-rate tick scheduling
//! - `config`: Tunable constants with validation

pub mod config;
pub mod driver;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};
pub use driver::Driver;
pub use renderer::{Rgba, RenderTarget, draw_frame};
pub use sim::{GameState, TickOutcome, on_jump_requested, tick};

/// Reference game constants (defaults for [`GameConfig`])
pub mod consts {
    /// Target simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Maximum ticks per driver pump to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Canvas dimensions
    pub const CANVAS_WIDTH: f32 = 500.0;
    pub const CANVAS_HEIGHT: f32 = 500.0;

    /// Spike triangle size (width is the horizontal reach of the apex)
    pub const SPIKE_WIDTH: f32 = 20.0;
    pub const SPIKE_HEIGHT: f32 = 30.0;

    /// Spikes per bounce, inclusive range
    pub const MIN_SPIKES: u32 = 1;
    pub const MAX_SPIKES: u32 = 5;
    /// Vertical slots spikes snap to (slot 0 is the top margin)
    pub const SPAWN_SLOTS: u32 = 14;
    /// Resamples allowed per spike before falling back to a fixed layout
    pub const MAX_SPAWN_ATTEMPTS: u32 = 64;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_START_VEL_X: f32 = 5.0;
    pub const PLAYER_START_VEL_Y: f32 = 2.0;
    pub const JUMP_FORCE: f32 = 10.0;
    /// Added to vertical velocity every tick (pixels/tick²)
    pub const GRAVITY: f32 = 0.5;
}
