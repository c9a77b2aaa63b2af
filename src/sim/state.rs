//! Game state and core simulation types
//!
//! Everything a run needs to continue deterministically lives here, RNG included.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::derive_vertices;
use crate::config::GameConfig;

/// Which wall a spike set protrudes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Side implied by an anchor x (left of the midline is the left wall)
    pub fn from_anchor(anchor_x: f32, canvas_width: f32) -> Self {
        if anchor_x < canvas_width / 2.0 {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Anchor x used when spawning spikes on this wall
    pub fn anchor_x(self, config: &GameConfig) -> f32 {
        match self {
            Side::Left => 0.0,
            Side::Right => config.right_anchor_x(),
        }
    }
}

/// A triangular spike fixed to one wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Spike {
    pub anchor_x: f32,
    /// Top of the spike's vertical span
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Corners, apex in the middle, pointing toward the arena center
    pub vertices: [Vec2; 3],
}

impl Spike {
    pub fn new(anchor_x: f32, y: f32, width: f32, height: f32, canvas_width: f32) -> Self {
        Self {
            anchor_x,
            y,
            width,
            height,
            vertices: derive_vertices(anchor_x, y, width, height, canvas_width),
        }
    }
}

/// The spikes generated for one bounce, all on the same wall
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpikeSet {
    pub side: Side,
    pub spikes: Vec<Spike>,
}

impl SpikeSet {
    pub fn len(&self) -> usize {
        self.spikes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spikes.is_empty()
    }

    /// True if no two spikes share any part of their vertical span
    pub fn is_disjoint(&self) -> bool {
        self.spikes.iter().enumerate().all(|(i, a)| {
            self.spikes[i + 1..]
                .iter()
                .all(|b| a.y + a.height <= b.y || b.y + b.height <= a.y)
        })
    }
}

/// The bouncing ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub jump_force: f32,
    pub gravity: f32,
}

impl Player {
    /// Spawn at the arena center with the configured starting velocity
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: Vec2::new(config.canvas_width / 2.0, config.canvas_height / 2.0),
            vel: Vec2::new(config.start_vel_x, config.start_vel_y),
            radius: config.player_radius,
            jump_force: config.jump_force,
            gravity: config.gravity,
        }
    }

    /// Move by the current velocity, then apply gravity for the next tick
    pub fn integrate(&mut self) {
        self.pos += self.vel;
        self.vel.y += self.gravity;
    }

    /// Replace vertical velocity with an upward impulse
    pub fn jump(&mut self) {
        self.vel.y = -self.jump_force;
    }
}

/// Why a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Touched the top edge
    Ceiling,
    /// Touched the bottom edge
    Floor,
    /// Touched a spike
    Spike,
}

/// What happened during a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// The player hit a side wall and new spikes were generated
    pub bounced: bool,
    /// The run ended and the state was reset
    pub death: Option<DeathCause>,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: GameConfig,
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub player: Player,
    /// Active spikes (None until the first bounce and after every death)
    pub spikes: Option<SpikeSet>,
    /// Bounces survived in the current run
    pub score: u32,
    /// Best score this session (not persisted)
    pub best_score: u32,
    /// Runs ended so far this session
    pub deaths: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game with the given config and seed
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let player = Player::new(&config);
        Self {
            config,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player,
            spikes: None,
            score: 0,
            best_score: 0,
            deaths: 0,
            time_ticks: 0,
        }
    }

    /// Create a game with the reference constants
    pub fn with_seed(seed: u64) -> Self {
        Self::new(GameConfig::default(), seed)
    }

    /// Active spikes as a slice (empty when none are out)
    pub fn active_spikes(&self) -> &[Spike] {
        self.spikes.as_ref().map_or(&[], |set| &set.spikes)
    }

    /// Wall the active spikes belong to
    pub fn spike_side(&self) -> Option<Side> {
        self.spikes.as_ref().map(|set| set.side)
    }

    /// Put the player back in the center and start a fresh run
    pub fn reset(&mut self) {
        self.best_score = self.best_score.max(self.score);
        self.player = Player::new(&self.config);
        self.spikes = None;
        self.score = 0;
    }
}
