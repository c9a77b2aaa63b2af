//! Game configuration
//!
//! Every constant the simulation reads lives here. Defaults match the reference
//! arena; overrides come from JSON (LocalStorage on web, a file on native).

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a configuration is rejected
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite (got {value})")]
    NotFinite { field: &'static str, value: f32 },

    #[error("Spike width {width} reaches past the midline of a {canvas_width} wide arena")]
    SpikeTooWide { width: f32, canvas_width: f32 },

    #[error("Spike count range {min}..={max} is empty or starts at zero")]
    BadSpikeRange { min: u32, max: u32 },

    #[error("{max} spikes cannot fit in {slots} slots")]
    TooManySpikes { max: u32, slots: u32 },

    #[error("{slots} slots of height {spike_height} overflow canvas height {canvas_height}")]
    SlotsOverflow {
        slots: u32,
        spike_height: f32,
        canvas_height: f32,
    },

    #[error("Player radius {radius} does not fit the arena")]
    PlayerTooLarge { radius: f32 },

    #[error("Tick rate must be at least 1")]
    ZeroTickRate,

    #[error("Spawn attempts must be at least 1")]
    ZeroSpawnAttempts,
}

/// Tunable game constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Arena ===
    pub canvas_width: f32,
    pub canvas_height: f32,

    // === Spikes ===
    pub spike_width: f32,
    pub spike_height: f32,
    /// Fewest spikes generated per bounce
    pub min_spikes: u32,
    /// Most spikes generated per bounce
    pub max_spikes: u32,
    /// Number of vertical slots a spike can occupy
    pub spawn_slots: u32,
    /// Resamples per spike before the generator gives up
    pub max_spawn_attempts: u32,

    // === Player ===
    pub player_radius: f32,
    pub start_vel_x: f32,
    pub start_vel_y: f32,
    pub jump_force: f32,
    pub gravity: f32,

    // === Timing ===
    pub tick_rate: u32,

    /// Fixed RNG seed (None = seed from the clock)
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,

            spike_width: SPIKE_WIDTH,
            spike_height: SPIKE_HEIGHT,
            min_spikes: MIN_SPIKES,
            max_spikes: MAX_SPIKES,
            spawn_slots: SPAWN_SLOTS,
            max_spawn_attempts: MAX_SPAWN_ATTEMPTS,

            player_radius: PLAYER_RADIUS,
            start_vel_x: PLAYER_START_VEL_X,
            start_vel_y: PLAYER_START_VEL_Y,
            jump_force: JUMP_FORCE,
            gravity: GRAVITY,

            tick_rate: TICK_RATE,

            seed: None,
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON override. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Horizontal midline of the arena
    #[inline]
    pub fn mid_x(&self) -> f32 {
        self.canvas_width / 2.0
    }

    /// Anchor x for spikes on the right wall (inset by two spike widths)
    #[inline]
    pub fn right_anchor_x(&self) -> f32 {
        self.canvas_width - self.spike_width * 2.0
    }

    /// Milliseconds between ticks
    #[inline]
    pub fn tick_interval_ms(&self) -> f64 {
        1000.0 / self.tick_rate as f64
    }

    /// Check the invariants the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("canvas_width", self.canvas_width),
            ("canvas_height", self.canvas_height),
            ("spike_width", self.spike_width),
            ("spike_height", self.spike_height),
            ("player_radius", self.player_radius),
        ] {
            // Written as !(v > 0) so NaN is rejected too
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
        }
        for (field, value) in [
            ("start_vel_x", self.start_vel_x),
            ("start_vel_y", self.start_vel_y),
            ("jump_force", self.jump_force),
            ("gravity", self.gravity),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }

        // Right-wall anchor must stay on the right half or its spikes read as left
        if self.right_anchor_x() < self.mid_x() {
            return Err(ConfigError::SpikeTooWide {
                width: self.spike_width,
                canvas_width: self.canvas_width,
            });
        }

        if self.min_spikes == 0 || self.min_spikes > self.max_spikes {
            return Err(ConfigError::BadSpikeRange {
                min: self.min_spikes,
                max: self.max_spikes,
            });
        }
        if self.max_spikes > self.spawn_slots {
            return Err(ConfigError::TooManySpikes {
                max: self.max_spikes,
                slots: self.spawn_slots,
            });
        }
        // Slot 0 is a margin, so the lowest spike ends at (slots + 1) * height
        if (self.spawn_slots + 1) as f32 * self.spike_height > self.canvas_height {
            return Err(ConfigError::SlotsOverflow {
                slots: self.spawn_slots,
                spike_height: self.spike_height,
                canvas_height: self.canvas_height,
            });
        }
        if self.player_radius * 2.0 >= self.canvas_width.min(self.canvas_height) {
            return Err(ConfigError::PlayerTooLarge {
                radius: self.player_radius,
            });
        }
        if self.tick_rate == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        if self.max_spawn_attempts == 0 {
            return Err(ConfigError::ZeroSpawnAttempts);
        }
        Ok(())
    }

    /// LocalStorage key
    #[cfg(target_arch = "wasm32")]
    const STORAGE_KEY: &'static str = "spike_bounce_config";

    /// Load overrides from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring stored config: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Env var naming a JSON config file (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub const CONFIG_ENV: &'static str = "SPIKE_BOUNCE_CONFIG";

    /// Read and validate a JSON config file
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Load overrides from the file named by `SPIKE_BOUNCE_CONFIG` (native only)
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::CONFIG_ENV) else {
            log::info!("Using default config");
            return Self::default();
        };

        match Self::from_file(&path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path);
                config
            }
            Err(e) => {
                log::warn!("Ignoring config {}: {}", path, e);
                Self::default()
            }
        }
    }
}
