//! Rendering module
//!
//! The simulation never touches a graphics API directly. Each frame is painted
//! through [`RenderTarget`], in a fixed order: clear, spikes, player, score.

pub mod draw_list;
#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use draw_list::{DrawCall, DrawList};
#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasTarget;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    /// From `0xRRGGBBAA`
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: (hex >> 24) as u8,
            g: (hex >> 16) as u8,
            b: (hex >> 8) as u8,
            a: hex as u8,
        }
    }

    /// CSS color string for canvas fill styles
    pub fn to_css(self) -> String {
        if self.a == 0xFF {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Colors for game elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    pub background: Rgba,
    pub spike: Rgba,
    pub player: Rgba,
    /// Translucent so the ball stays visible behind the score
    pub score: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgba::from_hex(0xEA3546FF),
            spike: Rgba::from_hex(0x23F0C7FF),
            player: Rgba::from_hex(0xF7E733FF),
            score: Rgba::from_hex(0x00000050),
        }
    }
}

/// A 2D surface the game can be painted on
pub trait RenderTarget {
    type Error;

    /// Fill the whole surface
    fn clear_screen(&mut self, color: Rgba) -> Result<(), Self::Error>;

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba)
    -> Result<(), Self::Error>;

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), Self::Error>;

    fn fill_polygon(&mut self, vertices: &[Vec2; 3], color: Rgba) -> Result<(), Self::Error>;

    /// Large text centered on the surface
    fn draw_centered_text(&mut self, text: &str, color: Rgba) -> Result<(), Self::Error>;
}

/// Paint the post-tick state. Reads only; never mutates the game.
pub fn draw_frame<T: RenderTarget>(
    state: &GameState,
    target: &mut T,
    palette: &Palette,
) -> Result<(), T::Error> {
    target.clear_screen(palette.background)?;

    for spike in state.active_spikes() {
        target.fill_polygon(&spike.vertices, palette.spike)?;
    }

    target.fill_circle(state.player.pos, state.player.radius, palette.player)?;

    target.draw_centered_text(&state.score.to_string(), palette.score)
}
