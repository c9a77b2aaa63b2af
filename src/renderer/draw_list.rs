//! Recorded draw calls
//!
//! A [`RenderTarget`] that stores what it was asked to draw. Used headless and
//! in tests to check frame contents without a canvas.

use std::convert::Infallible;

use glam::Vec2;

use super::{RenderTarget, Rgba};

/// One primitive, as issued by the renderer
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear(Rgba),
    Rect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        color: Rgba,
    },
    Circle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    Polygon {
        vertices: [Vec2; 3],
        color: Rgba,
    },
    Text {
        text: String,
        color: Rgba,
    },
}

/// Draw calls for the current frame (cleared on every `clear_screen`)
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub calls: Vec<DrawCall>,
    /// Frames started since creation
    pub frames: u64,
}

impl RenderTarget for DrawList {
    type Error = Infallible;

    fn clear_screen(&mut self, color: Rgba) -> Result<(), Infallible> {
        self.calls.clear();
        self.frames += 1;
        self.calls.push(DrawCall::Clear(color));
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Rect { x, y, w, h, color });
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn fill_polygon(&mut self, vertices: &[Vec2; 3], color: Rgba) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Polygon {
            vertices: *vertices,
            color,
        });
        Ok(())
    }

    fn draw_centered_text(&mut self, text: &str, color: Rgba) -> Result<(), Infallible> {
        self.calls.push(DrawCall::Text {
            text: text.to_string(),
            color,
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_starts_new_frame() {
        let mut list = DrawList::default();
        let white = Rgba::from_hex(0xFFFFFFFF);

        list.clear_screen(white).unwrap();
        list.fill_rect(0.0, 0.0, 10.0, 10.0, white).unwrap();
        assert_eq!(list.calls.len(), 2);

        list.clear_screen(white).unwrap();
        assert_eq!(list.calls, vec![DrawCall::Clear(white)]);
        assert_eq!(list.frames, 2);
    }
}
