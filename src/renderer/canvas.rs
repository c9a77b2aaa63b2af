//! Canvas 2D render target (browser only)

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::{RenderTarget, Rgba};

/// Score font, drawn huge behind the action
const SCORE_FONT: &str = "700 10em Poppins";
/// Score sits slightly below the vertical center
const SCORE_OFFSET_Y: f64 = 20.0;

/// Paints through a `CanvasRenderingContext2d`
pub struct CanvasTarget {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasTarget {
    /// Grab the 2D context of `canvas`
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;
        Ok(Self { canvas, ctx })
    }

    fn width(&self) -> f64 {
        self.canvas.width() as f64
    }

    fn height(&self) -> f64 {
        self.canvas.height() as f64
    }
}

impl RenderTarget for CanvasTarget {
    type Error = JsValue;

    fn clear_screen(&mut self, color: Rgba) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(0.0, 0.0, self.width(), self.height());
        Ok(())
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgba) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.fill_rect(x as f64, y as f64, w as f64, h as f64);
        Ok(())
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx
            .arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
        self.ctx.close_path();
        self.ctx.fill();
        Ok(())
    }

    fn fill_polygon(&mut self, vertices: &[Vec2; 3], color: Rgba) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.begin_path();
        self.ctx.move_to(vertices[0].x as f64, vertices[0].y as f64);
        for v in &vertices[1..] {
            self.ctx.line_to(v.x as f64, v.y as f64);
        }
        self.ctx.close_path();
        self.ctx.fill();
        Ok(())
    }

    fn draw_centered_text(&mut self, text: &str, color: Rgba) -> Result<(), JsValue> {
        self.ctx.set_fill_style_str(&color.to_css());
        self.ctx.set_font(SCORE_FONT);
        self.ctx.set_text_baseline("middle");
        self.ctx.set_text_align("center");
        self.ctx.fill_text(
            text,
            self.width() / 2.0,
            self.height() / 2.0 + SCORE_OFFSET_Y,
        )
    }
}
