//! Fixed-rate tick scheduling
//!
//! The driver turns wall-clock time into whole simulation ticks. It never
//! schedules itself: the host calls [`Driver::pump`] from whatever frame
//! callback it has, or [`Driver::step`] directly in tests.

use crate::consts::MAX_SUBSTEPS;
use crate::renderer::{Palette, RenderTarget, draw_frame};
use crate::sim::{GameState, TickOutcome, on_jump_requested, should_jump, tick};

/// Elapsed time beyond this is dropped (tab was hidden, debugger paused, ...)
const MAX_FRAME_MS: f64 = 100.0;

/// What a key press does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Jump,
    ToggleIdle,
}

impl KeyAction {
    /// Map a `KeyboardEvent.key` value
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            " " | "ArrowUp" => Some(KeyAction::Jump),
            "i" | "I" => Some(KeyAction::ToggleIdle),
            _ => None,
        }
    }

    /// Whether the browser's default handling must be suppressed (Space and
    /// ArrowUp scroll the page)
    pub fn prevents_default(self) -> bool {
        matches!(self, KeyAction::Jump)
    }
}

/// Totals for one pump
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PumpReport {
    pub ticks: u32,
    pub bounces: u32,
    pub deaths: u32,
}

impl PumpReport {
    fn record(&mut self, outcome: TickOutcome) {
        self.ticks += 1;
        if outcome.bounced {
            self.bounces += 1;
        }
        if outcome.death.is_some() {
            self.deaths += 1;
        }
    }
}

/// Accumulates elapsed time and runs ticks at a fixed interval
#[derive(Debug, Clone)]
pub struct Driver {
    interval_ms: f64,
    accumulator: f64,
    max_substeps: u32,
    /// Let the autopilot press jump
    pub idle_mode: bool,
    pub palette: Palette,
}

impl Driver {
    pub fn new(tick_rate: u32) -> Self {
        Self {
            interval_ms: 1000.0 / tick_rate.max(1) as f64,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
            idle_mode: false,
            palette: Palette::default(),
        }
    }

    /// Driver running at the rate in the game's config
    pub fn for_state(state: &GameState) -> Self {
        Self::new(state.config.tick_rate)
    }

    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Advance one tick without drawing
    pub fn advance(&self, state: &mut GameState) -> TickOutcome {
        if self.idle_mode && should_jump(state) {
            on_jump_requested(state);
        }
        tick(state)
    }

    /// One full tick: advance, then render the result
    pub fn step<T: RenderTarget>(
        &self,
        state: &mut GameState,
        target: &mut T,
    ) -> Result<TickOutcome, T::Error> {
        let outcome = self.advance(state);
        draw_frame(state, target, &self.palette)?;
        Ok(outcome)
    }

    /// Run every tick that `elapsed_ms` of wall time has made due, then draw
    /// the latest state once
    pub fn pump<T: RenderTarget>(
        &mut self,
        state: &mut GameState,
        elapsed_ms: f64,
        target: &mut T,
    ) -> Result<PumpReport, T::Error> {
        self.accumulator += elapsed_ms.clamp(0.0, MAX_FRAME_MS);

        let mut report = PumpReport::default();
        while self.accumulator >= self.interval_ms && report.ticks < self.max_substeps {
            let outcome = self.advance(state);
            report.record(outcome);
            self.accumulator -= self.interval_ms;
        }

        // Couldn't keep up: drop the backlog instead of spiralling
        if report.ticks == self.max_substeps && self.accumulator >= self.interval_ms {
            log::debug!("Dropping {:.1}ms of backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        if report.ticks > 0 {
            draw_frame(state, target, &self.palette)?;
        }
        Ok(report)
    }
}
