//! Idle/demo mode - a simple AI that taps jump
//!
//! It picks the widest vertical gap on the wall the ball is heading for and
//! jumps whenever the ball falls below that lane.

use super::state::GameState;

/// How far below the lane center the ball may sink before jumping
const JUMP_MARGIN: f32 = 30.0;

/// Center of the widest spike-free vertical span, or the arena middle when
/// there are no spikes
pub fn safe_lane_center(state: &GameState) -> f32 {
    let height = state.config.canvas_height;
    let mut spans: Vec<(f32, f32)> = state
        .active_spikes()
        .iter()
        .map(|s| (s.y, s.y + s.height))
        .collect();
    if spans.is_empty() {
        return height / 2.0;
    }
    spans.sort_by(|a, b| a.0.total_cmp(&b.0));

    let mut best = (0.0_f32, 0.0_f32);
    let mut cursor = 0.0_f32;
    for &(top, bottom) in spans.iter().chain(std::iter::once(&(height, height))) {
        if top - cursor > best.1 - best.0 {
            best = (cursor, top);
        }
        cursor = cursor.max(bottom);
    }
    (best.0 + best.1) / 2.0
}

/// Decide whether to request a jump this tick
pub fn should_jump(state: &GameState) -> bool {
    let player = &state.player;
    if player.vel.y <= 0.0 {
        return false;
    }

    // Peak rise of a jump: v² / 2g
    let rise = if player.gravity > 0.0 {
        player.jump_force * player.jump_force / (2.0 * player.gravity)
    } else {
        player.jump_force
    };
    if player.pos.y - rise - player.radius < 0.0 {
        return false;
    }

    player.pos.y > safe_lane_center(state) + JUMP_MARGIN
}
