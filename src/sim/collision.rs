//! Collision detection for the ball and wall spikes
//!
//! Spikes are triangles, the player is a circle. The test here is coarse:
//! a hit is either a spike vertex inside the circle or the circle center
//! inside the spike. An edge that grazes the circle without either of those is
//! not reported.

use glam::Vec2;

use super::state::Spike;

/// Build the three corners of a spike anchored at `anchor_x`.
///
/// Left-wall spikes (anchor left of the midline) have their base on the anchor
/// and apex `width` to the right. Right-wall spikes are mirrored against the
/// canvas right edge, regardless of where the anchor sits.
pub fn derive_vertices(
    anchor_x: f32,
    y: f32,
    width: f32,
    height: f32,
    canvas_width: f32,
) -> [Vec2; 3] {
    let mid_y = y + height / 2.0;
    let vertices = if anchor_x < canvas_width / 2.0 {
        [
            Vec2::new(anchor_x, y),
            Vec2::new(anchor_x + width, mid_y),
            Vec2::new(anchor_x, y + height),
        ]
    } else {
        [
            Vec2::new(canvas_width, y),
            Vec2::new(canvas_width - width, mid_y),
            Vec2::new(canvas_width, y + height),
        ]
    };
    debug_assert!(
        triangle_area2(&vertices).abs() > f32::EPSILON,
        "degenerate spike at y={y}"
    );
    vertices
}

/// Twice the signed area of a triangle (sign gives the winding)
#[inline]
fn triangle_area2(v: &[Vec2; 3]) -> f32 {
    (v[1] - v[0]).perp_dot(v[2] - v[0])
}

/// Check whether `[candidate_y, candidate_y + height)` intersects any existing
/// spike's vertical span.
pub fn intervals_overlap(existing: &[Spike], candidate_y: f32, height: f32) -> bool {
    let candidate_end = candidate_y + height;
    existing
        .iter()
        .any(|s| s.y < candidate_end && candidate_y < s.y + s.height)
}

/// Check whether a circle touches a triangle.
///
/// The inside test accepts either winding, so left- and right-wall spikes
/// behave the same even though their vertex orders are mirrored.
pub fn circle_intersects_triangle(center: Vec2, radius: f32, vertices: &[Vec2; 3]) -> bool {
    let radius_sq = radius * radius;
    if vertices
        .iter()
        .any(|&v| center.distance_squared(v) <= radius_sq)
    {
        return true;
    }

    point_in_triangle(center, vertices)
}

/// Same-sign edge test, inclusive of the edges
pub fn point_in_triangle(p: Vec2, v: &[Vec2; 3]) -> bool {
    let d0 = (v[1] - v[0]).perp_dot(p - v[0]);
    let d1 = (v[2] - v[1]).perp_dot(p - v[1]);
    let d2 = (v[0] - v[2]).perp_dot(p - v[2]);

    let has_neg = d0 < 0.0 || d1 < 0.0 || d2 < 0.0;
    let has_pos = d0 > 0.0 || d1 > 0.0 || d2 > 0.0;
    !(has_neg && has_pos)
}

/// Check the player against every spike in a set
pub fn hits_any_spike(center: Vec2, radius: f32, spikes: &[Spike]) -> bool {
    spikes
        .iter()
        .any(|s| circle_intersects_triangle(center, radius, &s.vertices))
}
