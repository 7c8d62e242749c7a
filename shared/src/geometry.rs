//! Angle math between prize indices and wheel orientation.
//!
//! All angles are degrees, measured clockwise from the pointer at the top.
//! Segment `i` of `n` covers `[i * 360/n, (i + 1) * 360/n)` in wheel space.

use rand::Rng;

pub const FULL_TURN: f64 = 360.0;

/// Full turns added to every spin on top of the landing delta.
pub const EXTRA_SPINS: u32 = 8;

/// Jitter is `(u - 0.5) * JITTER_SPREAD * segment`, so at most 0.4 of a
/// segment either side of its center.
pub const JITTER_SPREAD: f64 = 0.8;

pub fn segment_angle(count: usize) -> f64 {
    FULL_TURN / count as f64
}

pub fn segment_span(index: usize, count: usize) -> (f64, f64) {
    let segment = segment_angle(count);
    (segment * index as f64, segment * (index + 1) as f64)
}

pub fn segment_center(index: usize, count: usize) -> f64 {
    let segment = segment_angle(count);
    segment * index as f64 + segment / 2.0
}

pub fn random_jitter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> f64 {
    (rng.gen::<f64>() - 0.5) * JITTER_SPREAD * segment_angle(count)
}

/// Where the landing point sits on the wheel itself.
pub fn target_angle_in_wheel_space(winner: usize, count: usize, jitter: f64) -> f64 {
    segment_center(winner, count) + jitter
}

/// Orientation the wheel needs so that `wheel_angle` sits under the pointer.
pub fn pointer_angle(wheel_angle: f64) -> f64 {
    (FULL_TURN - wheel_angle + FULL_TURN) % FULL_TURN
}

/// Forward-only distance from the current orientation to `target_visual`,
/// in `[0, 360)`.
pub fn forward_delta(current_rotation: f64, target_visual: f64) -> f64 {
    let current_visual = current_rotation.rem_euclid(FULL_TURN);
    let mut delta = target_visual - current_visual;
    if delta < 0.0 {
        delta += FULL_TURN;
    }
    delta
}

/// Absolute rotation that lands `winner` under the pointer after
/// `EXTRA_SPINS` full turns. Always strictly greater than `current_rotation`.
pub fn final_rotation(current_rotation: f64, winner: usize, count: usize, jitter: f64) -> f64 {
    let wheel_angle = target_angle_in_wheel_space(winner, count, jitter);
    let delta = forward_delta(current_rotation, pointer_angle(wheel_angle));
    current_rotation + delta + FULL_TURN * EXTRA_SPINS as f64
}

/// Index of the segment under the pointer for an accumulated rotation.
pub fn winner_at_rotation(rotation: f64, count: usize) -> usize {
    let under_pointer = (FULL_TURN - rotation.rem_euclid(FULL_TURN)).rem_euclid(FULL_TURN);
    let index = (under_pointer / segment_angle(count)).floor() as usize;
    index.min(count.saturating_sub(1))
}

pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Screen position for a polar coordinate with 0 degrees at the top.
pub fn polar_to_cartesian(center_x: f64, center_y: f64, radius: f64, angle_deg: f64) -> Point {
    let radians = (angle_deg - 90.0).to_radians();
    Point {
        x: center_x + radius * radians.cos(),
        y: center_y + radius * radians.sin(),
    }
}

pub fn label_font_size(count: usize) -> f64 {
    (120.0 / count as f64 + 10.0).min(18.0)
}
