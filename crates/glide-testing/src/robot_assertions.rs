//! Assertion utilities for robot testing

use glide_foundation::CarouselPhase;

/// Assert that a value is within an expected range.
///
/// Settling positions are compared with a tolerance; resting positions can
/// use 0.0.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{}: expected {} (±{}), got {} (diff: {})",
        msg,
        expected,
        tolerance,
        actual,
        diff
    );
}

/// Assert that the position lies within `[-bound, 0]`.
pub fn assert_within_bounds(position: f32, bound: f32, msg: &str) {
    assert!(
        position <= 0.0 && position >= -bound,
        "{}: position {} outside [-{}, 0]",
        msg,
        position,
        bound
    );
}

pub fn assert_idle(phase: CarouselPhase, msg: &str) {
    assert_eq!(phase, CarouselPhase::Idle, "{}: carousel not idle", msg);
}
