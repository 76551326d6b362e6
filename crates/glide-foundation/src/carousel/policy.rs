//! Where the strip may be while dragging, and where it rests afterwards.
//!
//! Positions are horizontal offsets of the strip: 0 means the first item is
//! flush left, `-bound` means the last item is flush right.

/// Resolve the resting position for a released drag.
///
/// 1. Past the start (`current_position > 0`): back to 0.
/// 2. Past the end (`|current_position| > bound`, `bound > 0`): back to `-bound`.
/// 3. Otherwise the position is kept as is.
///
/// With `bound == 0` there is nothing to scroll and rule 2 never fires.
pub fn resolve_drag_end(current_position: f32, bound: f32) -> f32 {
    if !current_position.is_finite() {
        return 0.0;
    }
    if current_position > 0.0 {
        0.0
    } else if bound > 0.0 && current_position.abs() > bound {
        -bound
    } else {
        current_position
    }
}

/// Constrain a raw drag position to `[-bound, 0]`, letting `elasticity` of
/// any overflow through.
pub fn apply_elasticity(raw_position: f32, bound: f32, elasticity: f32) -> f32 {
    let (min, max) = limits(bound);
    if raw_position > max {
        max + (raw_position - max) * elasticity
    } else if raw_position < min {
        min + (raw_position - min) * elasticity
    } else {
        raw_position
    }
}

/// Inverse of [`apply_elasticity`]: the raw position that would display as
/// `position`. Used to pick up a drag from wherever a settle was interrupted
/// without the strip jumping.
pub fn remove_elasticity(position: f32, bound: f32, elasticity: f32) -> f32 {
    if elasticity <= 0.0 {
        return position;
    }
    let (min, max) = limits(bound);
    if position > max {
        max + (position - max) / elasticity
    } else if position < min {
        min + (position - min) / elasticity
    } else {
        position
    }
}

fn limits(bound: f32) -> (f32, f32) {
    let bound = if bound.is_finite() { bound.max(0.0) } else { 0.0 };
    (-bound, 0.0)
}
