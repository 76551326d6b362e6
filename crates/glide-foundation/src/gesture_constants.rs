//! Shared gesture constants for consistent pointer handling.
//!
//! These values are in logical pixels and are shared by the drag and tap
//! recognisers so that the two never disagree about whether a gesture moved.

/// Drag threshold in logical pixels.
///
/// Once the pointer has travelled further than this from the press position:
/// - the carousel drag begins (the strip starts following the pointer)
/// - the tap is cancelled (no item is selected on release)
///
/// The drag recogniser measures horizontal travel only, so vertical page
/// scrolling over the strip never turns into a carousel drag.
pub const DRAG_THRESHOLD: f32 = 8.0;
