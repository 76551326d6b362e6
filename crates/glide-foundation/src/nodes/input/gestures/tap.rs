//! Tap gesture recogniser.

use glide_ui_graphics::Point;

use crate::gesture_constants::DRAG_THRESHOLD;
use crate::nodes::input::types::{PointerEvent, PointerEventKind, PointerId};

/// Reports a tap when a pointer is released close to where it was pressed
/// and no other handler consumed the gesture in between.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TapGesture {
    slop: f32,
    pointer: Option<PointerId>,
    origin: Point,
}

impl TapGesture {
    pub fn new() -> Self {
        Self {
            slop: DRAG_THRESHOLD,
            pointer: None,
            origin: Point::ZERO,
        }
    }

    pub fn reset(&mut self) {
        self.pointer = None;
    }

    /// Returns the release position when the event completes a tap.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<Point> {
        match event.kind {
            PointerEventKind::Down => {
                if self.pointer.is_none() && !event.is_consumed() {
                    self.pointer = Some(event.id);
                    self.origin = event.position;
                }
                None
            }
            PointerEventKind::Move => {
                if self.pointer == Some(event.id) {
                    let delta = event.position - self.origin;
                    let travelled = (delta.x * delta.x + delta.y * delta.y).sqrt();
                    if event.is_consumed() || travelled > self.slop {
                        self.reset();
                    }
                }
                None
            }
            PointerEventKind::Up => {
                if self.pointer != Some(event.id) {
                    return None;
                }
                self.reset();
                (!event.is_consumed()).then_some(event.position)
            }
            PointerEventKind::Cancel => {
                if self.pointer == Some(event.id) {
                    self.reset();
                }
                None
            }
        }
    }
}

impl Default for TapGesture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
        PointerEvent::new(kind, Point::new(x, y))
    }

    #[test]
    fn press_and_release_in_place_is_a_tap() {
        let mut tap = TapGesture::new();
        tap.on_event(&event(PointerEventKind::Down, 40.0, 40.0));
        tap.on_event(&event(PointerEventKind::Move, 43.0, 42.0));
        assert_eq!(
            tap.on_event(&event(PointerEventKind::Up, 43.0, 42.0)),
            Some(Point::new(43.0, 42.0))
        );
    }

    #[test]
    fn travelling_past_slop_cancels_tap() {
        let mut tap = TapGesture::new();
        tap.on_event(&event(PointerEventKind::Down, 40.0, 40.0));
        tap.on_event(&event(PointerEventKind::Move, 40.0, 80.0));
        assert_eq!(tap.on_event(&event(PointerEventKind::Up, 40.0, 40.0)), None);
    }

    #[test]
    fn consumed_move_cancels_tap() {
        let mut tap = TapGesture::new();
        tap.on_event(&event(PointerEventKind::Down, 40.0, 40.0));
        let consumed = event(PointerEventKind::Move, 41.0, 40.0);
        consumed.consume();
        tap.on_event(&consumed);
        assert_eq!(tap.on_event(&event(PointerEventKind::Up, 41.0, 40.0)), None);
    }

    #[test]
    fn cancel_clears_pending_tap() {
        let mut tap = TapGesture::new();
        tap.on_event(&event(PointerEventKind::Down, 10.0, 10.0));
        tap.on_event(&event(PointerEventKind::Cancel, 10.0, 10.0));
        assert_eq!(tap.on_event(&event(PointerEventKind::Up, 10.0, 10.0)), None);
    }
}
