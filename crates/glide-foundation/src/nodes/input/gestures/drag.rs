//! Horizontal drag gesture recogniser.

use glide_ui_graphics::Point;

use crate::gesture_constants::DRAG_THRESHOLD;
use crate::nodes::input::types::{PointerEvent, PointerEventKind, PointerId};

/// Drag progress reported by [`DragGesture::on_event`].
///
/// `offset` is always the total horizontal travel since the pointer went
/// down, never a per-event delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragEvent {
    Started { offset: f32 },
    Moved { offset: f32 },
    Ended { offset: f32 },
    Cancelled,
}

/// Tracks one pointer from press to release and reports a drag once the
/// horizontal travel exceeds the threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragGesture {
    threshold: f32,
    pointer: Option<PointerId>,
    origin: Point,
    dragging: bool,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::with_threshold(DRAG_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            threshold: threshold.max(0.0),
            pointer: None,
            origin: Point::ZERO,
            dragging: false,
        }
    }

    pub fn is_pressed(&self) -> bool {
        self.pointer.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    pub fn reset(&mut self) {
        self.pointer = None;
        self.dragging = false;
    }

    /// Feed a pointer event. Events that move an active drag are consumed.
    pub fn on_event(&mut self, event: &PointerEvent) -> Option<DragEvent> {
        match event.kind {
            PointerEventKind::Down => {
                if self.pointer.is_none() {
                    self.pointer = Some(event.id);
                    self.origin = event.position;
                    self.dragging = false;
                }
                None
            }
            PointerEventKind::Move => {
                if self.pointer != Some(event.id) {
                    return None;
                }
                let offset = event.position.x - self.origin.x;
                if !self.dragging {
                    if offset.abs() <= self.threshold {
                        return None;
                    }
                    self.dragging = true;
                    event.consume();
                    log::trace!("drag started at offset {offset}");
                    return Some(DragEvent::Started { offset });
                }
                event.consume();
                Some(DragEvent::Moved { offset })
            }
            PointerEventKind::Up => {
                if self.pointer != Some(event.id) {
                    return None;
                }
                let was_dragging = self.dragging;
                let offset = event.position.x - self.origin.x;
                self.reset();
                if was_dragging {
                    event.consume();
                    Some(DragEvent::Ended { offset })
                } else {
                    None
                }
            }
            PointerEventKind::Cancel => {
                if self.pointer != Some(event.id) {
                    return None;
                }
                let was_dragging = self.dragging;
                self.reset();
                was_dragging.then_some(DragEvent::Cancelled)
            }
        }
    }
}

impl Default for DragGesture {
    fn default() -> Self {
        Self::new()
    }
}
