use glide_ui_graphics::Point;
use std::cell::Cell;
use std::rc::Rc;

pub type PointerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Cancel,
}

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary = 0,
    Secondary = 1,
    Middle = 2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerButtons(u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn with(mut self, button: PointerButton) -> Self {
        self.insert(button);
        self
    }

    pub fn insert(&mut self, button: PointerButton) {
        self.0 |= 1 << (button as u8);
    }

    pub fn contains(&self, button: PointerButton) -> bool {
        (self.0 & (1 << (button as u8))) != 0
    }

    /// Touch and pen contacts report no buttons; they count as primary.
    pub fn is_primary_or_touch(&self) -> bool {
        *self == Self::NONE || self.contains(PointerButton::Primary)
    }
}

impl Default for PointerButtons {
    fn default() -> Self {
        Self::NONE
    }
}

/// Pointer event with consumption tracking for gesture disambiguation.
///
/// The drag recogniser consumes events once the carousel starts following the
/// pointer, which tells the tap recogniser not to select an item on release.
#[derive(Clone, Debug)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    /// Position relative to the carousel container, in logical pixels.
    pub position: Point,
    pub buttons: PointerButtons,
    consumed: Rc<Cell<bool>>,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, position: Point) -> Self {
        Self {
            id: 0,
            kind,
            position,
            buttons: PointerButtons::NONE,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn with_id(mut self, id: PointerId) -> Self {
        self.id = id;
        self
    }

    /// Set the buttons state for this event
    pub fn with_buttons(mut self, buttons: PointerButtons) -> Self {
        self.buttons = buttons;
        self
    }

    /// Mark this event as consumed, preventing other handlers from processing it.
    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_event_is_unconsumed_with_no_buttons() {
        let up = PointerEvent::new(PointerEventKind::Up, Point::ZERO).with_id(3);
        assert_eq!(up.kind, PointerEventKind::Up);
        assert_eq!(up.id, 3);
        assert_eq!(up.buttons, PointerButtons::NONE);
        assert!(!up.is_consumed());
    }

    #[test]
    fn consumption_is_shared_between_clones() {
        let event = PointerEvent::new(PointerEventKind::Move, Point::new(4.0, 0.0));
        let copy = event.clone();
        copy.consume();
        assert!(event.is_consumed());
    }

    #[test]
    fn touch_counts_as_primary() {
        assert!(PointerButtons::NONE.is_primary_or_touch());
        assert!(PointerButtons::new()
            .with(PointerButton::Primary)
            .is_primary_or_touch());
        assert!(!PointerButtons::new()
            .with(PointerButton::Secondary)
            .is_primary_or_touch());
    }
}
