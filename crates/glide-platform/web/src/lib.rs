//! Web platform adapter for Glide
//!
//! Converts DOM pointer events into [`glide_foundation::PointerEvent`]s and
//! supplies the browser-backed pieces a carousel needs: layout measurement,
//! window resize notifications and `requestAnimationFrame` scheduling.

mod binding;
mod error;
mod measurer;
mod resize;
mod scheduler;

pub use binding::WebCarouselBinding;
pub use error::PlatformError;
pub use measurer::{DomLayoutMeasurer, CAROUSEL_ITEM_SELECTOR};
pub use resize::WindowResizeSource;
pub use scheduler::AnimationFrameScheduler;

use glide_foundation::{PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId};
use glide_ui_graphics::Point;

pub struct WebPlatform {
    scale_factor: f64,
}

impl WebPlatform {
    pub fn new(scale_factor: f64) -> Self {
        Self { scale_factor }
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    pub fn set_scale_factor(&mut self, factor: f64) {
        self.scale_factor = factor;
    }

    /// Container-local position of a pointer given in client coordinates.
    ///
    /// `container_origin` is the container's client-space top-left corner.
    /// Both are CSS pixels, which are already logical.
    pub fn pointer_position(
        &self,
        client_x: f64,
        client_y: f64,
        container_origin: Point,
    ) -> Point {
        Point {
            x: (client_x - container_origin.x as f64) as f32,
            y: (client_y - container_origin.y as f64) as f32,
        }
    }

    /// Map a DOM `buttons` bitmask (1 primary, 2 secondary, 4 middle).
    pub fn pointer_buttons(&self, dom_buttons: u16) -> PointerButtons {
        let mut buttons = PointerButtons::NONE;
        if dom_buttons & 1 != 0 {
            buttons.insert(PointerButton::Primary);
        }
        if dom_buttons & 2 != 0 {
            buttons.insert(PointerButton::Secondary);
        }
        if dom_buttons & 4 != 0 {
            buttons.insert(PointerButton::Middle);
        }
        buttons
    }

    pub fn pointer_event(
        &self,
        kind: PointerEventKind,
        client_x: f64,
        client_y: f64,
        container_origin: Point,
    ) -> PointerEvent {
        PointerEvent::new(kind, self.pointer_position(client_x, client_y, container_origin))
    }

    /// Convert a DOM pointer event into `container`'s coordinate space.
    /// Negative pointer ids are clamped to 0.
    ///
    /// Positions come from the client coordinates rather than `offsetX`,
    /// which is relative to whichever card the pointer went down on.
    pub fn pointer_event_from_dom(
        &self,
        kind: PointerEventKind,
        event: &web_sys::PointerEvent,
        container: &web_sys::Element,
    ) -> PointerEvent {
        let rect = container.get_bounding_client_rect();
        let origin = Point::new(rect.left() as f32, rect.top() as f32);
        let id = event.pointer_id().max(0) as PointerId;
        self.pointer_event(kind, event.client_x() as f64, event.client_y() as f64, origin)
            .with_id(id)
            .with_buttons(self.pointer_buttons(event.buttons()))
    }
}

impl Default for WebPlatform {
    fn default() -> Self {
        Self::new(1.0)
    }
}
