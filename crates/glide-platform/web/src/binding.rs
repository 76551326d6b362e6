use std::rc::Rc;

use glide_foundation::{CarouselSurface, CursorIcon, LayoutMeasurer, PointerEventKind};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::error::PlatformError;
use crate::WebPlatform;

type PointerClosure = Closure<dyn FnMut(web_sys::PointerEvent)>;

const POINTER_EVENTS: [(&str, PointerEventKind); 4] = [
    ("pointerdown", PointerEventKind::Down),
    ("pointermove", PointerEventKind::Move),
    ("pointerup", PointerEventKind::Up),
    ("pointercancel", PointerEventKind::Cancel),
];

/// Routes the container's DOM pointer events into a [`CarouselSurface`] and
/// keeps the CSS cursor in sync. Listeners are removed on drop.
pub struct WebCarouselBinding<M: LayoutMeasurer + 'static> {
    element: HtmlElement,
    surface: Rc<CarouselSurface<M>>,
    listeners: Vec<(&'static str, PointerClosure)>,
}

impl<M: LayoutMeasurer + 'static> WebCarouselBinding<M> {
    pub fn attach(
        element: HtmlElement,
        surface: Rc<CarouselSurface<M>>,
        platform: Rc<WebPlatform>,
    ) -> Result<Self, PlatformError> {
        let mut binding = Self {
            element,
            surface,
            listeners: Vec::with_capacity(POINTER_EVENTS.len()),
        };
        for (name, kind) in POINTER_EVENTS {
            let closure = {
                let surface = Rc::clone(&binding.surface);
                let platform = Rc::clone(&platform);
                let element = binding.element.clone();
                Closure::wrap(Box::new(move |event: web_sys::PointerEvent| {
                    if kind == PointerEventKind::Down {
                        // Keep receiving moves once the pointer leaves the strip.
                        if let Err(err) = element.set_pointer_capture(event.pointer_id()) {
                            log::debug!("WebCarouselBinding: could not capture pointer: {:?}", err);
                        }
                    }
                    let pointer = platform.pointer_event_from_dom(kind, &event, &element);
                    surface.handle_pointer_event(&pointer);
                    if pointer.is_consumed() {
                        event.prevent_default();
                    }
                    apply_cursor(&element, surface.cursor());
                }) as Box<dyn FnMut(_)>)
            };
            binding
                .element
                .add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
            binding.listeners.push((name, closure));
        }
        apply_cursor(&binding.element, binding.surface.cursor());
        Ok(binding)
    }

    pub fn surface(&self) -> &CarouselSurface<M> {
        &self.surface
    }
}

impl<M: LayoutMeasurer + 'static> Drop for WebCarouselBinding<M> {
    fn drop(&mut self) {
        for (name, closure) in self.listeners.drain(..) {
            if let Err(err) = self
                .element
                .remove_event_listener_with_callback(name, closure.as_ref().unchecked_ref())
            {
                log::warn!("WebCarouselBinding: failed to remove {} listener: {:?}", name, err);
            }
        }
    }
}

fn apply_cursor(element: &HtmlElement, cursor: CursorIcon) {
    let value = match cursor {
        CursorIcon::Grab => "grab",
        CursorIcon::Grabbing => "grabbing",
    };
    if let Err(err) = element.style().set_property("cursor", value) {
        log::debug!("WebCarouselBinding: could not set cursor: {:?}", err);
    }
}
