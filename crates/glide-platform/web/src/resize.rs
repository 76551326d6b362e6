use glide_foundation::{ResizeEvents, Size};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

use crate::error::{window, PlatformError};

/// Forwards the window's `resize` event to a [`ResizeEvents`] registry.
///
/// The DOM listener is removed when this is dropped.
pub struct WindowResizeSource {
    window: Window,
    events: ResizeEvents,
    closure: Closure<dyn FnMut(Event)>,
}

impl WindowResizeSource {
    pub fn install() -> Result<Self, PlatformError> {
        let window = window()?;
        let events = ResizeEvents::new();
        let closure = {
            let events = events.clone();
            let window = window.clone();
            Closure::wrap(Box::new(move |_event: Event| {
                events.dispatch(&viewport_size(&window));
            }) as Box<dyn FnMut(_)>)
        };
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        Ok(Self {
            window,
            events,
            closure,
        })
    }

    pub fn events(&self) -> &ResizeEvents {
        &self.events
    }
}

impl Drop for WindowResizeSource {
    fn drop(&mut self) {
        if let Err(err) = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref())
        {
            log::warn!("WindowResizeSource: failed to remove resize listener: {:?}", err);
        }
    }
}

fn viewport_size(window: &Window) -> Size {
    let dimension = |value: Result<JsValue, JsValue>| {
        value
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(0.0) as f32
    };
    Size::new(
        dimension(window.inner_width()),
        dimension(window.inner_height()),
    )
}
