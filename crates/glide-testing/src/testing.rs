//! Headless host: a manual frame clock, a resizable layout and the resize
//! event source a browser window would provide.

use std::cell::Cell;
use std::rc::Rc;

use glide_core::RuntimeHandle;
use glide_foundation::{LayoutMeasurer, ResizeEvents};
use glide_ui_graphics::Size;

/// 60 Hz, in nanoseconds.
pub const FRAME_INTERVAL_NANOS: u64 = 16_666_667;

const VIEWPORT_HEIGHT: f32 = 800.0;

/// Layout whose measurements the test sets directly. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct TestLayout {
    container_width: Rc<Cell<f32>>,
    item_width: Rc<Cell<Option<f32>>>,
}

impl TestLayout {
    pub fn new(container_width: f32, item_width: Option<f32>) -> Self {
        let layout = Self::default();
        layout.set_container_width(container_width);
        layout.set_item_width(item_width);
        layout
    }

    pub fn set_container_width(&self, width: f32) {
        self.container_width.set(width);
    }

    pub fn set_item_width(&self, width: Option<f32>) {
        self.item_width.set(width);
    }
}

impl LayoutMeasurer for TestLayout {
    fn container_width(&self) -> f32 {
        self.container_width.get()
    }

    fn item_width(&self) -> Option<f32> {
        self.item_width.get()
    }
}

/// Stands in for the browser: owns the runtime, the window's resize events
/// and the layout, and advances time one frame at a time.
pub struct TestHost {
    runtime: RuntimeHandle,
    resize_events: ResizeEvents,
    layout: TestLayout,
    time_nanos: u64,
}

impl TestHost {
    pub fn new(container_width: f32, item_width: Option<f32>) -> Self {
        Self {
            runtime: RuntimeHandle::new(),
            resize_events: ResizeEvents::new(),
            layout: TestLayout::new(container_width, item_width),
            time_nanos: 0,
        }
    }

    pub fn runtime(&self) -> RuntimeHandle {
        self.runtime.clone()
    }

    pub fn resize_events(&self) -> &ResizeEvents {
        &self.resize_events
    }

    pub fn layout(&self) -> TestLayout {
        self.layout.clone()
    }

    pub fn time_nanos(&self) -> u64 {
        self.time_nanos
    }

    pub fn has_pending_frames(&self) -> bool {
        self.runtime.has_pending_frame_callbacks()
    }

    /// Advance the clock one frame and run the frame callbacks due.
    pub fn advance_frame(&mut self) -> usize {
        self.time_nanos += FRAME_INTERVAL_NANOS;
        self.runtime.drain_frame_callbacks(self.time_nanos)
    }

    /// Change the container width and notify resize listeners.
    pub fn resize(&self, container_width: f32) -> usize {
        self.layout.set_container_width(container_width);
        self.resize_events
            .dispatch(&Size::new(container_width, VIEWPORT_HEIGHT))
    }
}

#[cfg(test)]
#[path = "tests/testing_tests.rs"]
mod tests;
