use std::cell::Cell;

use glide_foundation::LayoutMeasurer;

/// Fixed-geometry layout for headless runs: the container width can change,
/// the rendered item width cannot.
#[derive(Debug)]
pub struct StaticLayout {
    container_width: Cell<f32>,
    item_width: Option<f32>,
}

impl StaticLayout {
    pub fn new(container_width: f32, item_width: Option<f32>) -> Self {
        Self {
            container_width: Cell::new(container_width),
            item_width,
        }
    }

    pub fn set_container_width(&self, width: f32) {
        self.container_width.set(width);
    }
}

impl LayoutMeasurer for StaticLayout {
    fn container_width(&self) -> f32 {
        self.container_width.get()
    }

    fn item_width(&self) -> Option<f32> {
        self.item_width
    }
}
