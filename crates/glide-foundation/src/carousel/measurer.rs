use std::rc::Rc;

/// Supplies live layout geometry to the carousel.
///
/// Implemented by the host (DOM, test harness). Queried on mount and after
/// every resize, never cached by the engine.
pub trait LayoutMeasurer {
    /// Visible width of the strip's container, in logical pixels.
    fn container_width(&self) -> f32;

    /// Width of one rendered item including its gap, or `None` while no item
    /// has been rendered yet.
    fn item_width(&self) -> Option<f32>;
}

impl<M: LayoutMeasurer + ?Sized> LayoutMeasurer for Rc<M> {
    fn container_width(&self) -> f32 {
        (**self).container_width()
    }

    fn item_width(&self) -> Option<f32> {
        (**self).item_width()
    }
}

impl<M: LayoutMeasurer + ?Sized> LayoutMeasurer for &M {
    fn container_width(&self) -> f32 {
        (**self).container_width()
    }

    fn item_width(&self) -> Option<f32> {
        (**self).item_width()
    }
}
