//! Foundation elements for Glide
//!
//! Pointer input types, the drag and tap recognisers, and the carousel: bound
//! computation, the drag-end settle policy, the engine that owns position
//! state, and the surface binding that wires it to pointer, resize and frame
//! events.

pub mod carousel;
pub mod gesture_constants;
pub mod nodes;

pub use carousel::*;
pub use gesture_constants::*;
pub use nodes::input::*;

pub use glide_ui_graphics::{Point, Size};

pub mod prelude {
    pub use crate::carousel::{
        CarouselConfig, CarouselEngine, CarouselItem, CarouselPhase, CarouselSurface,
        LayoutMeasurer, SelectionState,
    };
    pub use crate::nodes::input::prelude::*;
}
