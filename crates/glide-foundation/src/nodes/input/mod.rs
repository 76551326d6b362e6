pub mod gestures;
pub mod types;

pub use gestures::{DragEvent, DragGesture, TapGesture};
pub use types::{PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId};

pub mod prelude {
    pub use super::gestures::{DragEvent, DragGesture, TapGesture};
    pub use super::types::{PointerButton, PointerButtons, PointerEvent, PointerEventKind, PointerId};
}
