pub mod drag;
pub mod tap;

pub use drag::{DragEvent, DragGesture};
pub use tap::TapGesture;
