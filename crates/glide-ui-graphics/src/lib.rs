//! Pure geometry for Glide
//!
//! Logical-pixel points and sizes shared by the input, layout and platform
//! crates. Nothing in here knows about the carousel.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Size};
}
