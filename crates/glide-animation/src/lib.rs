//! Animation support for Glide
//!
//! Provides the spring settle used for elastic snap-back and a frame loop that
//! drives it from the runtime's frame clock.

mod animation;
mod frame_loop;

pub use animation::{settle, SpringSpec};
pub use frame_loop::FrameLoop;
