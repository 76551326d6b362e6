//! Core runtime for the Glide carousel
//!
//! Everything here runs on the host's UI thread. The runtime hands out frame
//! callbacks, the frame clock wraps them in RAII registrations, and the
//! listener registry gives host events (window resize) the same scoped
//! acquire/release discipline.

mod frame_clock;
mod listener;
mod platform;
mod runtime;

pub use frame_clock::{FrameCallbackRegistration, FrameClock};
pub use listener::{ListenerId, ListenerRegistration, ListenerRegistry};
pub use platform::FrameScheduler;
pub use runtime::{FrameCallbackId, RuntimeHandle};

pub mod prelude {
    pub use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
    pub use crate::listener::{ListenerRegistration, ListenerRegistry};
    pub use crate::runtime::RuntimeHandle;
}
