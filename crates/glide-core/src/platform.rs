//! Platform abstraction for frame scheduling.
//!
//! The runtime never drives its own loop. When a frame callback is registered
//! it asks the host to schedule a frame; the host later calls
//! [`RuntimeHandle::drain_frame_callbacks`](crate::RuntimeHandle::drain_frame_callbacks)
//! with the frame timestamp.

/// Schedules frames for the Glide runtime.
pub trait FrameScheduler {
    /// Request that the host deliver a new frame.
    fn schedule_frame(&self);
}
