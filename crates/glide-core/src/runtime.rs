use crate::frame_clock::FrameClock;
use crate::platform::FrameScheduler;
use rustc_hash::FxHashMap;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64)>;

struct RuntimeInner {
    next_frame_callback_id: Cell<FrameCallbackId>,
    frame_callbacks: RefCell<FxHashMap<FrameCallbackId, FrameCallback>>,
    frame_requested: Cell<bool>,
    disposed: Cell<bool>,
    scheduler: RefCell<Option<Rc<dyn FrameScheduler>>>,
}

/// Cheaply clonable handle to the UI-thread runtime.
///
/// The runtime only stores one-shot frame callbacks. Hosts drain them once per
/// frame with the frame timestamp in nanoseconds.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Rc<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RuntimeInner {
                next_frame_callback_id: Cell::new(1),
                frame_callbacks: RefCell::new(FxHashMap::default()),
                frame_requested: Cell::new(false),
                disposed: Cell::new(false),
                scheduler: RefCell::new(None),
            }),
        }
    }

    /// Create a runtime that asks `scheduler` for a frame whenever work is queued.
    pub fn with_scheduler(scheduler: Rc<dyn FrameScheduler>) -> Self {
        let runtime = Self::new();
        runtime.set_scheduler(scheduler);
        runtime
    }

    pub fn set_scheduler(&self, scheduler: Rc<dyn FrameScheduler>) {
        *self.inner.scheduler.borrow_mut() = Some(scheduler);
        if self.has_pending_frame_callbacks() {
            self.request_frame();
        }
    }

    pub fn frame_clock(&self) -> FrameClock {
        FrameClock::new(self.clone())
    }

    /// Queue `callback` for the next frame.
    ///
    /// Returns `None` once the runtime has been disposed.
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        if self.inner.disposed.get() {
            log::trace!("runtime disposed, dropping frame callback");
            return None;
        }
        let id = self.inner.next_frame_callback_id.get();
        self.inner.next_frame_callback_id.set(id + 1);
        self.inner
            .frame_callbacks
            .borrow_mut()
            .insert(id, Box::new(callback));
        self.request_frame();
        Some(id)
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.inner.frame_callbacks.borrow_mut().remove(&id);
    }

    pub fn has_pending_frame_callbacks(&self) -> bool {
        !self.inner.frame_callbacks.borrow().is_empty()
    }

    /// Run every callback queued before this call, in registration order.
    ///
    /// Callbacks registered while draining are kept for the following frame.
    /// Returns the number of callbacks that ran.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) -> usize {
        self.inner.frame_requested.set(false);
        let pending = std::mem::take(&mut *self.inner.frame_callbacks.borrow_mut());
        let mut callbacks: Vec<_> = pending.into_iter().collect();
        callbacks.sort_unstable_by_key(|(id, _)| *id);
        let count = callbacks.len();
        for (_, callback) in callbacks {
            callback(frame_time_nanos);
        }
        count
    }

    /// Drop all queued callbacks and refuse new ones.
    pub fn dispose(&self) {
        self.inner.disposed.set(true);
        self.inner.frame_callbacks.borrow_mut().clear();
        self.inner.scheduler.borrow_mut().take();
    }

    pub fn is_disposed(&self) -> bool {
        self.inner.disposed.get()
    }

    fn request_frame(&self) {
        if self.inner.frame_requested.replace(true) {
            return;
        }
        let scheduler = self.inner.scheduler.borrow().clone();
        match scheduler {
            Some(scheduler) => scheduler.schedule_frame(),
            // Without a scheduler the host polls `has_pending_frame_callbacks`.
            None => self.inner.frame_requested.set(false),
        }
    }
}

impl Default for RuntimeHandle {
    fn default() -> Self {
        Self::new()
    }
}
