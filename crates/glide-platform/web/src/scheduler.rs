use std::cell::{Cell, RefCell};
use std::rc::Rc;

use glide_core::{FrameScheduler, RuntimeHandle};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Window;

use crate::error::{window, PlatformError};

/// Drains the runtime's frame callbacks from `requestAnimationFrame`.
///
/// The scheduler and the runtime reference each other until
/// [`RuntimeHandle::dispose`] drops the scheduler.
pub struct AnimationFrameScheduler {
    window: Window,
    callback: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    pending: Cell<Option<i32>>,
}

impl AnimationFrameScheduler {
    pub fn install(runtime: &RuntimeHandle) -> Result<Rc<Self>, PlatformError> {
        let scheduler = Rc::new(Self {
            window: window()?,
            callback: RefCell::new(None),
            pending: Cell::new(None),
        });
        let callback = {
            let runtime = runtime.clone();
            let weak = Rc::downgrade(&scheduler);
            Closure::wrap(Box::new(move |timestamp_ms: f64| {
                if let Some(scheduler) = weak.upgrade() {
                    scheduler.pending.set(None);
                }
                runtime.drain_frame_callbacks((timestamp_ms * 1_000_000.0) as u64);
            }) as Box<dyn FnMut(f64)>)
        };
        *scheduler.callback.borrow_mut() = Some(callback);
        runtime.set_scheduler(scheduler.clone());
        Ok(scheduler)
    }
}

impl FrameScheduler for AnimationFrameScheduler {
    fn schedule_frame(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let callback = self.callback.borrow();
        let Some(callback) = callback.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
        {
            Ok(handle) => self.pending.set(Some(handle)),
            Err(err) => log::error!("AnimationFrameScheduler: requestAnimationFrame failed: {:?}", err),
        }
    }
}

impl Drop for AnimationFrameScheduler {
    fn drop(&mut self) {
        if let Some(handle) = self.pending.take() {
            let _ = self.window.cancel_animation_frame(handle);
        }
    }
}
