use std::cell::RefCell;
use std::rc::Rc;

use glide_core::{FrameCallbackRegistration, FrameClock, RuntimeHandle};

type Step = Box<dyn FnMut(f32) -> bool>;

/// Calls a step closure once per frame until it reports that it is done.
///
/// The closure receives the time since the previous frame in seconds (0.0 on
/// the first frame) and returns `true` to keep running. Stopping, restarting
/// or dropping the loop cancels the pending frame callback.
pub struct FrameLoop {
    inner: Rc<RefCell<FrameLoopInner>>,
}

struct FrameLoopInner {
    clock: FrameClock,
    registration: Option<FrameCallbackRegistration>,
    last_frame_nanos: Option<u64>,
    step: Option<Step>,
    generation: u64,
}

impl FrameLoop {
    pub fn new(runtime: RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(RefCell::new(FrameLoopInner {
                clock: runtime.frame_clock(),
                registration: None,
                last_frame_nanos: None,
                step: None,
                generation: 0,
            })),
        }
    }

    /// Replace any running step with `step` and schedule the next frame.
    pub fn start(&self, step: impl FnMut(f32) -> bool + 'static) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            inner.step = Some(Box::new(step));
            inner.last_frame_nanos = None;
            inner.generation += 1;
        }
        Self::schedule_frame(&self.inner);
    }

    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.step = None;
        inner.last_frame_nanos = None;
        inner.generation += 1;
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().step.is_some()
    }

    fn schedule_frame(this: &Rc<RefCell<FrameLoopInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() || inner.step.is_none() {
                return;
            }
            inner.clock.clone()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });

        let mut inner = this.borrow_mut();
        if registration.is_active() {
            inner.registration = Some(registration);
        } else {
            log::debug!("frame loop stopped: runtime no longer accepts frames");
            inner.step = None;
            inner.last_frame_nanos = None;
        }
    }

    fn on_frame(this: &Rc<RefCell<FrameLoopInner>>, frame_time_nanos: u64) {
        let (mut step, dt, generation) = {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            let Some(step) = inner.step.take() else {
                return;
            };
            let dt = match inner.last_frame_nanos {
                Some(last) => frame_time_nanos.saturating_sub(last) as f32 / 1_000_000_000.0,
                None => 0.0,
            };
            inner.last_frame_nanos = Some(frame_time_nanos);
            (step, dt, inner.generation)
        };

        // The borrow is released here: the step may stop or restart this loop.
        let keep_running = step(dt);

        let schedule_next = {
            let mut inner = this.borrow_mut();
            if inner.generation != generation {
                false
            } else if keep_running {
                inner.step = Some(step);
                true
            } else {
                inner.last_frame_nanos = None;
                false
            }
        };

        if schedule_next {
            Self::schedule_frame(this);
        }
    }
}
