use std::cell::RefCell;
use std::rc::{Rc, Weak};

use glide_animation::FrameLoop;
use glide_core::{ListenerRegistration, ListenerRegistry, RuntimeHandle};
use glide_ui_graphics::Size;

use super::bounds::BoundsReport;
use super::config::CarouselConfig;
use super::engine::{CarouselEngine, CarouselPhase, CarouselState};
use super::measurer::LayoutMeasurer;
use crate::nodes::input::{DragEvent, DragGesture, PointerEvent, PointerEventKind, TapGesture};

/// Host window resize notifications. The payload is the new viewport size.
pub type ResizeEvents = ListenerRegistry<Size>;

/// Pointer cursor the host should show over the strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorIcon {
    Grab,
    Grabbing,
}

type SelectCallback = Rc<dyn Fn(usize)>;

/// Binds a [`CarouselEngine`] to a live surface: pointer input, resize
/// notifications and frame callbacks.
///
/// The resize listener is installed by [`mount`](Self::mount) and removed by
/// [`unmount`](Self::unmount) or when the surface is dropped, along with any
/// pending settle frame.
pub struct CarouselSurface<M: LayoutMeasurer + 'static> {
    inner: Rc<RefCell<SurfaceInner<M>>>,
}

struct SurfaceInner<M: LayoutMeasurer + 'static> {
    engine: CarouselEngine,
    measurer: M,
    item_count: usize,
    drag: DragGesture,
    tap: TapGesture,
    interrupted_settle: bool,
    settle_loop: FrameLoop,
    resize_registration: Option<ListenerRegistration>,
    on_item_selected: Option<SelectCallback>,
}

impl<M: LayoutMeasurer + 'static> CarouselSurface<M> {
    pub fn new(
        measurer: M,
        item_count: usize,
        runtime: RuntimeHandle,
        config: CarouselConfig,
    ) -> Self {
        Self {
            inner: Rc::new(RefCell::new(SurfaceInner {
                engine: CarouselEngine::new(config),
                measurer,
                item_count,
                drag: DragGesture::new(),
                tap: TapGesture::new(),
                interrupted_settle: false,
                settle_loop: FrameLoop::new(runtime),
                resize_registration: None,
                on_item_selected: None,
            })),
        }
    }

    /// Start listening for resizes and take the first measurement.
    pub fn mount(&self, resize_events: &ResizeEvents) -> BoundsReport {
        let weak: Weak<RefCell<SurfaceInner<M>>> = Rc::downgrade(&self.inner);
        let registration = resize_events.register(move |size: &Size| {
            if let Some(inner) = weak.upgrade() {
                if size.is_empty() {
                    log::debug!(
                        "Carousel: viewport collapsed to {}x{}",
                        size.width,
                        size.height
                    );
                }
                Self::remeasure_inner(&inner);
            }
        });
        let previous = self
            .inner
            .borrow_mut()
            .resize_registration
            .replace(registration);
        if previous.is_some() {
            log::debug!("Carousel: remounted, previous resize listener released");
        }
        drop(previous);
        self.remeasure()
    }

    /// Remove the resize listener. A drag or settle in progress is resolved
    /// and the strip jumps straight to its resting position.
    pub fn unmount(&self) {
        let registration = {
            let mut inner = self.inner.borrow_mut();
            inner.settle_loop.stop();
            inner.engine.snap_to_rest();
            inner.interrupted_settle = false;
            inner.drag.reset();
            inner.tap.reset();
            inner.resize_registration.take()
        };
        drop(registration);
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().resize_registration.is_some()
    }

    /// Re-read the layout and recompute the bound.
    pub fn remeasure(&self) -> BoundsReport {
        Self::remeasure_inner(&self.inner)
    }

    /// Called with the index of a tapped item. Drags never select.
    pub fn set_on_item_selected(&self, callback: impl Fn(usize) + 'static) {
        self.inner.borrow_mut().on_item_selected = Some(Rc::new(callback));
    }

    pub fn position(&self) -> f32 {
        self.inner.borrow().engine.position()
    }

    pub fn bound(&self) -> f32 {
        self.inner.borrow().engine.bound()
    }

    pub fn phase(&self) -> CarouselPhase {
        self.inner.borrow().engine.phase()
    }

    pub fn state(&self) -> CarouselState {
        self.inner.borrow().engine.state()
    }

    pub fn item_count(&self) -> usize {
        self.inner.borrow().item_count
    }

    pub fn is_settling(&self) -> bool {
        self.inner.borrow().settle_loop.is_running()
    }

    pub fn cursor(&self) -> CursorIcon {
        if self.inner.borrow().drag.is_pressed() {
            CursorIcon::Grabbing
        } else {
            CursorIcon::Grab
        }
    }

    pub fn with_measurer<R>(&self, f: impl FnOnce(&M) -> R) -> R {
        f(&self.inner.borrow().measurer)
    }

    /// Feed a container-local pointer event.
    pub fn handle_pointer_event(&self, event: &PointerEvent) {
        if event.kind == PointerEventKind::Down && !event.buttons.is_primary_or_touch() {
            return;
        }

        let selected = {
            let mut guard = self.inner.borrow_mut();
            let inner = &mut *guard;

            if event.kind == PointerEventKind::Down && !inner.drag.is_pressed() {
                inner.interrupted_settle = inner.engine.is_settling();
                inner.settle_loop.stop();
                inner.engine.interrupt_settle();
            }

            match inner.drag.on_event(event) {
                Some(DragEvent::Started { offset }) => {
                    inner.interrupted_settle = false;
                    inner.engine.begin_drag();
                    inner.engine.drag_to(offset);
                }
                Some(DragEvent::Moved { offset }) => inner.engine.drag_to(offset),
                Some(DragEvent::Ended { offset }) => {
                    inner.engine.drag_to(offset);
                    inner.engine.end_drag();
                }
                Some(DragEvent::Cancelled) => {
                    inner.engine.end_drag();
                }
                None => {
                    if matches!(event.kind, PointerEventKind::Up | PointerEventKind::Cancel)
                        && std::mem::take(&mut inner.interrupted_settle)
                    {
                        inner.engine.resume_settle();
                    }
                }
            }

            if inner.engine.is_settling() && !inner.settle_loop.is_running() {
                Self::start_settle(Rc::downgrade(&self.inner), &inner.settle_loop);
            }

            inner
                .tap
                .on_event(event)
                .and_then(|point| inner.engine.item_at(point.x))
                .and_then(|index| {
                    inner
                        .on_item_selected
                        .clone()
                        .map(|callback| (callback, index))
                })
        };

        // Outside the borrow: the callback may query or drop this surface.
        if let Some((callback, index)) = selected {
            log::debug!("Carousel: item {} selected", index);
            callback(index);
        }
    }

    fn start_settle(weak: Weak<RefCell<SurfaceInner<M>>>, settle_loop: &FrameLoop) {
        settle_loop.start(move |dt| {
            let Some(inner) = weak.upgrade() else {
                return false;
            };
            let still_settling = inner.borrow_mut().engine.tick(dt);
            still_settling
        });
    }

    fn remeasure_inner(inner: &RefCell<SurfaceInner<M>>) -> BoundsReport {
        let mut inner = inner.borrow_mut();
        let container_width = inner.measurer.container_width();
        let item_width = inner.measurer.item_width();
        let item_count = inner.item_count;
        inner
            .engine
            .set_bounds(container_width, item_width, item_count)
    }
}

impl<M: LayoutMeasurer + 'static> AsRef<CarouselSurface<M>> for CarouselSurface<M> {
    fn as_ref(&self) -> &CarouselSurface<M> {
        self
    }
}

#[cfg(test)]
#[path = "tests/surface_tests.rs"]
mod tests;
