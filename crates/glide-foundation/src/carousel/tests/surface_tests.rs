use super::*;
use crate::nodes::input::{PointerButton, PointerButtons};
use glide_ui_graphics::Point;
use std::cell::Cell;

const FRAME_NANOS: u64 = 16_666_667;

#[derive(Default)]
struct FixedLayout {
    container: Cell<f32>,
    item: Cell<Option<f32>>,
}

impl LayoutMeasurer for FixedLayout {
    fn container_width(&self) -> f32 {
        self.container.get()
    }

    fn item_width(&self) -> Option<f32> {
        self.item.get()
    }
}

struct Fixture {
    runtime: RuntimeHandle,
    resize_events: ResizeEvents,
    layout: Rc<FixedLayout>,
    surface: CarouselSurface<Rc<FixedLayout>>,
    time: u64,
}

impl Fixture {
    fn new(container: f32, item: Option<f32>, count: usize) -> Self {
        let runtime = RuntimeHandle::new();
        let layout = Rc::new(FixedLayout::default());
        layout.container.set(container);
        layout.item.set(item);
        let surface = CarouselSurface::new(
            Rc::clone(&layout),
            count,
            runtime.clone(),
            CarouselConfig::default(),
        );
        let resize_events = ResizeEvents::new();
        surface.mount(&resize_events);
        Self {
            runtime,
            resize_events,
            layout,
            surface,
            time: 0,
        }
    }

    fn pointer(&self, kind: PointerEventKind, x: f32) {
        self.surface
            .handle_pointer_event(&PointerEvent::new(kind, Point::new(x, 50.0)));
    }

    fn frame(&mut self) {
        self.time += FRAME_NANOS;
        self.runtime.drain_frame_callbacks(self.time);
    }

    fn run_until_idle(&mut self) {
        let mut frames = 0;
        while self.runtime.has_pending_frame_callbacks() {
            self.frame();
            frames += 1;
            assert!(frames < 600, "carousel never settled");
        }
    }

    fn resize(&self, container: f32) {
        self.layout.container.set(container);
        self.resize_events
            .dispatch(&Size::new(container, 800.0));
    }
}

#[test]
fn mount_measures_and_installs_resize_listener() {
    let fixture = Fixture::new(1200.0, Some(320.0), 5);
    assert!(fixture.surface.is_mounted());
    assert_eq!(fixture.resize_events.len(), 1);
    assert_eq!(fixture.surface.bound(), 416.0);

    fixture.resize(1000.0);
    assert_eq!(fixture.surface.bound(), 616.0);
}

#[test]
fn mount_before_items_render_uses_fallback_width() {
    let fixture = Fixture::new(1200.0, None, 5);
    assert_eq!(fixture.surface.bound(), 316.0);
}

#[test]
fn unmount_and_drop_release_resize_listener() {
    let fixture = Fixture::new(1200.0, Some(320.0), 5);
    fixture.surface.unmount();
    assert!(!fixture.surface.is_mounted());
    assert!(fixture.resize_events.is_empty());

    let Fixture {
        resize_events,
        surface,
        ..
    } = Fixture::new(1200.0, Some(320.0), 5);
    assert_eq!(resize_events.len(), 1);
    drop(surface);
    assert!(resize_events.is_empty());
}

#[test]
fn overdrag_past_end_settles_back_to_bound() {
    let mut fixture = Fixture::new(1200.0, Some(320.0), 5);
    fixture.pointer(PointerEventKind::Down, 600.0);
    fixture.pointer(PointerEventKind::Move, 500.0);
    assert_eq!(fixture.surface.position(), -100.0);

    fixture.pointer(PointerEventKind::Move, 100.0);
    // Raw -500, overflow of 84 halved.
    assert_eq!(fixture.surface.position(), -458.0);

    fixture.pointer(PointerEventKind::Up, 100.0);
    assert_eq!(
        fixture.surface.phase(),
        CarouselPhase::Settling { target: -416.0 }
    );
    assert!(fixture.surface.is_settling());

    fixture.run_until_idle();
    assert_eq!(fixture.surface.position(), -416.0);
    assert_eq!(fixture.surface.phase(), CarouselPhase::Idle);
    assert!(!fixture.surface.is_settling());
}

#[test]
fn release_inside_bounds_schedules_nothing() {
    let fixture = Fixture::new(1200.0, Some(320.0), 5);
    fixture.pointer(PointerEventKind::Down, 600.0);
    fixture.pointer(PointerEventKind::Move, 400.0);
    fixture.pointer(PointerEventKind::Up, 400.0);
    assert_eq!(fixture.surface.position(), -200.0);
    assert_eq!(fixture.surface.phase(), CarouselPhase::Idle);
    assert!(!fixture.runtime.has_pending_frame_callbacks());
}

#[test]
fn tap_selects_item_but_drag_does_not() {
    let fixture = Fixture::new(1200.0, Some(320.0), 5);
    let selected = Rc::new(RefCell::new(Vec::new()));
    {
        let selected = Rc::clone(&selected);
        fixture
            .surface
            .set_on_item_selected(move |index| selected.borrow_mut().push(index));
    }

    fixture.pointer(PointerEventKind::Down, 350.0);
    fixture.pointer(PointerEventKind::Up, 352.0);

    fixture.pointer(PointerEventKind::Down, 600.0);
    fixture.pointer(PointerEventKind::Move, 400.0);
    fixture.pointer(PointerEventKind::Up, 400.0);

    assert_eq!(*selected.borrow(), vec![1]);
}

#[test]
fn press_during_settle_freezes_then_resumes_on_release() {
    let mut fixture = Fixture::new(1200.0, Some(320.0), 5);
    fixture.pointer(PointerEventKind::Down, 100.0);
    fixture.pointer(PointerEventKind::Move, 300.0);
    fixture.pointer(PointerEventKind::Up, 300.0);
    assert_eq!(fixture.surface.position(), 100.0);

    fixture.frame();
    fixture.frame();
    let frozen = fixture.surface.position();
    assert!(frozen > 0.0 && frozen < 100.0);

    fixture.pointer(PointerEventKind::Down, 500.0);
    assert_eq!(fixture.surface.phase(), CarouselPhase::Idle);
    assert!(!fixture.runtime.has_pending_frame_callbacks());
    fixture.frame();
    assert_eq!(fixture.surface.position(), frozen);

    fixture.pointer(PointerEventKind::Up, 500.0);
    assert_eq!(
        fixture.surface.phase(),
        CarouselPhase::Settling { target: 0.0 }
    );
    fixture.run_until_idle();
    assert_eq!(fixture.surface.position(), 0.0);
}

#[test]
fn drag_from_interrupted_settle_does_not_jump() {
    let mut fixture = Fixture::new(1200.0, Some(320.0), 5);
    fixture.pointer(PointerEventKind::Down, 600.0);
    fixture.pointer(PointerEventKind::Move, 100.0);
    fixture.pointer(PointerEventKind::Up, 100.0);
    fixture.frame();
    fixture.frame();
    let frozen = fixture.surface.position();

    fixture.pointer(PointerEventKind::Down, 600.0);
    fixture.pointer(PointerEventKind::Move, 590.0);
    // 10px of further leftward travel past the edge shows as 5px.
    assert!((fixture.surface.position() - (frozen - 5.0)).abs() < 1e-3);
}

#[test]
fn resize_during_settle_keeps_target() {
    let mut fixture = Fixture::new(1200.0, Some(320.0), 5);
    fixture.pointer(PointerEventKind::Down, 600.0);
    fixture.pointer(PointerEventKind::Move, 100.0);
    fixture.pointer(PointerEventKind::Up, 100.0);
    fixture.frame();

    fixture.resize(2000.0);
    assert_eq!(fixture.surface.bound(), 0.0);
    assert_eq!(
        fixture.surface.phase(),
        CarouselPhase::Settling { target: -416.0 }
    );

    fixture.run_until_idle();
    assert_eq!(fixture.surface.position(), -416.0);
}

#[test]
fn dropping_surface_cancels_pending_settle_frame() {
    let Fixture {
        runtime, surface, ..
    } = Fixture::new(1200.0, Some(320.0), 5);
    let event = |kind, x| PointerEvent::new(kind, Point::new(x, 50.0));
    surface.handle_pointer_event(&event(PointerEventKind::Down, 100.0));
    surface.handle_pointer_event(&event(PointerEventKind::Move, 300.0));
    surface.handle_pointer_event(&event(PointerEventKind::Up, 300.0));
    assert!(runtime.has_pending_frame_callbacks());

    drop(surface);
    assert!(!runtime.has_pending_frame_callbacks());
}

#[test]
fn secondary_button_is_ignored() {
    let fixture = Fixture::new(1200.0, Some(320.0), 5);
    let secondary = PointerButtons::new().with(PointerButton::Secondary);
    fixture.surface.handle_pointer_event(
        &PointerEvent::new(PointerEventKind::Down, Point::new(600.0, 50.0))
            .with_buttons(secondary),
    );
    fixture.pointer(PointerEventKind::Move, 300.0);
    assert_eq!(fixture.surface.position(), 0.0);
    assert_eq!(fixture.surface.cursor(), CursorIcon::Grab);
}

#[test]
fn cursor_tracks_press() {
    let fixture = Fixture::new(1200.0, Some(320.0), 5);
    assert_eq!(fixture.surface.cursor(), CursorIcon::Grab);
    fixture.pointer(PointerEventKind::Down, 600.0);
    assert_eq!(fixture.surface.cursor(), CursorIcon::Grabbing);
    fixture.pointer(PointerEventKind::Up, 600.0);
    assert_eq!(fixture.surface.cursor(), CursorIcon::Grab);
}

#[test]
fn zero_items_is_inert() {
    let fixture = Fixture::new(1200.0, Some(320.0), 0);
    fixture.pointer(PointerEventKind::Down, 600.0);
    fixture.pointer(PointerEventKind::Move, 100.0);
    fixture.pointer(PointerEventKind::Up, 100.0);
    assert_eq!(fixture.surface.bound(), 0.0);
    // Nothing to scroll: the damped leftward release is kept.
    assert_eq!(fixture.surface.position(), -250.0);
    assert_eq!(fixture.surface.phase(), CarouselPhase::Idle);
}

#[test]
fn unmount_mid_drag_leaves_strip_at_rest() {
    let mut fixture = Fixture::new(1200.0, Some(320.0), 5);
    let selected = Rc::new(RefCell::new(Vec::new()));
    {
        let selected = Rc::clone(&selected);
        fixture
            .surface
            .set_on_item_selected(move |index| selected.borrow_mut().push(index));
    }
    fixture.pointer(PointerEventKind::Down, 100.0);
    fixture.pointer(PointerEventKind::Move, 300.0);
    assert_eq!(fixture.surface.position(), 100.0);

    fixture.surface.unmount();
    assert_eq!(fixture.surface.position(), 0.0);
    assert_eq!(fixture.surface.phase(), CarouselPhase::Idle);
    assert_eq!(fixture.surface.cursor(), CursorIcon::Grab);
    assert!(!fixture.runtime.has_pending_frame_callbacks());

    fixture.surface.mount(&fixture.resize_events);
    fixture.run_until_idle();
    fixture.pointer(PointerEventKind::Down, 350.0);
    fixture.pointer(PointerEventKind::Up, 350.0);
    assert_eq!(fixture.surface.position(), 0.0);
    assert_eq!(fixture.surface.phase(), CarouselPhase::Idle);
    assert_eq!(*selected.borrow(), vec![1]);
}

#[test]
fn unmount_mid_settle_jumps_to_target() {
    let mut fixture = Fixture::new(1200.0, Some(320.0), 5);
    fixture.pointer(PointerEventKind::Down, 600.0);
    fixture.pointer(PointerEventKind::Move, 100.0);
    fixture.pointer(PointerEventKind::Up, 100.0);
    fixture.frame();

    fixture.surface.unmount();
    assert_eq!(fixture.surface.position(), -416.0);
    assert_eq!(fixture.surface.phase(), CarouselPhase::Idle);
    assert!(!fixture.runtime.has_pending_frame_callbacks());
}
