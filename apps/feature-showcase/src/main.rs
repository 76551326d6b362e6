use anyhow::{ensure, Context};
use feature_showcase::{
    features, FeatureShowcase, StaticLayout, TextDetailViewer, ViewerInput, CARD_WIDTH,
};
use glide_core::RuntimeHandle;
use glide_foundation::{
    CarouselConfig, PointerButton, PointerButtons, PointerEvent, PointerEventKind, Point,
    ResizeEvents, Size,
};
use std::rc::Rc;

const DEFAULT_CONTAINER_WIDTH: f32 = 1200.0;
const FRAME_INTERVAL_NANOS: u64 = 16_666_667;
const MAX_FRAMES: usize = 600;

type Showcase = FeatureShowcase<Rc<StaticLayout>, TextDetailViewer>;

struct HeadlessSession {
    runtime: RuntimeHandle,
    resize_events: ResizeEvents,
    layout: Rc<StaticLayout>,
    showcase: Showcase,
    time_nanos: u64,
    debug: bool,
}

impl HeadlessSession {
    fn pointer(&self, kind: PointerEventKind, x: f32) {
        let buttons = PointerButtons::new().with(PointerButton::Primary);
        let event = PointerEvent::new(kind, Point::new(x, 120.0)).with_buttons(buttons);
        self.showcase.surface().handle_pointer_event(&event);
    }

    fn drag(&mut self, from: f32, to: f32) {
        self.pointer(PointerEventKind::Down, from);
        for step in 1..=5 {
            self.pointer(
                PointerEventKind::Move,
                from + (to - from) * step as f32 / 5.0,
            );
        }
        println!(
            "  released at {:>8.2} (bound {})",
            self.showcase.surface().position(),
            self.showcase.surface().bound()
        );
        self.pointer(PointerEventKind::Up, to);
        let frames = self.run_frames();
        println!(
            "  rested at   {:>8.2} after {} frames",
            self.showcase.surface().position(),
            frames
        );
    }

    fn tap(&self, x: f32) {
        self.pointer(PointerEventKind::Down, x);
        self.pointer(PointerEventKind::Up, x);
    }

    fn resize(&self, width: f32) {
        self.layout.set_container_width(width);
        self.resize_events.dispatch(&Size::new(width, 800.0));
    }

    fn run_frames(&mut self) -> usize {
        let mut frames = 0;
        while self.runtime.has_pending_frame_callbacks() && frames < MAX_FRAMES {
            self.time_nanos += FRAME_INTERVAL_NANOS;
            self.runtime.drain_frame_callbacks(self.time_nanos);
            frames += 1;
            if self.debug {
                println!(
                    "    frame {:>3}: position {:>8.2}",
                    frames,
                    self.showcase.surface().position()
                );
            }
        }
        frames
    }
}

fn parse_container_width(arg: Option<String>) -> anyhow::Result<f32> {
    let Some(arg) = arg else {
        return Ok(DEFAULT_CONTAINER_WIDTH);
    };
    let width: f32 = arg
        .parse()
        .with_context(|| format!("invalid container width '{}'", arg))?;
    ensure!(
        width.is_finite() && width > 0.0,
        "container width must be positive, got {}",
        width
    );
    Ok(width)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let container_width = parse_container_width(std::env::args().nth(1))?;
    let debug = std::env::var_os("GLIDE_DEBUG").is_some();

    let runtime = RuntimeHandle::new();
    let layout = Rc::new(StaticLayout::new(container_width, Some(CARD_WIDTH)));
    let showcase = FeatureShowcase::new(
        Rc::clone(&layout),
        features(),
        TextDetailViewer::new(),
        runtime.clone(),
        CarouselConfig::default(),
    );
    let resize_events = ResizeEvents::new();
    let report = showcase.mount(&resize_events);

    println!("=== Glide Feature Showcase ===");
    println!(
        "{} features, container {}px, {} fully visible, bound {}",
        showcase.items().len(),
        container_width,
        report.visible_items,
        report.bound
    );
    println!("Set GLIDE_DEBUG=1 to print every frame.");
    println!();

    let mut session = HeadlessSession {
        runtime,
        resize_events,
        layout,
        showcase,
        time_nanos: 0,
        debug,
    };

    println!("Drag far left, past the last feature:");
    session.drag(container_width * 0.8, -container_width);
    println!("Drag right, past the first feature:");
    session.drag(container_width * 0.2, container_width * 0.6);

    println!("Tap the second card:");
    session.tap(CARD_WIDTH * 1.5 + session.showcase.surface().position());
    for line in session.showcase.viewer().lines() {
        println!("  | {}", line);
    }
    let closed = session.showcase.viewer_input(ViewerInput::KeyDown("Escape"));
    println!(
        "  Escape closed viewer: {}, selection: {:?}",
        closed,
        session.showcase.selected()
    );

    let narrow = container_width / 2.0;
    session.resize(narrow);
    println!(
        "Resized container to {}px: bound {}",
        narrow,
        session.showcase.surface().bound()
    );

    session.showcase.unmount();
    log::info!("showcase unmounted");
    Ok(())
}
