//! Robot-style driver for carousel tests.
//!
//! The robot owns a [`TestHost`] and a target exposing a
//! [`CarouselSurface`], and turns high-level actions (press, drag, tap,
//! resize, wait for idle) into pointer events and frames.
//!
//! # Example
//!
//! ```
//! use glide_testing::CarouselRobot;
//!
//! let mut robot = CarouselRobot::launch(1200.0, Some(320.0), 5);
//! robot.drag(600.0, 100.0);
//! robot.wait_for_idle();
//! assert_eq!(robot.position(), -416.0);
//! ```

use glide_foundation::{
    BoundsReport, CarouselConfig, CarouselPhase, CarouselSurface, PointerButton, PointerButtons,
    PointerEvent, PointerEventKind,
};
use glide_ui_graphics::Point;

use crate::testing::{TestHost, TestLayout};

/// Safety net for [`CarouselRobot::wait_for_idle`]: ten seconds at 60 Hz.
pub const MAX_IDLE_FRAMES: usize = 600;

const POINTER_Y: f32 = 40.0;

pub struct CarouselRobot<T = CarouselSurface<TestLayout>>
where
    T: AsRef<CarouselSurface<TestLayout>>,
{
    host: TestHost,
    target: T,
    cursor: Point,
    pressed: bool,
}

impl CarouselRobot<CarouselSurface<TestLayout>> {
    /// Mount a bare carousel of `item_count` items in a headless host.
    pub fn launch(container_width: f32, item_width: Option<f32>, item_count: usize) -> Self {
        Self::launch_with_config(
            container_width,
            item_width,
            item_count,
            CarouselConfig::default(),
        )
    }

    pub fn launch_with_config(
        container_width: f32,
        item_width: Option<f32>,
        item_count: usize,
        config: CarouselConfig,
    ) -> Self {
        let host = TestHost::new(container_width, item_width);
        let surface = CarouselSurface::new(host.layout(), item_count, host.runtime(), config);
        surface.mount(host.resize_events());
        Self::attach(host, surface)
    }
}

impl<T> CarouselRobot<T>
where
    T: AsRef<CarouselSurface<TestLayout>>,
{
    /// Drive an already-mounted target living in `host`.
    pub fn attach(host: TestHost, target: T) -> Self {
        Self {
            host,
            target,
            cursor: Point::ZERO,
            pressed: false,
        }
    }

    pub fn host(&self) -> &TestHost {
        &self.host
    }

    pub fn target(&self) -> &T {
        &self.target
    }

    pub fn surface(&self) -> &CarouselSurface<TestLayout> {
        self.target.as_ref()
    }

    pub fn into_parts(self) -> (TestHost, T) {
        (self.host, self.target)
    }

    pub fn position(&self) -> f32 {
        self.surface().position()
    }

    pub fn bound(&self) -> f32 {
        self.surface().bound()
    }

    pub fn phase(&self) -> CarouselPhase {
        self.surface().phase()
    }

    pub fn press(&mut self, x: f32) {
        self.cursor = Point::new(x, POINTER_Y);
        self.pressed = true;
        self.send(PointerEventKind::Down);
    }

    pub fn move_to(&mut self, x: f32) {
        self.cursor = Point::new(x, POINTER_Y);
        self.send(PointerEventKind::Move);
    }

    pub fn release(&mut self) {
        self.send(PointerEventKind::Up);
        self.pressed = false;
    }

    pub fn cancel(&mut self) {
        self.send(PointerEventKind::Cancel);
        self.pressed = false;
    }

    /// Press at `from`, move to `to` in a few steps and release there.
    pub fn drag(&mut self, from: f32, to: f32) {
        const STEPS: usize = 4;
        self.press(from);
        for step in 1..=STEPS {
            let t = step as f32 / STEPS as f32;
            self.move_to(from + (to - from) * t);
        }
        self.release();
    }

    pub fn tap(&mut self, x: f32) {
        self.press(x);
        self.release();
    }

    /// Resize the container and let the resize listeners run.
    pub fn resize(&mut self, container_width: f32) -> usize {
        self.host.resize(container_width)
    }

    /// Re-read layout without a resize event, as a mount would.
    pub fn remeasure(&self) -> BoundsReport {
        self.surface().remeasure()
    }

    pub fn advance_frame(&mut self) -> usize {
        self.host.advance_frame()
    }

    /// Pump frames until no frame callbacks remain. Returns the frame count.
    pub fn wait_for_idle(&mut self) -> usize {
        let mut frames = 0;
        while self.host.has_pending_frames() {
            if frames == MAX_IDLE_FRAMES {
                log::warn!("Robot: still busy after {} frames", frames);
                break;
            }
            self.host.advance_frame();
            frames += 1;
        }
        frames
    }

    fn send(&self, kind: PointerEventKind) {
        let buttons = if self.pressed {
            PointerButtons::new().with(PointerButton::Primary)
        } else {
            PointerButtons::NONE
        };
        let event = PointerEvent::new(kind, self.cursor).with_buttons(buttons);
        self.surface().handle_pointer_event(&event);
    }
}

#[cfg(test)]
#[path = "tests/robot_tests.rs"]
mod tests;
