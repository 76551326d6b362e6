use super::bounds::{measure_bounds, BoundsReport};
use super::config::CarouselConfig;
use super::policy::{apply_elasticity, remove_elasticity, resolve_drag_end};

/// Position state of the strip.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct CarouselState {
    /// Horizontal offset of the strip. 0 = first item flush left.
    pub position: f32,
    /// Maximum magnitude of a leftward offset. Always >= 0.
    pub bound: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CarouselPhase {
    Idle,
    /// The pointer owns the position. `origin` is the raw (pre-elastic)
    /// position at drag start; the live constraint uses the bound captured
    /// then, even if a resize changes the bound mid-drag.
    Dragging { origin: f32, bound_at_start: f32 },
    /// Animating toward a resolved resting position.
    Settling { target: f32 },
}

/// Owns the carousel position and decides where a released drag rests.
///
/// The engine holds no reference to any rendering surface: the host pushes
/// layout in through [`set_bounds`](Self::set_bounds), pointer travel through
/// the drag methods, and elapsed time through [`tick`](Self::tick).
#[derive(Clone, Debug)]
pub struct CarouselEngine {
    config: CarouselConfig,
    state: CarouselState,
    phase: CarouselPhase,
    item_extent: f32,
    item_count: usize,
}

impl CarouselEngine {
    pub fn new(config: CarouselConfig) -> Self {
        Self {
            item_extent: config.effective_fallback_width(),
            config,
            state: CarouselState::default(),
            phase: CarouselPhase::Idle,
            item_count: 0,
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn state(&self) -> CarouselState {
        self.state
    }

    pub fn position(&self) -> f32 {
        self.state.position
    }

    pub fn bound(&self) -> f32 {
        self.state.bound
    }

    pub fn phase(&self) -> CarouselPhase {
        self.phase
    }

    pub fn item_extent(&self) -> f32 {
        self.item_extent
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, CarouselPhase::Dragging { .. })
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, CarouselPhase::Settling { .. })
    }

    /// Recompute the bound from fresh layout measurements.
    ///
    /// Never touches the position. A drag in progress keeps its captured
    /// bound until release; a running settle keeps its target.
    pub fn set_bounds(
        &mut self,
        container_width: f32,
        item_width: Option<f32>,
        item_count: usize,
    ) -> BoundsReport {
        let report = measure_bounds(container_width, item_width, item_count, &self.config);
        log::debug!(
            "Carousel: bound {} (container {}, {} items x {}{}, {} fully visible)",
            report.bound,
            container_width,
            item_count,
            report.item_extent,
            if report.used_fallback_width {
                " fallback"
            } else {
                ""
            },
            report.visible_items
        );
        self.state.bound = report.bound;
        self.item_extent = report.item_extent;
        self.item_count = item_count;
        report
    }

    /// Hand the position to the pointer, interrupting any settle in place.
    pub fn begin_drag(&mut self) {
        if let CarouselPhase::Settling { target } = self.phase {
            log::trace!(
                "Carousel: settle toward {} interrupted at {}",
                target,
                self.state.position
            );
        }
        let elasticity = self.config.effective_elasticity();
        self.phase = CarouselPhase::Dragging {
            origin: remove_elasticity(self.state.position, self.state.bound, elasticity),
            bound_at_start: self.state.bound,
        };
    }

    /// Stop a running settle, leaving the strip where it currently is.
    pub fn interrupt_settle(&mut self) {
        if self.is_settling() {
            self.phase = CarouselPhase::Idle;
        }
    }

    /// Follow the pointer. `offset` is the total horizontal travel since the
    /// drag began. Overflow past either edge is damped by the elasticity.
    pub fn drag_to(&mut self, offset: f32) {
        let CarouselPhase::Dragging {
            origin,
            bound_at_start,
        } = self.phase
        else {
            log::trace!("Carousel: drag_to({offset}) ignored outside a drag");
            return;
        };
        if !offset.is_finite() {
            return;
        }
        self.state.position = apply_elasticity(
            origin + offset,
            bound_at_start,
            self.config.effective_elasticity(),
        );
    }

    /// Release the drag and resolve where the strip comes to rest.
    ///
    /// Returns the resolved position. The engine starts settling when the
    /// strip is not already there.
    pub fn end_drag(&mut self) -> f32 {
        match self.phase {
            CarouselPhase::Dragging { .. } => {}
            CarouselPhase::Settling { target } => return target,
            CarouselPhase::Idle => return self.state.position,
        }

        let released = self.state.position;
        let resolved = resolve_drag_end(released, self.state.bound);
        if self.config.spring.is_at_rest(released, resolved) {
            self.state.position = resolved;
            self.phase = CarouselPhase::Idle;
        } else {
            self.phase = CarouselPhase::Settling { target: resolved };
        }
        log::debug!(
            "Carousel: released at {} (bound {}), resting at {}",
            released,
            self.state.bound,
            resolved
        );
        resolved
    }

    /// Resolve a resting position for wherever the strip is now, as if a drag
    /// had just been released there. A press that interrupts a settle without
    /// turning into a drag uses this to finish the snap-back.
    pub fn resume_settle(&mut self) -> f32 {
        if self.phase == CarouselPhase::Idle {
            self.phase = CarouselPhase::Dragging {
                origin: self.state.position,
                bound_at_start: self.state.bound,
            };
        }
        self.end_drag()
    }

    /// Finish any drag or settle immediately, jumping to the resolved resting
    /// position. Used when the surface goes away and no more frames will run.
    pub fn snap_to_rest(&mut self) -> f32 {
        if self.is_dragging() {
            self.end_drag();
        }
        if let CarouselPhase::Settling { target } = self.phase {
            log::debug!(
                "Carousel: snapped from {} to {}",
                self.state.position,
                target
            );
            self.state.position = target;
            self.phase = CarouselPhase::Idle;
        }
        self.state.position
    }

    /// Advance a running settle by `dt` seconds. Returns whether the engine is
    /// still settling afterwards.
    pub fn tick(&mut self, dt: f32) -> bool {
        let CarouselPhase::Settling { target } = self.phase else {
            return false;
        };
        self.state.position = self.config.spring.settle(self.state.position, target, dt);
        if self.state.position == target {
            log::trace!("Carousel: settled at {}", target);
            self.phase = CarouselPhase::Idle;
            false
        } else {
            true
        }
    }

    /// Index of the item under container-local `x`, if any.
    pub fn item_at(&self, x: f32) -> Option<usize> {
        if self.item_count == 0 || !x.is_finite() {
            return None;
        }
        let content_x = x - self.state.position;
        if content_x < 0.0 {
            return None;
        }
        let index = (content_x / self.item_extent).floor() as usize;
        (index < self.item_count).then_some(index)
    }
}

impl Default for CarouselEngine {
    fn default() -> Self {
        Self::new(CarouselConfig::default())
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
