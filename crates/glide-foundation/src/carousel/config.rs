use glide_animation::SpringSpec;

/// Extra travel added to the bound so the last item's trailing edge lines up
/// flush with the container at full drag.
pub const GAP_CORRECTION: f32 = 16.0;

/// Item width used until an item has been rendered and measured.
pub const DEFAULT_ITEM_WIDTH: f32 = 300.0;

/// Fraction of pointer travel applied past either edge while dragging.
pub const DEFAULT_DRAG_ELASTICITY: f32 = 0.5;

/// Tuning values for a carousel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub gap_correction: f32,
    pub fallback_item_width: f32,
    /// 0.0 pins the strip to its bounds while dragging, 1.0 lets it follow
    /// the pointer freely. Values outside that range are clamped.
    pub drag_elasticity: f32,
    /// Spring used to settle a released drag.
    pub spring: SpringSpec,
}

impl CarouselConfig {
    pub fn with_gap_correction(mut self, gap_correction: f32) -> Self {
        self.gap_correction = gap_correction;
        self
    }

    pub fn with_fallback_item_width(mut self, width: f32) -> Self {
        self.fallback_item_width = width;
        self
    }

    pub fn with_drag_elasticity(mut self, elasticity: f32) -> Self {
        self.drag_elasticity = elasticity;
        self
    }

    pub fn with_spring(mut self, spring: SpringSpec) -> Self {
        self.spring = spring;
        self
    }

    pub(crate) fn effective_elasticity(&self) -> f32 {
        if self.drag_elasticity.is_nan() {
            DEFAULT_DRAG_ELASTICITY
        } else {
            self.drag_elasticity.clamp(0.0, 1.0)
        }
    }

    pub(crate) fn effective_fallback_width(&self) -> f32 {
        if self.fallback_item_width.is_finite() && self.fallback_item_width > 0.0 {
            self.fallback_item_width
        } else {
            DEFAULT_ITEM_WIDTH
        }
    }
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            gap_correction: GAP_CORRECTION,
            fallback_item_width: DEFAULT_ITEM_WIDTH,
            drag_elasticity: DEFAULT_DRAG_ELASTICITY,
            spring: SpringSpec::default(),
        }
    }
}
