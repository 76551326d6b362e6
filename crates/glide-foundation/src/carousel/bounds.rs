//! Drag bounds for the carousel strip.
//!
//! The bound is the distance between "first item flush left" and "last item
//! flush right". It is derived from layout on every measurement and never
//! updated incrementally.

use super::config::CarouselConfig;

/// Outcome of one bounds measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoundsReport {
    /// Maximum magnitude of the (negative) drag offset. Always >= 0.
    pub bound: f32,
    /// Width of one item including its gap, as used for the bound.
    pub item_extent: f32,
    /// Items that fit entirely inside the container.
    pub visible_items: usize,
    /// Whether `item_extent` came from the fallback instead of a measurement.
    pub used_fallback_width: bool,
}

/// `max(0, item_width * item_count - container_width + gap_correction)`.
///
/// A container without positive finite width, an empty item sequence or an
/// unusable item width all produce 0, leaving the carousel inert.
pub fn compute_bound(
    container_width: f32,
    item_width: f32,
    item_count: usize,
    gap_correction: f32,
) -> f32 {
    if item_count == 0 || !is_positive(container_width) || !is_positive(item_width) {
        return 0.0;
    }
    let gap_correction = if gap_correction.is_finite() {
        gap_correction
    } else {
        0.0
    };
    let overflow = item_width * item_count as f32 - container_width + gap_correction;
    if overflow.is_finite() {
        overflow.max(0.0)
    } else {
        0.0
    }
}

/// Resolve the item width (falling back when it could not be measured) and
/// compute the bound.
pub fn measure_bounds(
    container_width: f32,
    item_width: Option<f32>,
    item_count: usize,
    config: &CarouselConfig,
) -> BoundsReport {
    let (item_extent, used_fallback_width) = match item_width {
        Some(width) if is_positive(width) => (width, false),
        Some(width) => {
            log::warn!(
                "Carousel: measured item width {} is unusable, falling back to {}",
                width,
                config.effective_fallback_width()
            );
            (config.effective_fallback_width(), true)
        }
        // The first measurement can run before any item is rendered.
        None => (config.effective_fallback_width(), true),
    };

    let bound = compute_bound(
        container_width,
        item_extent,
        item_count,
        config.gap_correction,
    );
    let visible_items = if is_positive(container_width) {
        (container_width / item_extent).floor() as usize
    } else {
        0
    };

    BoundsReport {
        bound,
        item_extent,
        visible_items,
        used_fallback_width,
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn five_items_overflowing_container() {
        // 320 * 5 - 1200 + 16 = 416
        assert_eq!(compute_bound(1200.0, 320.0, 5, 16.0), 416.0);
    }

    #[test]
    fn content_narrower_than_container_has_zero_bound() {
        // 320 * 2 - 1200 + 16 < 0
        assert_eq!(compute_bound(1200.0, 320.0, 2, 16.0), 0.0);
    }

    #[test]
    fn degenerate_inputs_are_inert() {
        assert_eq!(compute_bound(0.0, 320.0, 5, 16.0), 0.0);
        assert_eq!(compute_bound(-10.0, 320.0, 5, 16.0), 0.0);
        assert_eq!(compute_bound(f32::NAN, 320.0, 5, 16.0), 0.0);
        assert_eq!(compute_bound(1200.0, 320.0, 0, 16.0), 0.0);
        assert_eq!(compute_bound(1200.0, 0.0, 5, 16.0), 0.0);
        assert_eq!(compute_bound(1200.0, f32::INFINITY, 5, 16.0), 0.0);
    }

    #[test]
    fn non_finite_gap_correction_is_ignored() {
        assert_eq!(compute_bound(1200.0, 320.0, 5, f32::NAN), 400.0);
    }

    #[test]
    fn recompute_is_idempotent() {
        let first = compute_bound(980.0, 344.0, 5, 16.0);
        let second = compute_bound(980.0, 344.0, 5, 16.0);
        assert_eq!(first, second);
    }

    #[test]
    fn bound_never_decreases_as_items_are_added() {
        for container in [0.0, 300.0, 1200.0, 4000.0] {
            let mut previous = 0.0;
            for count in 0..32 {
                let bound = compute_bound(container, 320.0, count, 16.0);
                assert!(
                    bound >= previous,
                    "bound shrank from {} to {} at {} items in {}px",
                    previous,
                    bound,
                    count,
                    container
                );
                previous = bound;
            }
        }
    }

    #[test]
    fn missing_item_width_uses_fallback() {
        let report = measure_bounds(1200.0, None, 5, &CarouselConfig::default());
        assert!(report.used_fallback_width);
        assert_eq!(report.item_extent, 300.0);
        // 300 * 5 - 1200 + 16 = 316
        assert_eq!(report.bound, 316.0);
        assert_eq!(report.visible_items, 4);
    }

    #[test]
    fn zero_measured_width_uses_fallback() {
        let report = measure_bounds(1200.0, Some(0.0), 5, &CarouselConfig::default());
        assert!(report.used_fallback_width);
        assert_eq!(report.item_extent, 300.0);
    }

    #[test]
    fn measured_width_is_reported() {
        let report = measure_bounds(1200.0, Some(320.0), 5, &CarouselConfig::default());
        assert!(!report.used_fallback_width);
        assert_eq!(report.bound, 416.0);
        assert_eq!(report.visible_items, 3);
    }
}
