//! Spring settle physics.
//!
//! The settle is a memoryless approach toward a target: every call shrinks the
//! remaining distance by the decay of the spring's slowest mode over `dt`.
//! Damping is never allowed below critical, so the value moves monotonically
//! toward the target and lands on it exactly once within the rest threshold.

/// Lowest stiffness used for the decay rate. Keeps a misconfigured spring
/// converging instead of freezing in place.
const MIN_STIFFNESS: f32 = 1.0;

/// Spring settle configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringSpec {
    /// Damping ratio. Values below 1.0 are treated as critically damped.
    pub damping_ratio: f32,
    /// Stiffness constant (unit mass). Higher values settle faster.
    pub stiffness: f32,
    /// Distance in logical pixels below which the spring snaps onto its target.
    pub rest_threshold: f32,
}

impl SpringSpec {
    /// Critically damped spring with stiffness 300, the snap-back feel of the
    /// feature carousel.
    pub fn default_spring() -> Self {
        Self {
            damping_ratio: 1.0,
            stiffness: 300.0,
            rest_threshold: 0.5,
        }
    }

    /// Create a stiff spring (fast, no bounce).
    pub fn stiff() -> Self {
        Self {
            stiffness: 1500.0,
            ..Self::default_spring()
        }
    }

    pub fn with_stiffness(mut self, stiffness: f32) -> Self {
        self.stiffness = stiffness;
        self
    }

    pub fn with_damping_ratio(mut self, damping_ratio: f32) -> Self {
        self.damping_ratio = damping_ratio;
        self
    }

    pub fn with_rest_threshold(mut self, rest_threshold: f32) -> Self {
        self.rest_threshold = rest_threshold;
        self
    }

    /// Exponential decay rate (1/s) of the spring's slowest mode.
    pub fn decay_rate(&self) -> f32 {
        let omega = self.stiffness.max(MIN_STIFFNESS).sqrt();
        let zeta = if self.damping_ratio.is_finite() {
            self.damping_ratio.max(1.0)
        } else {
            1.0
        };
        // Overdamped springs are dominated by the slow root of the
        // characteristic equation: omega * (zeta - sqrt(zeta^2 - 1)).
        omega * (zeta - (zeta * zeta - 1.0).sqrt())
    }

    /// True when `current` is close enough to `target` to stop animating.
    pub fn is_at_rest(&self, current: f32, target: f32) -> bool {
        (current - target).abs() < self.rest_threshold.max(0.0)
    }

    /// Advance `current` toward `target` by `dt` seconds.
    ///
    /// The result always lies between `current` and `target`; once inside the
    /// rest threshold it is exactly `target`. A non-positive or non-finite
    /// `dt` leaves `current` untouched.
    pub fn settle(&self, current: f32, target: f32, dt: f32) -> f32 {
        if !dt.is_finite() || dt <= 0.0 {
            return current;
        }
        if !current.is_finite() || self.is_at_rest(current, target) {
            return target;
        }
        let remaining = (current - target) * (-self.decay_rate() * dt).exp();
        if self.is_at_rest(target + remaining, target) {
            target
        } else {
            target + remaining
        }
    }
}

impl Default for SpringSpec {
    fn default() -> Self {
        Self::default_spring()
    }
}

/// Settle with the default spring. See [`SpringSpec::settle`].
pub fn settle(current: f32, target: f32, dt: f32) -> f32 {
    SpringSpec::default().settle(current, target, dt)
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
