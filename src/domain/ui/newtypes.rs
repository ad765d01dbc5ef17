// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Progress Bounds
// =============================================================================

/// Progress percentage bounds.
pub mod progress_bounds {
    /// Minimum stored progress.
    pub const MIN: f32 = 0.0;
    /// Maximum stored progress.
    pub const MAX: f32 = 100.0;
    /// Narrowest width the bar is drawn at, so an early bar stays visible.
    pub const VISIBLE_FLOOR: f32 = 30.0;
}

// =============================================================================
// ProgressPercent
// =============================================================================

/// Progress percentage, guaranteed to be within 0%–100%.
///
/// The stored value is the clamped input; the drawn width is floored
/// separately by [`ProgressPercent::bar_width`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProgressPercent(f32);

impl ProgressPercent {
    /// Creates a new progress value, clamping to the valid range.
    ///
    /// `NaN` is treated as no progress.
    #[must_use]
    pub fn new(percent: f32) -> Self {
        if percent.is_nan() {
            return Self(progress_bounds::MIN);
        }
        Self(percent.clamp(progress_bounds::MIN, progress_bounds::MAX))
    }

    /// Returns the raw percentage value.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns the width to draw the bar at, in percent.
    #[must_use]
    pub fn bar_width(self) -> f32 {
        self.0.max(progress_bounds::VISIBLE_FLOOR)
    }
}

// =============================================================================
// Lifetime Bounds
// =============================================================================

/// Configured lifetime bounds (100 ms to 10 minutes).
pub mod lifetime_bounds {
    /// Shortest lifetime in milliseconds.
    pub const MIN_MS: u64 = 100;
    /// Longest lifetime in milliseconds.
    pub const MAX_MS: u64 = 600_000;
}

// =============================================================================
// Lifetime
// =============================================================================

/// How long an auto-expiring overlay stays on screen.
///
/// Values coming from configuration files pass through this type so a typo
/// cannot produce an instantly vanishing or everlasting toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Lifetime(Duration);

impl Lifetime {
    /// Creates a lifetime from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis.clamp(
            lifetime_bounds::MIN_MS,
            lifetime_bounds::MAX_MS,
        )))
    }

    /// Creates a lifetime from a duration, clamping to the valid range.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        let millis = u64::try_from(duration.as_millis()).unwrap_or(u64::MAX);
        Self::from_millis(millis)
    }

    /// Returns the lifetime as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn progress_clamps_above_range() {
        assert_abs_diff_eq!(ProgressPercent::new(150.0).value(), 100.0);
    }

    #[test]
    fn progress_clamps_below_range() {
        assert_abs_diff_eq!(ProgressPercent::new(-20.0).value(), 0.0);
    }

    #[test]
    fn progress_nan_is_zero() {
        assert_abs_diff_eq!(ProgressPercent::new(f32::NAN).value(), 0.0);
    }

    #[test]
    fn bar_width_never_below_floor() {
        for raw in [-50.0, 0.0, 10.0, 29.9, 30.0] {
            assert!(ProgressPercent::new(raw).bar_width() >= progress_bounds::VISIBLE_FLOOR);
        }
        assert_abs_diff_eq!(ProgressPercent::new(64.0).bar_width(), 64.0);
    }

    #[test]
    fn lifetime_clamps_to_bounds() {
        assert_eq!(
            Lifetime::from_millis(0).as_duration(),
            Duration::from_millis(lifetime_bounds::MIN_MS)
        );
        assert_eq!(
            Lifetime::new(Duration::from_secs(86_400)).as_duration(),
            Duration::from_millis(lifetime_bounds::MAX_MS)
        );
    }

    #[test]
    fn lifetime_accepts_valid_values() {
        assert_eq!(
            Lifetime::from_millis(2400).as_duration(),
            Duration::from_millis(2400)
        );
    }
}
