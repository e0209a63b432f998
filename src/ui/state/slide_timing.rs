// SPDX-License-Identifier: MPL-2.0
//! Slide interval domain type for the hero slider.
//!
//! This newtype enforces validity at the type level, ensuring the value
//! is always within the supported range (1–30 seconds).

use crate::config::{DEFAULT_SLIDE_INTERVAL_MS, MAX_SLIDE_INTERVAL_MS, MIN_SLIDE_INTERVAL_MS};

/// Delay between automatic hero slide advances, in milliseconds.
///
/// # Example
///
/// ```
/// use iced_storefront::ui::state::SlideInterval;
///
/// let interval = SlideInterval::new(5000);
/// assert_eq!(interval.millis(), 5000);
///
/// // Values outside range are clamped
/// let too_low = SlideInterval::new(10);
/// assert_eq!(too_low.millis(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideInterval(u64);

impl SlideInterval {
    /// Creates a new slide interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_SLIDE_INTERVAL_MS, MAX_SLIDE_INTERVAL_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> std::time::Duration {
        std::time::Duration::from_millis(self.0)
    }
}

impl Default for SlideInterval {
    fn default() -> Self {
        Self(DEFAULT_SLIDE_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(SlideInterval::new(0).millis(), MIN_SLIDE_INTERVAL_MS);
        assert_eq!(
            SlideInterval::new(10_000_000).millis(),
            MAX_SLIDE_INTERVAL_MS
        );
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(SlideInterval::new(1000).millis(), 1000);
        assert_eq!(SlideInterval::new(5000).millis(), 5000);
        assert_eq!(SlideInterval::new(30_000).millis(), 30_000);
    }

    #[test]
    fn default_matches_config_constant() {
        assert_eq!(SlideInterval::default().millis(), DEFAULT_SLIDE_INTERVAL_MS);
    }

    #[test]
    fn as_duration_converts_correctly() {
        let interval = SlideInterval::new(5000);
        assert_eq!(
            interval.as_duration(),
            std::time::Duration::from_millis(5000)
        );
    }
}
