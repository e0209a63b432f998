// SPDX-License-Identifier: MPL-2.0
//! Vertical page scroll offset domain type.

/// Vertical scroll offset of the homepage, in pixels.
///
/// Offsets reported during overscroll bounce can be negative; they are
/// clamped to zero so threshold checks stay meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollOffset(f32);

impl ScrollOffset {
    /// Creates a new scroll offset, clamping negatives to zero.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self(value.max(0.0))
    }

    /// Returns the offset in pixels.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Whether the offset has passed `threshold`.
    ///
    /// Strict comparison: an offset exactly at the threshold has not
    /// passed it, so the header keeps its resting style there.
    #[must_use]
    pub fn is_past(self, threshold: f32) -> bool {
        self.0 > threshold
    }
}
