// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application.

// ==========================================================================
// Hero Slider Defaults
// ==========================================================================

/// Default delay between automatic slide advances (in milliseconds).
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 5000;

/// Minimum allowed slide interval (in milliseconds).
pub const MIN_SLIDE_INTERVAL_MS: u64 = 1000;

/// Maximum allowed slide interval (in milliseconds).
pub const MAX_SLIDE_INTERVAL_MS: u64 = 30_000;

/// Whether the hero slider advances automatically by default.
pub const DEFAULT_AUTO_ADVANCE: bool = true;

// ==========================================================================
// Header Defaults
// ==========================================================================

/// Vertical scroll offset (in pixels) past which the header switches to
/// its elevated "scrolled" style. The comparison is strict: at exactly
/// this offset the header keeps its resting style.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f32 = 100.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Period of the shared UI tick that drives slide auto-advance and
/// notification auto-dismiss (in milliseconds).
pub const TICK_PERIOD_MS: u64 = 100;
