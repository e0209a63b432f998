// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Page Sections
//!
//! - [`header`] - Scroll-aware header bar with the search toggle
//! - [`hero`] - Auto-advancing hero slider with dot navigation
//! - [`product_grid`] - Featured product cards with hover elevation
//! - [`search_overlay`] - Search overlay with outside-click dismissal
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Reusable state newtypes (scroll offset, slide interval)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod design_tokens;
pub mod header;
pub mod hero;
pub mod notifications;
pub mod product_grid;
pub mod search_overlay;
pub mod state;
pub mod styles;
pub mod theming;
