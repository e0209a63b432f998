// SPDX-License-Identifier: MPL-2.0
//! `iced_storefront` renders a premium storefront homepage as a desktop
//! application built with the Iced GUI framework.
//!
//! The homepage combines a scroll-aware header, an auto-advancing hero
//! slider with dot navigation, a search overlay with outside-click
//! dismissal, and a product grid with hover elevation. All behavior is
//! driven by the Elm-style update loop plus a single periodic tick.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
