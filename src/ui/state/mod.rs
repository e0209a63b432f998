// SPDX-License-Identifier: MPL-2.0
//! Reusable state newtypes shared across UI components.

pub mod scroll;
pub mod slide_timing;

pub use scroll::ScrollOffset;
pub use slide_timing::SlideInterval;
