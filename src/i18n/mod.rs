// SPDX-License-Identifier: MPL-2.0
//! Internationalization support backed by Fluent.
//!
//! Translations live in `assets/i18n/*.ftl` and are embedded into the
//! binary at compile time. Locale resolution order: CLI flag, config
//! file, OS locale, then `en-US`.

pub mod fluent;

pub use fluent::I18n;
