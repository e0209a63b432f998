// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::header;
use crate::ui::hero;
use crate::ui::notifications;
use crate::ui::product_grid;
use crate::ui::search_overlay;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Hero(hero::Message),
    SearchOverlay(search_overlay::Message),
    ProductGrid(product_grid::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable reported a new vertical offset (in pixels).
    PageScrolled(f32),
    /// Periodic tick driving slide auto-advance and toast auto-dismiss.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_STOREFRONT_CONFIG_DIR`.
    pub config_dir: Option<String>,
}
