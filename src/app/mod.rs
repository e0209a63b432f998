// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the homepage sections.
//!
//! The `App` struct wires together the header, hero slider, search overlay,
//! and product grid, and translates messages into state changes. Each
//! behavior degrades independently: an empty slide list or product list
//! disables only its own section.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::catalog::{self, Product};
use crate::config::{self, Config};
use crate::i18n::I18n;
use crate::ui::notifications;
use crate::ui::state::{ScrollOffset, SlideInterval};
use crate::ui::theming::ThemeMode;
use crate::ui::{header, hero, product_grid, search_overlay};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state bridging UI components, localization, and
/// persisted preferences.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    /// Current vertical offset of the page scrollable.
    scroll_offset: ScrollOffset,
    /// Offset past which the header elevates.
    scroll_threshold_px: f32,
    hero: hero::State,
    search: search_overlay::State,
    grid: product_grid::State,
    products: Vec<Product>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_slide", &self.hero.current())
            .field("search_open", &self.search.is_open())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let config = Config::default();
        Self::from_config(I18n::default(), config)
    }
}

impl App {
    /// Initializes application state from CLI flags and the settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir);

        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::from_config(i18n, config);

        if let Some(key) = config_warning {
            app.notifications
                .push(notifications::Notification::warning(key));
        }

        (app, Task::none())
    }

    fn from_config(i18n: I18n, config: Config) -> Self {
        let homepage = &config.homepage;

        let interval = SlideInterval::new(
            homepage
                .slide_interval_ms
                .unwrap_or(config::DEFAULT_SLIDE_INTERVAL_MS),
        );
        let auto_advance = homepage.auto_advance.unwrap_or(config::DEFAULT_AUTO_ADVANCE);
        let scroll_threshold_px = homepage
            .scroll_threshold_px
            .unwrap_or(config::DEFAULT_SCROLL_THRESHOLD_PX);
        let theme_mode = config.general.theme_mode;

        Self {
            i18n,
            config,
            theme_mode,
            scroll_offset: ScrollOffset::default(),
            scroll_threshold_px,
            hero: hero::State::new(
                catalog::showcase_slides(),
                interval.as_duration(),
                auto_advance,
            ),
            search: search_overlay::State::default(),
            grid: product_grid::State::default(),
            products: catalog::featured_products(),
            notifications: notifications::Manager::new(),
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    /// Whether the header should render in its elevated "scrolled" style.
    #[must_use]
    pub fn header_scrolled(&self) -> bool {
        self.scroll_offset.is_past(self.scroll_threshold_px)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Header(msg) => {
                match header::update(msg) {
                    header::Event::ToggleSearch => self.search.toggle(),
                }
                Task::none()
            }
            Message::Hero(msg) => {
                self.hero.update(msg);
                Task::none()
            }
            Message::SearchOverlay(msg) => {
                match self.search.update(msg) {
                    search_overlay::Event::SearchRequested(query) => {
                        self.notifications.push(
                            notifications::Notification::info("notification-search-submitted")
                                .with_arg("query", query),
                        );
                    }
                    search_overlay::Event::None => {}
                }
                Task::none()
            }
            Message::ProductGrid(msg) => {
                self.grid.update(msg);
                Task::none()
            }
            Message::PageScrolled(offset) => {
                self.scroll_offset = ScrollOffset::new(offset);
                Task::none()
            }
            Message::Tick(now) => {
                self.hero.tick(now);
                self.notifications.tick();
                Task::none()
            }
            Message::Notification(msg) => {
                self.notifications.handle_message(&msg);
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                // Best effort: losing preferences must not block shutdown.
                let _ = config::save(&self.config);
                window::close(id)
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            header_scrolled: self.header_scrolled(),
            hero: &self.hero,
            search: &self.search,
            grid: &self.grid,
            products: &self.products,
            notifications: &self.notifications,
        })
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_tick_subscription(
                self.hero.is_auto_advancing(),
                self.notifications.has_notifications(),
            ),
            subscription::create_event_subscription(self.search.is_open()),
        ])
    }
}
