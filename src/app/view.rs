// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the fixed header, the scrollable page (hero slider, product
//! grid, footer), the search overlay with its dismissal backdrop, and the
//! toast layer into a single `Stack`.

use super::Message;
use crate::catalog::Product;
use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::{Manager, Toast};
use crate::ui::styles;
use crate::ui::{header, hero, product_grid, search_overlay};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::Viewport;
use iced::widget::{mouse_area, Column, Container, Scrollable, Space, Stack, Text};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether the page is scrolled past the header elevation threshold.
    pub header_scrolled: bool,
    pub hero: &'a hero::State,
    pub search: &'a search_overlay::State,
    pub grid: &'a product_grid::State,
    pub products: &'a [Product],
    pub notifications: &'a Manager,
}

/// Renders the homepage.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_bar = header::view(header::ViewContext {
        i18n: ctx.i18n,
        scrolled: ctx.header_scrolled,
        search_open: ctx.search.is_open(),
    })
    .map(Message::Header);

    let hero_section = hero::view(ctx.hero, ctx.i18n).map(Message::Hero);
    let grid_section = product_grid::view(ctx.grid, ctx.products, ctx.i18n).map(Message::ProductGrid);

    let footer = Text::new(ctx.i18n.tr("footer-tagline")).size(typography::CAPTION);

    let page_body = Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::LG)
        .align_x(Horizontal::Center)
        .push(hero_section)
        .push(grid_section)
        .push(footer);

    let page = Scrollable::new(page_body)
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| Message::PageScrolled(viewport.absolute_offset().y));

    let base = Column::new()
        .push(header_bar)
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new().push(base);

    if ctx.search.is_open() {
        // Backdrop first, panel above it: presses that the panel's widgets
        // don't consume fall through to the backdrop and dismiss.
        let backdrop = mouse_area(
            Container::new(Space::new().width(Length::Fill).height(Length::Fill))
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop),
        )
        .on_press(Message::SearchOverlay(search_overlay::Message::DismissOutside));
        layers = layers.push(backdrop);

        let panel = Container::new(search_overlay::view(ctx.search, ctx.i18n).map(Message::SearchOverlay))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Center)
            .align_y(Vertical::Top)
            .padding(spacing::XXL);
        layers = layers.push(panel);
    }

    if ctx.notifications.visible_count() > 0 {
        layers = layers.push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification));
    }

    layers.width(Length::Fill).height(Length::Fill).into()
}
