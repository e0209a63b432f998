// SPDX-License-Identifier: MPL-2.0
//! Fixed header bar above the scrollable page.
//!
//! The header carries the brand, inert nav labels, and the search toggle.
//! It renders in one of two styles selected by the page scroll position:
//! resting (flush) or scrolled (elevated). Anchor-style nav scrolling was
//! removed upstream on purpose, so nav labels do not navigate.

use crate::i18n::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, Container, Row, Space, Text};
use iced::{Element, Length};

/// Contextual data needed to render the header.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Whether the page is scrolled past the elevation threshold.
    pub scrolled: bool,
    /// Whether the search overlay is currently open.
    pub search_open: bool,
}

/// Messages emitted by the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    ToggleSearch,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ToggleSearch,
}

/// Process a header message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::ToggleSearch => Event::ToggleSearch,
    }
}

/// Render the header bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr("header-brand")).size(typography::TITLE_MD);

    let nav = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(Text::new(ctx.i18n.tr("header-nav-home")).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("header-nav-catalog")).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("header-nav-collections")).size(typography::BODY))
        .push(Text::new(ctx.i18n.tr("header-nav-contact")).size(typography::BODY));

    let search_label = Text::new(ctx.i18n.tr("header-search-button")).size(typography::BODY);
    let search_button = button(search_label)
        .padding([spacing::XXS, spacing::SM])
        .style(if ctx.search_open {
            styles::button::primary
        } else {
            styles::button::nav
        })
        .on_press(Message::ToggleSearch);

    let row = Row::new()
        .spacing(spacing::XL)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(brand)
        .push(Space::new().width(Length::Fill))
        .push(nav)
        .push(search_button);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::header(ctx.scrolled))
        .into()
}
