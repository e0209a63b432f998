// SPDX-License-Identifier: MPL-2.0
//! Featured product grid with hover elevation.
//!
//! Each card is wrapped in a `mouse_area` reporting pointer enter/exit by
//! card index. The hovered card renders lifted (larger shadow, shifted
//! upward); all others rest. Hover identity is the card index, never a
//! match against serialized styling.

use crate::catalog::Product;
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{mouse_area, Column, Container, Row, Text};
use iced::{Element, Length, Padding};

/// Number of cards per row.
const COLUMNS: usize = 3;

/// Hover-tracking state for the grid.
#[derive(Debug, Default)]
pub struct State {
    hovered: Option<usize>,
}

/// Messages emitted by the grid's mouse areas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    HoverEntered(usize),
    HoverExited(usize),
}

impl State {
    /// Index of the hovered card, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Handles a grid message.
    ///
    /// Exits only clear the hover if they refer to the card that is
    /// currently hovered; a stale exit from the previous card must not
    /// clobber a newer enter.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::HoverEntered(index) => self.hovered = Some(index),
            Message::HoverExited(index) => {
                if self.hovered == Some(index) {
                    self.hovered = None;
                }
            }
        }
    }
}

/// Renders the heading and the card grid.
pub fn view<'a>(state: &State, products: &'a [Product], i18n: &'a I18n) -> Element<'a, Message> {
    let heading = Text::new(i18n.tr("catalog-heading")).size(typography::TITLE_MD);

    if products.is_empty() {
        return Column::new()
            .spacing(spacing::LG)
            .align_x(Horizontal::Center)
            .push(heading)
            .push(Text::new(i18n.tr("catalog-empty")).size(typography::BODY))
            .into();
    }

    let mut grid = Column::new().spacing(spacing::LG);
    for (row_index, chunk) in products.chunks(COLUMNS).enumerate() {
        let mut row = Row::new().spacing(spacing::LG);
        for (col_index, product) in chunk.iter().enumerate() {
            let index = row_index * COLUMNS + col_index;
            row = row.push(card(product, index, state.hovered == Some(index)));
        }
        grid = grid.push(row);
    }

    Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(grid)
        .into()
}

/// A single product card. The lift is expressed as asymmetric vertical
/// padding inside a fixed-height slot, so hovering shifts the card up
/// without reflowing its neighbors.
fn card(product: &Product, index: usize, hovered: bool) -> Element<'_, Message> {
    let body = Column::new()
        .spacing(spacing::XS)
        .push(Text::new(product.name).size(typography::TITLE_SM))
        .push(Text::new(product.tagline).size(typography::BODY))
        .push(
            Text::new(product.price_text())
                .size(typography::CAPTION)
                .color(palette::GOLD_600),
        );

    let surface = Container::new(body)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .padding(spacing::MD)
        .style(styles::container::card(hovered));

    let lift = if hovered { sizing::CARD_LIFT } else { 0.0 };
    let slot = Container::new(surface).padding(Padding {
        top: sizing::CARD_LIFT - lift,
        bottom: lift,
        left: 0.0,
        right: 0.0,
    });

    mouse_area(slot)
        .on_enter(Message::HoverEntered(index))
        .on_exit(Message::HoverExited(index))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn enter_sets_hovered_index() {
        let mut state = State::default();
        state.update(Message::HoverEntered(3));
        assert_eq!(state.hovered(), Some(3));
    }

    #[test]
    fn exit_clears_matching_hover() {
        let mut state = State::default();
        state.update(Message::HoverEntered(3));
        state.update(Message::HoverExited(3));
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn stale_exit_does_not_clobber_newer_enter() {
        let mut state = State::default();
        state.update(Message::HoverEntered(0));
        // Pointer slides to card 1; the enter can arrive before card 0's exit.
        state.update(Message::HoverEntered(1));
        state.update(Message::HoverExited(0));
        assert_eq!(state.hovered(), Some(1));
    }

    #[test]
    fn view_renders_grid() {
        let i18n = I18n::default();
        let state = State::default();
        let products = catalog::featured_products();
        let _element = view(&state, &products, &i18n);
    }

    #[test]
    fn view_renders_empty_catalog() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = view(&state, &[], &i18n);
    }
}
