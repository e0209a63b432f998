// SPDX-License-Identifier: MPL-2.0
//! Search overlay layered over the page.
//!
//! The overlay is a pure toggle: the header's search button flips it, and
//! while open a dimmed backdrop underneath the panel catches presses
//! anywhere outside the panel and dismisses it. Clicks inside the panel are
//! consumed by its widgets and never reach the backdrop. Escape dismisses
//! too, routed through the app's event subscription.

use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Horizontal;
use iced::widget::{button, text_input, Column, Container, Row, Text};
use iced::{Element, Length};

/// Search overlay state.
#[derive(Debug, Default)]
pub struct State {
    open: bool,
    query: String,
}

/// Messages emitted by the overlay (and its backdrop).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The overlay should flip between open and closed.
    Toggle,
    /// The query text changed.
    QueryChanged(String),
    /// The search form was submitted.
    Submit,
    /// A press landed outside both the toggle and the panel.
    DismissOutside,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// The user submitted a non-empty query.
    SearchRequested(String),
}

impl State {
    /// Whether the overlay is currently open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Current query text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Flips the overlay open or closed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Closes the overlay. Idempotent.
    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// Handles an overlay message.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::Toggle => {
                self.toggle();
                Event::None
            }
            Message::QueryChanged(query) => {
                self.query = query;
                Event::None
            }
            Message::Submit => {
                let query = std::mem::take(&mut self.query);
                self.open = false;
                if query.trim().is_empty() {
                    Event::None
                } else {
                    Event::SearchRequested(query)
                }
            }
            Message::DismissOutside => {
                self.dismiss();
                Event::None
            }
        }
    }
}

/// Renders the floating search panel. The caller layers this above the
/// backdrop; it is only called while the overlay is open.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let input = text_input(&i18n.tr("search-placeholder"), &state.query)
        .on_input(Message::QueryChanged)
        .on_submit(Message::Submit)
        .size(typography::BODY_LG)
        .padding(spacing::SM);

    let submit = button(Text::new(i18n.tr("search-submit")).size(typography::BODY))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary)
        .on_press(Message::Submit);

    let form = Row::new()
        .spacing(spacing::SM)
        .push(input)
        .push(submit);

    let hint = Text::new(i18n.tr("search-hint")).size(typography::CAPTION);

    let panel = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(form)
        .push(hint);

    Container::new(panel)
        .width(Length::Fixed(sizing::SEARCH_PANEL_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::search_panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_open_state() {
        let mut state = State::default();
        assert!(!state.is_open());

        assert_eq!(state.update(Message::Toggle), Event::None);
        assert!(state.is_open());

        assert_eq!(state.update(Message::Toggle), Event::None);
        assert!(!state.is_open());
    }

    #[test]
    fn outside_press_dismisses_open_overlay() {
        let mut state = State::default();
        state.toggle();
        assert!(state.is_open());

        state.update(Message::DismissOutside);
        assert!(!state.is_open());
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut state = State::default();
        state.dismiss();
        state.dismiss();
        assert!(!state.is_open());
    }

    #[test]
    fn query_changes_are_tracked() {
        let mut state = State::default();
        state.update(Message::QueryChanged("velvet".to_string()));
        assert_eq!(state.query(), "velvet");
    }

    #[test]
    fn submit_emits_query_and_closes() {
        let mut state = State::default();
        state.toggle();
        state.update(Message::QueryChanged("lamp".to_string()));

        let event = state.update(Message::Submit);
        assert_eq!(event, Event::SearchRequested("lamp".to_string()));
        assert!(!state.is_open());
        assert_eq!(state.query(), "");
    }

    #[test]
    fn blank_submit_emits_nothing() {
        let mut state = State::default();
        state.toggle();
        state.update(Message::QueryChanged("   ".to_string()));

        assert_eq!(state.update(Message::Submit), Event::None);
        assert!(!state.is_open());
    }

    #[test]
    fn view_renders() {
        let i18n = I18n::default();
        let mut state = State::default();
        state.toggle();
        let _element = view(&state, &i18n);
    }
}
