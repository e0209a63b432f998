// SPDX-License-Identifier: MPL-2.0
//! Hero slider: one active slide out of N, advancing automatically on a
//! fixed interval, with a dot row for manual navigation.
//!
//! Automatic advancement is tick-driven: the app's shared 100 ms tick calls
//! [`State::tick`], which advances once a full interval has elapsed since
//! the `last_advance` watermark. Manual navigation resets the watermark, so
//! the next automatic advance happens no sooner than one interval after the
//! click. This keeps a single time source driving the slider.

use crate::catalog::{Backdrop, HeroSlide};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{Color, Element, Length};
use std::time::Instant;

/// Messages emitted by the slider's dot row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A navigation dot was pressed.
    JumpTo(usize),
}

/// Slider state: slide content plus the advance watermark.
#[derive(Debug)]
pub struct State {
    slides: Vec<HeroSlide>,
    current: usize,
    last_advance: Instant,
    interval: std::time::Duration,
    auto_advance: bool,
}

impl State {
    /// Creates a slider over `slides`, starting at index 0.
    #[must_use]
    pub fn new(slides: Vec<HeroSlide>, interval: std::time::Duration, auto_advance: bool) -> Self {
        Self {
            slides,
            current: 0,
            last_advance: Instant::now(),
            interval,
            auto_advance,
        }
    }

    /// Index of the active slide.
    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Whether there are no slides at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Whether the tick subscription is needed. A slider with fewer than
    /// two slides has nowhere to advance to and stays inert.
    #[must_use]
    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance && self.slides.len() >= 2
    }

    /// Advances to the next slide, wrapping at the end, and resets the
    /// watermark. No-op with fewer than two slides.
    pub fn advance(&mut self) {
        if self.slides.len() < 2 {
            return;
        }
        self.current = (self.current + 1) % self.slides.len();
        self.last_advance = Instant::now();
    }

    /// Jumps to slide `index` and restarts the automatic cycle from now.
    /// Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index >= self.slides.len() {
            return;
        }
        self.current = index;
        self.last_advance = Instant::now();
    }

    /// Processes a periodic tick: advances once a full interval has elapsed
    /// since the last advance or manual jump. Returns whether it advanced.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_auto_advancing() {
            return false;
        }
        if now.saturating_duration_since(self.last_advance) < self.interval {
            return false;
        }
        self.current = (self.current + 1) % self.slides.len();
        self.last_advance = now;
        true
    }

    /// Handles a slider message.
    pub fn update(&mut self, message: Message) {
        match message {
            Message::JumpTo(index) => self.jump_to(index),
        }
    }
}

fn backdrop_color(backdrop: Backdrop) -> Color {
    match backdrop {
        Backdrop::Midnight => palette::MIDNIGHT,
        Backdrop::Burgundy => palette::BURGUNDY,
        Backdrop::Forest => palette::FOREST,
    }
}

/// Renders the hero panel and dot row for the current state.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    let Some(slide) = state.slides.get(state.current) else {
        // No slides: render a quiet placeholder and keep the rest of the
        // page functional.
        return Container::new(Text::new(i18n.tr("hero-empty")).size(typography::BODY_LG))
            .width(Length::Fill)
            .height(Length::Fixed(sizing::HERO_HEIGHT))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Center)
            .style(styles::container::hero(palette::GRAY_700))
            .into();
    };

    let headline = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(i18n.tr(slide.title_key)).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr(slide.tagline_key)).size(typography::BODY_LG));

    let panel = Container::new(headline)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::hero(backdrop_color(slide.backdrop)));

    let mut dots = Row::new().spacing(spacing::SM);
    for index in 0..state.slides.len() {
        let dot = button(
            Space::new()
                .width(Length::Fixed(sizing::HERO_DOT))
                .height(Length::Fixed(sizing::HERO_DOT)),
        )
        .padding(0)
        .style(styles::button::dot(index == state.current))
        .on_press(Message::JumpTo(index));
        dots = dots.push(dot);
    }

    Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(panel)
        .push(dots)
        .into()
}
