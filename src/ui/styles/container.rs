// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Header bar surface. The resting header sits flush with the page; once
/// the page is scrolled past the threshold it elevates with an opaque
/// surface, a drop shadow, and a gold keyline.
pub fn header(scrolled: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;

        if scrolled {
            container::Style {
                background: Some(Background::Color(Color::from_rgba(
                    base.r,
                    base.g,
                    base.b,
                    opacity::SURFACE,
                ))),
                border: Border {
                    color: palette::GOLD_500,
                    width: 1.0,
                    radius: radius::NONE.into(),
                },
                shadow: shadow::SM,
                ..Default::default()
            }
        } else {
            container::Style {
                background: Some(Background::Color(base)),
                ..Default::default()
            }
        }
    }
}

/// Hero slide panel with its backdrop color.
pub fn hero(backdrop: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(backdrop)),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Product card surface. Elevation follows hover state: resting cards use
/// the medium shadow, the hovered card the large one.
pub fn card(elevated: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let surface = theme.extended_palette().background.weak.color;

        container::Style {
            background: Some(Background::Color(surface)),
            border: Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            shadow: if elevated { shadow::LG } else { shadow::MD },
            ..Default::default()
        }
    }
}

/// Search overlay panel, floating above the page.
pub fn search_panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            color: palette::GOLD_500,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Dimmed backdrop behind the search overlay; the click target for
/// outside-click dismissal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Toast card with a severity-colored accent border.
pub fn toast(accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.base.color;

        container::Style {
            background: Some(Background::Color(Color::from_rgba(
                base.r,
                base.g,
                base.b,
                opacity::SURFACE,
            ))),
            border: Border {
                color: accent,
                width: 2.0,
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_header_gains_shadow() {
        let theme = Theme::Light;
        let resting = header(false)(&theme);
        let scrolled = header(true)(&theme);

        assert_eq!(resting.shadow.blur_radius, 0.0);
        assert!(scrolled.shadow.blur_radius > 0.0);
    }

    #[test]
    fn header_style_is_idempotent() {
        let theme = Theme::Light;
        let first = header(true)(&theme);
        let second = header(true)(&theme);
        assert_eq!(first.shadow.blur_radius, second.shadow.blur_radius);
        assert_eq!(first.background, second.background);
    }

    #[test]
    fn hovered_card_elevates() {
        let theme = Theme::Light;
        let resting = card(false)(&theme);
        let hovered = card(true)(&theme);

        assert!(hovered.shadow.blur_radius > resting.shadow.blur_radius);
    }
}
