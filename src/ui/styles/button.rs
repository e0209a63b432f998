// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action button (search submit). Royal gold on dark text.
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::GOLD_500)),
            text_color: palette::GRAY_900,
            border: Border {
                color: palette::GOLD_600,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::GOLD_400)),
            text_color: palette::GRAY_900,
            border: Border {
                color: palette::GOLD_500,
                width: 1.0,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Flat header button for nav labels and the search toggle. Text-only,
/// picking up the gold accent on hover.
pub fn nav(theme: &Theme, status: button::Status) -> button::Style {
    let base_text = theme.extended_palette().background.base.text;

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: None,
            text_color: palette::GOLD_500,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        _ => button::Style {
            background: None,
            text_color: base_text,
            border: Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

/// Hero slider dot. The active dot is royal gold at full opacity; inactive
/// dots are muted gray at half opacity.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if active {
            palette::GOLD_500
        } else {
            let alpha = match status {
                // Hint at interactivity without promoting to the active style.
                button::Status::Hovered => opacity::OVERLAY_STRONG,
                _ => opacity::DOT_MUTED,
            };
            Color {
                a: alpha,
                ..palette::GRAY_200
            }
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: WHITE,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: shadow::NONE,
            snap: true,
        }
    }
}

/// Toast dismiss button. Transparent with a subtle hover surface.
pub fn dismiss(theme: &Theme, status: button::Status) -> button::Style {
    let palette = theme.extended_palette();

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(palette.background.strong.color.into()),
            text_color: palette.background.base.text,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        },
        _ => button::Style {
            background: None,
            text_color: palette.background.base.text,
            border: Border::default(),
            ..Default::default()
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_gold() {
        let theme = Theme::Dark;
        let style = primary(&theme, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::GOLD_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn active_dot_is_gold_at_full_opacity() {
        let theme = Theme::Light;
        let style = dot(true)(&theme, button::Status::Active);

        match style.background {
            Some(Background::Color(bg)) => {
                assert_eq!(bg, palette::GOLD_500);
                assert_eq!(bg.a, 1.0);
            }
            _ => panic!("Expected background color"),
        }
    }

    #[test]
    fn inactive_dot_is_muted() {
        let theme = Theme::Light;
        let style = dot(false)(&theme, button::Status::Active);

        match style.background {
            Some(Background::Color(bg)) => assert_eq!(bg.a, opacity::DOT_MUTED),
            _ => panic!("Expected background color"),
        }
    }
}
