// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, text, Column, Container, Row, Text};
use iced::{Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent_color = notification.severity().color();

        let message_text = if notification.message_args().is_empty() {
            i18n.tr(notification.message_key())
        } else {
            let args: Vec<(&str, &str)> = notification
                .message_args()
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str()))
                .collect();
            i18n.tr_with_args(notification.message_key(), &args)
        };

        let message_widget =
            Text::new(message_text)
                .size(typography::BODY)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.palette().text),
                });

        let notification_id = notification.id();
        let dismiss_button = button(Text::new("×").size(typography::BODY_LG))
            .on_press(Message::Dismiss(notification_id))
            .padding(spacing::XXS)
            .style(styles::button::dismiss);

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::toast(accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications, stacked
    /// in the bottom-right corner.
    pub fn view_overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
        let mut column = Column::new().spacing(spacing::SM);
        for notification in manager.visible() {
            column = column.push(Self::view(notification, i18n));
        }

        Container::new(column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(Horizontal::Right)
            .align_y(Vertical::Bottom)
            .padding(spacing::LG)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_view_renders() {
        let i18n = I18n::default();
        let notification = Notification::warning("notification-config-load-error");
        let _element = Toast::view(&notification, &i18n);
    }

    #[test]
    fn overlay_renders_all_visible() {
        let i18n = I18n::default();
        let mut manager = Manager::new();
        manager.push(Notification::info("notification-search-submitted").with_arg("query", "x"));
        manager.push(Notification::warning("notification-config-load-error"));
        let _element = Toast::view_overlay(&manager, &i18n);
    }
}
