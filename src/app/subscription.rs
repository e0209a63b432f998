// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources: a periodic tick for time-driven behavior, and native
//! window/keyboard events for close handling and Escape dismissal.

use super::Message;
use crate::config::TICK_PERIOD_MS;
use crate::ui::search_overlay;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Creates the periodic tick subscription for slide auto-advance and
/// notification auto-dismiss.
///
/// The tick only runs while something consumes it; an idle homepage (slider
/// disabled or single-slide, no toasts) schedules nothing.
pub fn create_tick_subscription(
    slider_active: bool,
    has_notifications: bool,
) -> Subscription<Message> {
    if slider_active || has_notifications {
        time::every(Duration::from_millis(TICK_PERIOD_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Creates the native event subscription.
///
/// Window close requests are always routed so config can be persisted
/// before exit. While the search overlay is open, Escape dismisses it
/// (pointer-based outside-click dismissal is handled by the backdrop in
/// the view layer, not here).
pub fn create_event_subscription(search_open: bool) -> Subscription<Message> {
    if search_open {
        event::listen_with(|event, _status, window_id| {
            if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
                return Some(Message::WindowCloseRequested(window_id));
            }

            if let event::Event::Keyboard(iced::keyboard::Event::KeyPressed {
                key: iced::keyboard::Key::Named(iced::keyboard::key::Named::Escape),
                ..
            }) = &event
            {
                return Some(Message::SearchOverlay(
                    search_overlay::Message::DismissOutside,
                ));
            }

            None
        })
    } else {
        event::listen_with(|event, _status, window_id| {
            if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
                return Some(Message::WindowCloseRequested(window_id));
            }

            None
        })
    }
}
