// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` handles queuing, display timing, and dismissal. It limits
//! the number of visible toasts and expires them from the shared UI tick.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of notifications visible at once.
const MAX_VISIBLE: usize = 3;

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
}

/// Manages the notification queue and visible notifications.
#[derive(Debug, Default)]
pub struct Manager {
    /// Currently visible notifications (newest first).
    visible: VecDeque<Notification>,
    /// Queued notifications waiting to be displayed.
    queue: VecDeque<Notification>,
}

impl Manager {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new notification to be displayed.
    ///
    /// If fewer than `MAX_VISIBLE` notifications are showing, it's displayed
    /// immediately. Otherwise, it's queued and shown when space frees up.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Dismisses a notification by its ID.
    ///
    /// Returns `true` if the notification was found and removed.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote_from_queue();
            return true;
        }

        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }

        false
    }

    /// Processes a tick event, dismissing any notifications that expired.
    pub fn tick(&mut self) {
        let to_dismiss: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.should_auto_dismiss())
            .map(Notification::id)
            .collect();

        for id in to_dismiss {
            self.dismiss(id);
        }
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    /// Returns the number of visible notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether there are any notifications (visible or queued).
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    fn promote_from_queue(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_shows_up_to_max_visible() {
        let mut manager = Manager::new();
        for _ in 0..5 {
            manager.push(Notification::info("key"));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismiss_promotes_from_queue() {
        let mut manager = Manager::new();
        for _ in 0..4 {
            manager.push(Notification::info("key"));
        }

        let first_id = manager.visible().next().unwrap().id();
        assert!(manager.dismiss(first_id));

        // The queued notification takes the freed slot.
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
    }

    #[test]
    fn dismiss_unknown_id_returns_false() {
        let mut manager = Manager::new();
        assert!(!manager.dismiss(NotificationId::new()));
    }

    #[test]
    fn tick_keeps_fresh_notifications() {
        let mut manager = Manager::new();
        manager.push(Notification::info("key"));
        manager.tick();
        assert_eq!(manager.visible_count(), 1);
    }

    #[test]
    fn handle_message_dismisses() {
        let mut manager = Manager::new();
        manager.push(Notification::warning("key"));
        let id = manager.visible().next().unwrap().id();

        manager.handle_message(&Message::Dismiss(id));
        assert!(!manager.has_notifications());
    }
}
