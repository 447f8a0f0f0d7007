// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` handles display and dismissal. There is deliberately no
//! cap on concurrent toasts and no dedup of identical messages; every
//! push shows up.

use super::toast::{Severity, Toast, ToastId};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Dismiss a specific toast by ID.
    Dismiss(ToastId),
    /// Tick for checking auto-dismiss timers.
    Tick,
}

/// Owns the currently visible toasts (newest first).
#[derive(Debug, Default)]
pub struct Manager {
    visible: Vec<Toast>,
}

impl Manager {
    /// Creates a new empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pushes a new toast for display.
    ///
    /// Warning and danger toasts also land in the log so swallowed
    /// failures stay diagnosable.
    pub fn push(&mut self, toast: Toast) {
        match toast.severity() {
            Severity::Warning => log::warn!("toast: {}", toast.message_key()),
            Severity::Danger => log::error!("toast: {}", toast.message_key()),
            Severity::Info | Severity::Success => {}
        }

        self.visible.insert(0, toast);
    }

    /// Dismisses a toast by its ID.
    ///
    /// Returns `true` if the toast was found and removed.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.visible.len();
        self.visible.retain(|toast| toast.id() != id);
        self.visible.len() < before
    }

    /// Processes a tick event, dismissing every expired toast.
    ///
    /// Should be called periodically (e.g., every 100-500ms) while any
    /// toast is visible.
    pub fn tick(&mut self) {
        self.visible.retain(|toast| !toast.is_expired());
    }

    /// Handles a toast message.
    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
            Message::Tick => {
                self.tick();
            }
        }
    }

    /// Returns the currently visible toasts.
    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.visible.iter()
    }

    /// Returns the number of visible toasts.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether any toast is on screen.
    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Clears all toasts.
    pub fn clear(&mut self) {
        self.visible.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::new();
        assert_eq!(manager.visible_count(), 0);
        assert!(!manager.has_toasts());
    }

    #[test]
    fn push_shows_the_toast_immediately() {
        let mut manager = Manager::new();
        manager.push(Toast::success("test"));

        assert_eq!(manager.visible_count(), 1);
        assert!(manager.has_toasts());
    }

    #[test]
    fn pushes_are_not_capped_or_deduplicated() {
        let mut manager = Manager::new();
        for _ in 0..10 {
            manager.push(Toast::info("same-key"));
        }
        assert_eq!(manager.visible_count(), 10);
    }

    #[test]
    fn newest_toast_is_listed_first() {
        let mut manager = Manager::new();
        manager.push(Toast::info("first"));
        manager.push(Toast::info("second"));

        let keys: Vec<_> = manager.visible().map(Toast::message_key).collect();
        assert_eq!(keys, ["second", "first"]);
    }

    #[test]
    fn dismiss_removes_by_id() {
        let mut manager = Manager::new();
        let toast = Toast::success("test");
        let id = toast.id();

        manager.push(toast);
        assert!(manager.dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn dismiss_nonexistent_returns_false() {
        let mut manager = Manager::new();
        let fake_id = Toast::success("temp").id();
        assert!(!manager.dismiss(fake_id));
    }

    #[test]
    fn tick_dismisses_expired_toasts_only() {
        let mut manager = Manager::new();
        manager.push(Toast::danger("gone").with_duration(Duration::ZERO));
        manager.push(Toast::info("stays"));

        manager.tick();

        assert_eq!(manager.visible_count(), 1);
        assert_eq!(
            manager.visible().next().map(Toast::message_key),
            Some("stays")
        );
    }

    #[test]
    fn danger_toast_with_duration_auto_dismisses() {
        // The original layer auto-removed every toast after its duration
        // regardless of severity; dangers are no exception.
        let mut manager = Manager::new();
        manager.push(Toast::danger("x").with_duration(Duration::ZERO));

        manager.handle_message(&Message::Tick);
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let toast = Toast::success("test");
        let id = toast.id();
        manager.push(toast);

        manager.handle_message(&Message::Dismiss(id));
        assert_eq!(manager.visible_count(), 0);
    }

    #[test]
    fn clear_removes_all() {
        let mut manager = Manager::new();
        for i in 0..5 {
            manager.push(Toast::success(format!("test-{i}")));
        }

        manager.clear();
        assert_eq!(manager.visible_count(), 0);
    }
}
