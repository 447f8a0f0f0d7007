// SPDX-License-Identifier: MPL-2.0
//! Notification inbox: the polled list plus click-to-mark-read.
//!
//! A click on an unread row marks it read locally right away and asks the
//! parent to fire the backend call; rows already read swallow the click.

use crate::api::{NotificationItem, NotificationKind};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, radius, spacing, typography};
use crate::ui::styles;
use crate::util;
use iced::alignment;
use iced::widget::{button, container, text, Column, Container, Row, Scrollable, Text};
use iced::{Element, Length, Theme};

/// Feed state.
#[derive(Debug, Clone, Default)]
pub struct State {
    items: Vec<NotificationItem>,
}

/// Messages emitted by the feed.
#[derive(Debug, Clone)]
pub enum Message {
    /// A row was clicked; carries the item's opaque id.
    ItemClicked(String),
}

/// Effects the parent application must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Fire the mark-as-read call for this id.
    MarkRead(String),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the feed with a freshly polled list.
    ///
    /// Returns how many item ids are new compared to the previous list,
    /// so the caller can surface an arrival hint.
    pub fn set_items(&mut self, items: Vec<NotificationItem>) -> usize {
        let new_count = items
            .iter()
            .filter(|item| !self.items.iter().any(|known| known.id == item.id))
            .count();
        self.items = items;
        new_count
    }

    /// Handles a feed message.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::ItemClicked(id) => {
                match self.items.iter_mut().find(|item| item.id == id) {
                    Some(item) if !item.is_read => {
                        item.is_read = true;
                        Effect::MarkRead(id)
                    }
                    // Already read (or gone): nothing to tell the server.
                    _ => Effect::None,
                }
            }
        }
    }

    /// Current items, newest first as delivered by the backend.
    #[must_use]
    pub fn items(&self) -> &[NotificationItem] {
        &self.items
    }

    /// Number of unread items, shown as the navbar badge.
    #[must_use]
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|item| !item.is_read).count()
    }
}

/// Renders the notification inbox screen.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    if state.items.is_empty() {
        return Container::new(Text::new(i18n.tr("feed-empty")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let mut list = Column::new().spacing(spacing::XS);
    for item in &state.items {
        list = list.push(row(item, i18n));
    }

    Scrollable::new(Container::new(list).padding(spacing::MD))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn row<'a>(item: &'a NotificationItem, i18n: &'a I18n) -> Element<'a, Message> {
    let dot_color = if item.is_read {
        palette::GRAY_400
    } else {
        palette::PRIMARY_400
    };

    let dot = Container::new(text(""))
        .width(Length::Fixed(8.0))
        .height(Length::Fixed(8.0))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(dot_color)),
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let when = util::format_date(&item.created_at)
        .zip(util::format_time(&item.created_at))
        .map(|(date, time)| format!("{date} \u{00B7} {time}"))
        .unwrap_or_else(|| item.created_at.clone());

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(&item.title).size(typography::BODY))
        .push(Text::new(&item.message).size(typography::BODY_SM))
        .push(
            Text::new(format!("{} \u{00B7} {}", i18n.tr(kind_key(item.kind)), when))
                .size(typography::CAPTION),
        );

    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(dot).padding(spacing::XXS))
        .push(details);

    button(content)
        .on_press(Message::ItemClicked(item.id.clone()))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(styles::button::row)
        .into()
}

fn kind_key(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::EventUpdate => "feed-kind-event-update",
        NotificationKind::Registration => "feed-kind-registration",
        NotificationKind::Certificate => "feed-kind-certificate",
        NotificationKind::General => "feed-kind-general",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, is_read: bool) -> NotificationItem {
        NotificationItem {
            id: id.to_string(),
            title: format!("Title {id}"),
            message: "Body".to_string(),
            kind: NotificationKind::General,
            created_at: "2026-08-01T09:00:00".to_string(),
            is_read,
        }
    }

    #[test]
    fn click_on_unread_marks_locally_and_fires_effect() {
        let mut state = State::new();
        state.set_items(vec![item("1", false)]);

        let effect = state.handle_message(Message::ItemClicked("1".to_string()));

        assert_eq!(effect, Effect::MarkRead("1".to_string()));
        assert!(state.items()[0].is_read);
        assert_eq!(state.unread_count(), 0);
    }

    #[test]
    fn click_on_read_item_is_swallowed() {
        let mut state = State::new();
        state.set_items(vec![item("1", true)]);

        let effect = state.handle_message(Message::ItemClicked("1".to_string()));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn click_on_unknown_id_is_swallowed() {
        let mut state = State::new();
        state.set_items(vec![item("1", false)]);

        let effect = state.handle_message(Message::ItemClicked("9".to_string()));
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn set_items_counts_only_new_ids() {
        let mut state = State::new();
        assert_eq!(state.set_items(vec![item("1", false), item("2", false)]), 2);

        // One known id, one fresh one.
        assert_eq!(state.set_items(vec![item("2", false), item("3", false)]), 1);

        // Nothing new.
        assert_eq!(state.set_items(vec![item("2", false), item("3", true)]), 0);
    }

    #[test]
    fn unread_count_ignores_read_items() {
        let mut state = State::new();
        state.set_items(vec![item("1", false), item("2", true), item("3", false)]);
        assert_eq!(state.unread_count(), 2);
    }
}
