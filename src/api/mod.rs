// SPDX-License-Identifier: MPL-2.0
//! Backend capability for the EventHub server.
//!
//! The interaction layer never talks to a transport directly: everything
//! network-shaped goes through the [`Backend`] trait so the UI logic can be
//! exercised against the in-memory [`StubBackend`] and deployed against the
//! [`HttpBackend`].
//!
//! Server shapes follow the EventHub JSON API (`/api/events` and friends).

mod http;
mod stub;

pub use http::HttpBackend;
pub use stub::StubBackend;

use crate::error::ApiError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Category of an event, as reported by the server.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Fest,
    Seminar,
    Webinar,
    Workshop,
}

impl EventKind {
    /// All kinds, in catalogue section order.
    pub const ALL: [EventKind; 4] = [
        EventKind::Fest,
        EventKind::Seminar,
        EventKind::Webinar,
        EventKind::Workshop,
    ];

    /// Returns the i18n key for the section heading of this kind.
    #[must_use]
    pub fn heading_key(self) -> &'static str {
        match self {
            EventKind::Fest => "catalogue-section-fests",
            EventKind::Seminar => "catalogue-section-seminars",
            EventKind::Webinar => "catalogue-section-webinars",
            EventKind::Workshop => "catalogue-section-workshops",
        }
    }
}

/// One event as listed by `GET /api/events`.
///
/// Dates stay in their wire form (ISO-8601 strings) and are rendered
/// through [`crate::util::format_date`] at view time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EventSummary {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "event_type")]
    pub kind: EventKind,
    #[serde(default)]
    pub venue: Option<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Category of a notification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    EventUpdate,
    Registration,
    Certificate,
    #[default]
    #[serde(other)]
    General,
}

/// One notification row. The id is opaque to the client; it is only ever
/// echoed back in the mark-as-read call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationItem {
    pub id: String,
    pub title: String,
    pub message: String,
    #[serde(rename = "notification_type", default)]
    pub kind: NotificationKind,
    pub created_at: String,
    #[serde(default)]
    pub is_read: bool,
}

/// The capability the interaction layer is written against.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Full active-event catalogue.
    async fn list_events(&self) -> Result<Vec<EventSummary>, ApiError>;

    /// Catalogue filtered by a free-text query.
    async fn search_events(&self, query: &str) -> Result<Vec<EventSummary>, ApiError>;

    /// Current notification list for the session user, newest first.
    async fn fetch_notifications(&self) -> Result<Vec<NotificationItem>, ApiError>;

    /// Marks one notification read. Single attempt; callers do not retry.
    async fn mark_notification_read(&self, id: &str) -> Result<(), ApiError>;

    /// Raw bytes of an event image.
    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError>;
}

/// Shared handle used by async tasks spawned from the update loop.
pub type SharedBackend = Arc<dyn Backend>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_summary_decodes_server_shape() {
        let json = r#"{
            "id": 7,
            "title": "Intro to Rust",
            "description": "Hands-on systems programming",
            "event_type": "workshop",
            "venue": "Lab 2",
            "start_date": "2026-09-12T18:00:00",
            "end_date": "2026-09-12T20:00:00",
            "image_url": "/static/img/rust.png"
        }"#;

        let event: EventSummary = serde_json::from_str(json).expect("decode event");
        assert_eq!(event.id, 7);
        assert_eq!(event.kind, EventKind::Workshop);
        assert_eq!(event.venue.as_deref(), Some("Lab 2"));
    }

    #[test]
    fn event_summary_tolerates_missing_optional_fields() {
        let json = r#"{
            "id": 1,
            "title": "Spring Fest",
            "event_type": "fest",
            "start_date": "2026-04-01T10:00:00",
            "end_date": "2026-04-03T22:00:00"
        }"#;

        let event: EventSummary = serde_json::from_str(json).expect("decode event");
        assert!(event.description.is_empty());
        assert!(event.venue.is_none());
        assert!(event.image_url.is_none());
    }

    #[test]
    fn notification_unknown_kind_falls_back_to_general() {
        let json = r#"{
            "id": "41",
            "title": "Heads up",
            "message": "Something happened",
            "notification_type": "mystery",
            "created_at": "2026-08-01T09:00:00"
        }"#;

        let item: NotificationItem = serde_json::from_str(json).expect("decode notification");
        assert_eq!(item.kind, NotificationKind::General);
        assert!(!item.is_read);
    }

    #[test]
    fn event_kinds_have_distinct_headings() {
        let mut keys: Vec<_> = EventKind::ALL.iter().map(|k| k.heading_key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), EventKind::ALL.len());
    }
}
