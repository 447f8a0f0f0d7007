// SPDX-License-Identifier: MPL-2.0
//! In-memory backend used when no server is configured.
//!
//! Ships a small sample catalogue so the whole interaction layer works
//! offline, with the same timing shape a real server would have: searches
//! resolve after a fixed simulated latency.

use super::{Backend, EventKind, EventSummary, NotificationItem, NotificationKind};
use crate::error::ApiError;
use async_trait::async_trait;
use std::time::Duration;
use tokio::sync::Mutex;

/// Simulated round-trip for catalogue searches.
const SEARCH_LATENCY: Duration = Duration::from_millis(500);

/// Simulated round-trip for image fetches.
const IMAGE_LATENCY: Duration = Duration::from_millis(120);

/// A 1x1 transparent PNG, served for every stub image URL.
const PLACEHOLDER_PNG: [u8; 67] = [
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0B, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// Offline backend with a fixed catalogue and a mutable notification list.
pub struct StubBackend {
    events: Vec<EventSummary>,
    notifications: Mutex<Vec<NotificationItem>>,
}

impl Default for StubBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl StubBackend {
    #[must_use]
    pub fn new() -> Self {
        Self {
            events: sample_events(),
            notifications: Mutex::new(sample_notifications()),
        }
    }
}

#[async_trait]
impl Backend for StubBackend {
    async fn list_events(&self) -> Result<Vec<EventSummary>, ApiError> {
        Ok(self.events.clone())
    }

    async fn search_events(&self, query: &str) -> Result<Vec<EventSummary>, ApiError> {
        tokio::time::sleep(SEARCH_LATENCY).await;

        let needle = query.to_lowercase();
        Ok(self
            .events
            .iter()
            .filter(|event| {
                event.title.to_lowercase().contains(&needle)
                    || event.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }

    async fn fetch_notifications(&self) -> Result<Vec<NotificationItem>, ApiError> {
        Ok(self.notifications.lock().await.clone())
    }

    async fn mark_notification_read(&self, id: &str) -> Result<(), ApiError> {
        let mut notifications = self.notifications.lock().await;
        match notifications.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.is_read = true;
                Ok(())
            }
            None => Err(ApiError::Status(404)),
        }
    }

    async fn fetch_image(&self, _url: &str) -> Result<Vec<u8>, ApiError> {
        tokio::time::sleep(IMAGE_LATENCY).await;
        Ok(PLACEHOLDER_PNG.to_vec())
    }
}

fn sample_events() -> Vec<EventSummary> {
    let entries = [
        (
            1,
            "Spring Fest",
            "Three days of music, food stalls, and club showcases on the main lawn.",
            EventKind::Fest,
            Some("Main Lawn"),
            "2026-04-01T10:00:00",
            "2026-04-03T22:00:00",
        ),
        (
            2,
            "Hackathon Kickoff",
            "Form teams and pitch project ideas for the 48-hour build sprint.",
            EventKind::Fest,
            Some("Innovation Hub"),
            "2026-05-15T09:00:00",
            "2026-05-15T12:00:00",
        ),
        (
            3,
            "Careers in Research",
            "Faculty panel on graduate study and research careers.",
            EventKind::Seminar,
            Some("Auditorium B"),
            "2026-08-20T15:00:00",
            "2026-08-20T17:00:00",
        ),
        (
            4,
            "Ethics of Machine Learning",
            "Guest lecture followed by an open question session.",
            EventKind::Seminar,
            Some("Hall 3"),
            "2026-09-02T11:00:00",
            "2026-09-02T12:30:00",
        ),
        (
            5,
            "Cloud Infrastructure 101",
            "Remote walkthrough of deployment pipelines and observability basics.",
            EventKind::Webinar,
            None,
            "2026-08-28T18:00:00",
            "2026-08-28T19:30:00",
        ),
        (
            6,
            "Intro to Rust",
            "Hands-on systems programming workshop, laptops required.",
            EventKind::Workshop,
            Some("Lab 2"),
            "2026-09-12T18:00:00",
            "2026-09-12T20:00:00",
        ),
        (
            7,
            "Photography Basics",
            "Composition and lighting fundamentals with a campus photo walk.",
            EventKind::Workshop,
            Some("Media Center"),
            "2026-09-19T14:00:00",
            "2026-09-19T17:00:00",
        ),
    ];

    entries
        .into_iter()
        .map(
            |(id, title, description, kind, venue, start, end)| EventSummary {
                id,
                title: title.to_string(),
                description: description.to_string(),
                kind,
                venue: venue.map(str::to_string),
                start_date: start.to_string(),
                end_date: end.to_string(),
                image_url: Some(format!("/static/img/event-{id}.png")),
            },
        )
        .collect()
}

fn sample_notifications() -> Vec<NotificationItem> {
    vec![
        NotificationItem {
            id: "101".to_string(),
            title: "Registration confirmed".to_string(),
            message: "You are registered for Intro to Rust.".to_string(),
            kind: NotificationKind::Registration,
            created_at: "2026-08-03T09:15:00".to_string(),
            is_read: false,
        },
        NotificationItem {
            id: "102".to_string(),
            title: "Venue change".to_string(),
            message: "Careers in Research moved to Auditorium B.".to_string(),
            kind: NotificationKind::EventUpdate,
            created_at: "2026-08-01T16:40:00".to_string(),
            is_read: false,
        },
        NotificationItem {
            id: "103".to_string(),
            title: "Certificate ready".to_string(),
            message: "Your certificate for Photography Basics is available.".to_string(),
            kind: NotificationKind::Certificate,
            created_at: "2026-07-28T12:00:00".to_string(),
            is_read: true,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn search_filters_by_title_case_insensitively() {
        let backend = StubBackend::new();
        let results = backend.search_events("rust").await.expect("search");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Intro to Rust");
    }

    #[tokio::test(start_paused = true)]
    async fn search_matches_descriptions_too() {
        let backend = StubBackend::new();
        let results = backend.search_events("deployment").await.expect("search");

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].kind, EventKind::Webinar);
    }

    #[tokio::test(start_paused = true)]
    async fn search_with_no_match_returns_empty() {
        let backend = StubBackend::new();
        let results = backend.search_events("zzzz").await.expect("search");
        assert!(results.is_empty());
    }

    #[tokio::test]
    async fn mark_read_flips_the_flag() {
        let backend = StubBackend::new();
        backend.mark_notification_read("101").await.expect("mark");

        let items = backend.fetch_notifications().await.expect("fetch");
        let item = items.iter().find(|i| i.id == "101").expect("item");
        assert!(item.is_read);
    }

    #[tokio::test]
    async fn mark_read_unknown_id_reports_not_found() {
        let backend = StubBackend::new();
        let err = backend
            .mark_notification_read("no-such-id")
            .await
            .expect_err("should fail");
        assert!(matches!(err, ApiError::Status(404)));
    }

    #[tokio::test(start_paused = true)]
    async fn fetch_image_returns_png_bytes() {
        let backend = StubBackend::new();
        let bytes = backend.fetch_image("/static/img/event-1.png").await.expect("image");
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn sample_catalogue_covers_every_section() {
        let events = sample_events();
        for kind in EventKind::ALL {
            assert!(
                events.iter().any(|event| event.kind == kind),
                "missing sample events for {kind:?}"
            );
        }
    }
}
