// SPDX-License-Identifier: MPL-2.0
//! HTTP implementation of the backend capability, targeting the EventHub
//! server's JSON endpoints.

use super::{Backend, EventSummary, NotificationItem};
use crate::error::ApiError;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Client-side request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Response body of `POST /mark_notification_read/{id}`.
#[derive(Debug, Deserialize)]
struct MarkReadResponse {
    success: bool,
}

/// Backend talking to a live EventHub server.
pub struct HttpBackend {
    base: String,
    client: reqwest::Client,
}

impl HttpBackend {
    /// Builds a client for the given base URL (trailing slash tolerated).
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::from)?;

        Ok(Self {
            base: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Resolves image URLs, which the server emits relative to its root.
    fn image_endpoint(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}/{}", self.base, url.trim_start_matches('/'))
        }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn list_events(&self) -> Result<Vec<EventSummary>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/api/events"))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    async fn search_events(&self, query: &str) -> Result<Vec<EventSummary>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/api/events"))
            .query(&[("search", query)])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    async fn fetch_notifications(&self) -> Result<Vec<NotificationItem>, ApiError> {
        let response = self
            .client
            .get(self.endpoint("/api/notifications"))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    async fn mark_notification_read(&self, id: &str) -> Result<(), ApiError> {
        let response = self
            .client
            .post(self.endpoint(&format!("/mark_notification_read/{id}")))
            .send()
            .await?
            .error_for_status()?;

        let body: MarkReadResponse = response.json().await?;
        if body.success {
            Ok(())
        } else {
            Err(ApiError::Other("server rejected mark-as-read".to_string()))
        }
    }

    async fn fetch_image(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = self
            .client
            .get(self.image_endpoint(url))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[tokio::test]
    async fn list_events_decodes_catalogue() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/api/events");
            then.status(200).json_body(json!([{
                "id": 3,
                "title": "Careers in Research",
                "event_type": "seminar",
                "start_date": "2026-08-20T15:00:00",
                "end_date": "2026-08-20T17:00:00",
                "venue": "Auditorium B"
            }]));
        });

        let backend = HttpBackend::new(&server.base_url()).expect("client");
        let events = backend.list_events().await.expect("list");

        mock.assert();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title, "Careers in Research");
    }

    #[tokio::test]
    async fn search_sends_query_parameter() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/api/events")
                .query_param("search", "rust");
            then.status(200).json_body(json!([]));
        });

        let backend = HttpBackend::new(&server.base_url()).expect("client");
        let events = backend.search_events("rust").await.expect("search");

        mock.assert();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn mark_read_posts_and_checks_success_flag() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path("/mark_notification_read/41");
            then.status(200).json_body(json!({"success": true}));
        });

        let backend = HttpBackend::new(&server.base_url()).expect("client");
        backend.mark_notification_read("41").await.expect("mark");

        mock.assert();
    }

    #[tokio::test]
    async fn mark_read_rejection_surfaces_as_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/mark_notification_read/41");
            then.status(200).json_body(json!({"success": false}));
        });

        let backend = HttpBackend::new(&server.base_url()).expect("client");
        let err = backend
            .mark_notification_read("41")
            .await
            .expect_err("should fail");
        assert!(matches!(err, ApiError::Other(_)));
    }

    #[tokio::test]
    async fn server_error_maps_to_status_variant() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/notifications");
            then.status(503);
        });

        let backend = HttpBackend::new(&server.base_url()).expect("client");
        let err = backend
            .fetch_notifications()
            .await
            .expect_err("should fail");
        assert!(matches!(err, ApiError::Status(503)));
    }

    #[test]
    fn image_endpoint_resolves_relative_urls() {
        let backend = HttpBackend::new("https://events.example.edu/").expect("client");
        assert_eq!(
            backend.image_endpoint("/static/img/e.png"),
            "https://events.example.edu/static/img/e.png"
        );
        assert_eq!(
            backend.image_endpoint("https://cdn.example.edu/e.png"),
            "https://cdn.example.edu/e.png"
        );
    }
}
