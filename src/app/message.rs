// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{EventSummary, NotificationItem};
use crate::error::ApiError;
use crate::ui::{catalogue, feed, navbar, search_bar, sign_up, toasts};
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Search(search_bar::Message),
    Catalogue(catalogue::Message),
    Feed(feed::Message),
    SignUp(sign_up::Message),
    Toast(toasts::Message),
    /// Initial (or refreshed) catalogue load finished.
    CatalogueLoaded(Result<Vec<EventSummary>, ApiError>),
    /// A debounced search finished; stale generations are discarded.
    SearchCompleted {
        generation: u64,
        result: Result<Vec<EventSummary>, ApiError>,
    },
    /// The notification poll timer fired.
    PollTick(Instant),
    /// A notification poll finished.
    NotificationsFetched(Result<Vec<NotificationItem>, ApiError>),
    /// The fire-and-forget mark-as-read call finished.
    NotificationMarked {
        id: String,
        result: Result<(), ApiError>,
    },
    /// A lazy image fetch finished for the card at this index.
    ImageFetched {
        index: usize,
        result: Result<Vec<u8>, ApiError>,
    },
    /// Periodic tick driving overlay, toast, and scroll animations.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional EventHub server base URL; overrides the config file.
    pub server: Option<String>,
    /// Optional display name for the session user.
    pub user: Option<String>,
}
