// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the specialized message handlers `App::update`
//! dispatches to, plus the task constructors for backend calls.

use super::{Message, Screen};
use crate::api::SharedBackend;
use crate::ui::components::busy_overlay;
use crate::ui::{catalogue, feed, navbar, search_bar, sign_up, toasts};
use iced::Task;

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub screen: &'a mut Screen,
    pub backend: &'a SharedBackend,
    pub search: &'a mut search_bar::State,
    pub active_search: &'a mut Option<u64>,
    pub catalogue: &'a mut catalogue::State,
    pub feed: &'a mut feed::State,
    pub sign_up: &'a mut sign_up::State,
    pub overlay: &'a mut busy_overlay::State,
    pub toasts: &'a mut toasts::Manager,
}

/// Handles navbar interactions.
pub fn handle_navbar_message(ctx: &mut UpdateContext<'_>, message: navbar::Message) -> Task<Message> {
    match message {
        navbar::Message::OpenCatalogue => {
            *ctx.screen = Screen::Catalogue;
            Task::none()
        }
        navbar::Message::OpenNotifications => {
            *ctx.screen = Screen::Notifications;
            Task::none()
        }
        navbar::Message::OpenSignUp => {
            *ctx.screen = Screen::SignUp;
            Task::none()
        }
        navbar::Message::SectionLinkClicked(kind) => {
            // Section links act on the catalogue, switching to it first
            // when clicked from another screen.
            *ctx.screen = Screen::Catalogue;
            handle_catalogue_message(ctx, catalogue::Message::SectionLinkClicked(kind))
        }
    }
}

/// Handles search input and debounce wake-ups.
pub fn handle_search_message(
    ctx: &mut UpdateContext<'_>,
    message: search_bar::Message,
) -> Task<Message> {
    match ctx.search.handle_message(message) {
        search_bar::Effect::None => Task::none(),
        search_bar::Effect::ScheduleDebounce(generation) => Task::perform(
            tokio::time::sleep(search_bar::DEBOUNCE_DELAY),
            move |()| Message::Search(search_bar::Message::DebounceElapsed(generation)),
        ),
        search_bar::Effect::Search(query) => launch_search(ctx, query),
    }
}

/// Starts a catalogue search: shows the busy overlay and remembers the
/// generation so stale completions can be discarded.
pub fn launch_search(ctx: &mut UpdateContext<'_>, query: String) -> Task<Message> {
    let generation = ctx.search.generation();
    *ctx.active_search = Some(generation);
    ctx.overlay.show();

    let backend = ctx.backend.clone();
    Task::perform(
        async move { backend.search_events(&query).await },
        move |result| Message::SearchCompleted { generation, result },
    )
}

/// Handles catalogue scroll and section-link messages.
pub fn handle_catalogue_message(
    ctx: &mut UpdateContext<'_>,
    message: catalogue::Message,
) -> Task<Message> {
    match ctx.catalogue.handle_message(message) {
        catalogue::Effect::None => Task::none(),
        catalogue::Effect::FetchImages(requests) => fetch_images_task(ctx.backend, requests),
    }
}

/// Handles notification feed clicks.
pub fn handle_feed_message(ctx: &mut UpdateContext<'_>, message: feed::Message) -> Task<Message> {
    match ctx.feed.handle_message(message) {
        feed::Effect::None => Task::none(),
        feed::Effect::MarkRead(id) => {
            let backend = ctx.backend.clone();
            Task::perform(
                async move {
                    let result = backend.mark_notification_read(&id).await;
                    (id, result)
                },
                |(id, result)| Message::NotificationMarked { id, result },
            )
        }
    }
}

/// Handles sign-up form messages.
pub fn handle_sign_up_message(
    ctx: &mut UpdateContext<'_>,
    message: sign_up::Message,
) -> Task<Message> {
    match ctx.sign_up.handle_message(message) {
        sign_up::Effect::None => Task::none(),
        sign_up::Effect::Submit(form) => {
            log::info!("sign-up submitted for {}", form.email);
            ctx.toasts.push(toasts::Toast::success("toast-signup-success"));
            ctx.sign_up.reset();
            *ctx.screen = Screen::Catalogue;
            Task::none()
        }
    }
}

/// Spawns one fetch task per requested card image.
pub fn fetch_images_task(
    backend: &SharedBackend,
    requests: Vec<(usize, String)>,
) -> Task<Message> {
    let tasks = requests.into_iter().map(|(index, url)| {
        let backend = backend.clone();
        Task::perform(
            async move { backend.fetch_image(&url).await },
            move |result| Message::ImageFetched { index, result },
        )
    });
    Task::batch(tasks)
}

/// One notification poll round.
pub fn poll_notifications_task(backend: &SharedBackend) -> Task<Message> {
    let backend = backend.clone();
    Task::perform(
        async move { backend.fetch_notifications().await },
        Message::NotificationsFetched,
    )
}

/// Initial catalogue load.
pub fn load_catalogue_task(backend: &SharedBackend) -> Task<Message> {
    let backend = backend.clone();
    Task::perform(
        async move { backend.list_events().await },
        Message::CatalogueLoaded,
    )
}
