// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` struct wires together the domains (catalogue, notifications,
//! sign-up, localization) and translates component effects into side
//! effects like backend calls. Policy decisions (debounce timing, polling
//! cadence, stale-search handling) stay close to the main update loop so
//! user-facing behavior is easy to audit.

mod message;
pub mod poller;
mod screen;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use screen::Screen;

use crate::api::{HttpBackend, SharedBackend, StubBackend};
use crate::config::{self, ThemeMode};
use crate::i18n::fluent::I18n;
use crate::session::Session;
use crate::ui::components::busy_overlay;
use crate::ui::{catalogue, feed, search_bar, sign_up, toasts};
use iced::{window, Element, Subscription, Task, Theme};
use poller::Poller;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 540;

/// Root Iced application state bridging UI components, localization, and
/// the backend capability.
pub struct App {
    pub i18n: I18n,
    screen: Screen,
    /// Session user derived once at startup; read-only afterwards.
    session: Option<Session>,
    backend: SharedBackend,
    theme_mode: ThemeMode,
    search: search_bar::State,
    /// Generation of the search currently in flight, if any. Completions
    /// for other generations are discarded as superseded.
    active_search: Option<u64>,
    catalogue: catalogue::State,
    feed: feed::State,
    sign_up: sign_up::State,
    /// The busy overlay; owning exactly one keeps it a singleton.
    overlay: busy_overlay::State,
    /// Start/stop handle for notification polling.
    poller: Poller,
    /// Toast manager for user feedback.
    toasts: toasts::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("card_count", &self.catalogue.cards().len())
            .field("unread", &self.feed.unread_count())
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            screen: Screen::Catalogue,
            session: None,
            backend: Arc::new(StubBackend::new()),
            theme_mode: ThemeMode::default(),
            search: search_bar::State::new(),
            active_search: None,
            catalogue: catalogue::State::new(),
            feed: feed::State::new(),
            sign_up: sign_up::State::new(),
            overlay: busy_overlay::State::new(),
            poller: Poller::new(
                Duration::from_secs(config::DEFAULT_POLL_INTERVAL_SECS),
                true,
            ),
            toasts: toasts::Manager::new(),
        }
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state and kicks off the initial catalogue
    /// load plus one immediate notification fetch.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            ..Self::default()
        };

        app.theme_mode = config.general.theme_mode;
        app.session = Session::resolve(flags.user, &config.session);
        app.poller = Poller::new(
            Duration::from_secs(config.notifications.poll_interval_secs),
            config.notifications.enabled,
        );

        let server_url = flags.server.or_else(|| config.server.url.clone());
        app.backend = match server_url {
            Some(url) => match HttpBackend::new(&url) {
                Ok(http) => Arc::new(http),
                Err(err) => {
                    log::warn!("http backend init failed: {}", err);
                    app.toasts
                        .push(toasts::Toast::warning("toast-backend-init-error"));
                    Arc::new(StubBackend::new())
                }
            },
            None => Arc::new(StubBackend::new()),
        };

        if let Some(key) = config_warning {
            app.toasts.push(toasts::Toast::warning(&key));
        }

        let task = Task::batch([
            update::load_catalogue_task(&app.backend),
            update::poll_notifications_task(&app.backend),
        ]);

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");

        match self.screen {
            Screen::Catalogue => app_name,
            Screen::Notifications => {
                format!("{} - {}", self.i18n.tr("screen-notifications-title"), app_name)
            }
            Screen::SignUp => {
                format!("{} - {}", self.i18n.tr("screen-signup-title"), app_name)
            }
        }
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
            ThemeMode::System => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let tick_sub = subscription::create_tick_subscription(
            self.overlay.is_active(),
            self.catalogue.is_animating(),
            self.toasts.has_toasts(),
        );
        let poll_sub = subscription::create_poll_subscription(&self.poller);

        Subscription::batch([tick_sub, poll_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            screen: &mut self.screen,
            backend: &self.backend,
            search: &mut self.search,
            active_search: &mut self.active_search,
            catalogue: &mut self.catalogue,
            feed: &mut self.feed,
            sign_up: &mut self.sign_up,
            overlay: &mut self.overlay,
            toasts: &mut self.toasts,
        };

        match message {
            Message::Navbar(navbar_message) => {
                update::handle_navbar_message(&mut ctx, navbar_message)
            }
            Message::Search(search_message) => {
                update::handle_search_message(&mut ctx, search_message)
            }
            Message::Catalogue(catalogue_message) => {
                update::handle_catalogue_message(&mut ctx, catalogue_message)
            }
            Message::Feed(feed_message) => update::handle_feed_message(&mut ctx, feed_message),
            Message::SignUp(sign_up_message) => {
                update::handle_sign_up_message(&mut ctx, sign_up_message)
            }
            Message::Toast(toast_message) => {
                self.toasts.handle_message(&toast_message);
                Task::none()
            }
            Message::CatalogueLoaded(result) => match result {
                Ok(events) => self.apply_catalogue(events),
                Err(err) => {
                    log::warn!("catalogue load failed: {}", err);
                    Task::none()
                }
            },
            Message::SearchCompleted { generation, result } => {
                if self.active_search != Some(generation) {
                    // Superseded by a newer search; the newer completion
                    // owns the overlay.
                    return Task::none();
                }
                self.active_search = None;
                self.overlay.hide();

                match result {
                    Ok(events) => self.apply_catalogue(events),
                    Err(err) => {
                        // Previous results stay on screen; error surfacing
                        // is left to collaborators.
                        log::warn!("search failed: {}", err);
                        Task::none()
                    }
                }
            }
            Message::PollTick(_instant) => update::poll_notifications_task(&self.backend),
            Message::NotificationsFetched(result) => {
                match result {
                    Ok(items) => {
                        let fresh = self.feed.set_items(items);
                        if fresh > 0 {
                            self.toasts.push(
                                toasts::Toast::info("toast-new-notifications")
                                    .with_arg("count", fresh.to_string()),
                            );
                        }
                    }
                    Err(err) => {
                        // No backoff, no retry: the next poll just tries again.
                        log::warn!("notification poll failed: {}", err);
                    }
                }
                Task::none()
            }
            Message::NotificationMarked { id, result } => {
                if let Err(err) = result {
                    // Single attempt; the item stays read locally.
                    log::warn!("mark-as-read failed for {}: {}", id, err);
                }
                Task::none()
            }
            Message::ImageFetched { index, result } => {
                self.catalogue.image_loaded(index, result);
                Task::none()
            }
            Message::Tick(now) => {
                self.overlay.tick();
                self.toasts.tick();

                let (effect, snap) = self.catalogue.tick(now);
                let fetch = match effect {
                    catalogue::Effect::FetchImages(requests) => {
                        update::fetch_images_task(&self.backend, requests)
                    }
                    catalogue::Effect::None => Task::none(),
                };

                Task::batch([snap.map(Message::Catalogue), fetch])
            }
        }
    }

    /// Replaces the catalogue and wires the follow-up tasks (scroll reset
    /// and initial image fetches).
    fn apply_catalogue(&mut self, events: Vec<crate::api::EventSummary>) -> Task<Message> {
        let (effect, snap) = self.catalogue.set_events(events);
        let fetch = match effect {
            catalogue::Effect::FetchImages(requests) => {
                update::fetch_images_task(&self.backend, requests)
            }
            catalogue::Effect::None => Task::none(),
        };

        Task::batch([snap.map(Message::Catalogue), fetch])
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            screen: self.screen,
            session: self.session.as_ref(),
            search: &self.search,
            catalogue: &self.catalogue,
            feed: &self.feed,
            sign_up: &self.sign_up,
            overlay: &self.overlay,
            toasts: &self.toasts,
        })
    }
}
