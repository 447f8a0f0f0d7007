// SPDX-License-Identifier: MPL-2.0
//! `eventhub` is a desktop client for the EventHub campus event platform,
//! built with the Iced GUI framework.
//!
//! It presents the event catalogue with debounced search, a polled
//! notification inbox, a validated sign-up form, and toast feedback, all
//! written against an injected backend capability so the interaction
//! logic runs offline too.
//!
//! The crate-root re-exports below are the stable surface other code may
//! depend on: the toast API and the utility belt.

#![doc(html_root_url = "https://docs.rs/eventhub/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod session;
pub mod ui;
pub mod util;

pub use ui::toasts::{Manager as ToastManager, Severity as ToastSeverity, Toast};
pub use util::{format_date, format_time, Debouncer, Throttle};
