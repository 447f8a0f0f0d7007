// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//! Components that need to talk back to the application do so through
//! small `Effect` enums returned from their `handle_message` functions.
//!
//! # Screens
//!
//! - [`catalogue`] - Sectioned event list with search results, lazy
//!   images, reveal animations, and smooth section scrolling
//! - [`feed`] - Notification inbox with click-to-mark-read
//! - [`sign_up`] - Registration form with client-side validation
//!
//! # Shared Infrastructure
//!
//! - [`components`] - Reusable UI components (busy overlay)
//! - [`widgets`] - Custom Iced widgets (spinner)
//! - [`styles`] - Centralized styling (buttons, containers, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`navbar`] - Top navigation bar with section links
//! - [`search_bar`] - Debounced search input
//! - [`toasts`] - Toast notification system for user feedback

pub mod catalogue;
pub mod components;
pub mod design_tokens;
pub mod feed;
pub mod navbar;
pub mod search_bar;
pub mod sign_up;
pub mod styles;
pub mod toasts;
pub mod widgets;
