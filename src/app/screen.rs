// SPDX-License-Identifier: MPL-2.0
//! Top-level screens of the application.

/// Which screen is currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The event catalogue with search.
    #[default]
    Catalogue,
    /// The notification inbox.
    Notifications,
    /// The registration form.
    SignUp,
}
