// SPDX-License-Identifier: MPL-2.0
//! Internationalization support built on Fluent.
//!
//! All user-facing strings are resolved through [`fluent::I18n`] from the
//! `.ftl` bundles embedded under `assets/i18n/`.

pub mod fluent;
