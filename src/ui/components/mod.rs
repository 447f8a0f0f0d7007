// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components.

pub mod busy_overlay;
