// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface for catalogue entries.
///
/// The alpha parameter drives the reveal animation: cards fade in from
/// fully transparent as they enter the viewport.
pub fn card(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.weak.color;

        container::Style {
            background: Some(Background::Color(Color {
                a: base.a * alpha,
                ..base
            })),
            border: Border {
                radius: radius::MD.into(),
                width: border::WIDTH_SM,
                color: Color {
                    a: alpha * opacity::OVERLAY_SUBTLE,
                    ..palette::GRAY_400
                },
            },
            text_color: Some(Color {
                a: alpha,
                ..theme.extended_palette().background.base.text
            }),
            ..Default::default()
        }
    }
}

/// Dimmed full-surface backdrop for the busy overlay.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Raised panel sitting on the backdrop (spinner box, form surface).
pub fn panel(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::MD,
        text_color: Some(theme.extended_palette().background.base.text),
        ..Default::default()
    }
}

/// Pill badge for the unread-notification count.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::DANGER_500)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Top navigation bar surface.
pub fn navbar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(theme.extended_palette().background.weak.color.into()),
        ..Default::default()
    }
}
