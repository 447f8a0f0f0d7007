// SPDX-License-Identifier: MPL-2.0
//! Tooltip styling.
//!
//! Controls that declare hint text get wrapped through [`styled`] at
//! view time. The tooltip surface inverts the theme (light-on-dark or
//! dark-on-light) so hints stay readable over any screen.

use crate::ui::design_tokens::{border, radius, shadow, spacing, typography};
use iced::widget::{container, tooltip, Container, Text};
use iced::{Background, Border, Color, Element, Theme};

/// Inverted-surface container for the tooltip bubble.
pub fn bubble(theme: &Theme) -> container::Style {
    let inverted = if theme.extended_palette().is_dark {
        (Color::from_rgb(0.93, 0.93, 0.93), Color::from_rgb(0.12, 0.12, 0.12))
    } else {
        (Color::from_rgb(0.16, 0.16, 0.16), Color::from_rgb(0.93, 0.93, 0.93))
    };
    let (surface, ink) = inverted;

    container::Style {
        background: Some(Background::Color(surface)),
        text_color: Some(ink),
        border: Border {
            radius: radius::SM.into(),
            width: border::WIDTH_SM,
            color: Color { a: 0.3, ..ink },
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Wraps a control in a tooltip carrying the given hint text.
pub fn styled<'a, Message: 'a>(
    content: impl Into<Element<'a, Message>>,
    tip: impl Into<String>,
    position: tooltip::Position,
) -> tooltip::Tooltip<'a, Message, Theme, iced::Renderer> {
    let hint = Container::new(Text::new(tip.into()).size(typography::BODY_SM))
        .padding(spacing::XS)
        .style(bubble);

    tooltip(content, hint, position).gap(spacing::XS)
}
