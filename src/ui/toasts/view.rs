// SPDX-License-Identifier: MPL-2.0
//! Widget rendering for toasts.
//!
//! Toasts appear as small cards with a severity-colored accent border and
//! a dismiss button, stacked in the top-right corner.

use super::manager::{Manager, Message};
use super::toast::Toast;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{button, container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Renders a single toast.
pub fn toast<'a>(toast: &'a Toast, i18n: &'a I18n) -> Element<'a, Message> {
    let accent_color = toast.severity().color();

    // Resolve the message text using i18n with optional arguments
    let message_text = if toast.message_args().is_empty() {
        i18n.tr(toast.message_key())
    } else {
        let args: Vec<(&str, &str)> = toast
            .message_args()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        i18n.tr_with_args(toast.message_key(), &args)
    };

    // Severity dot
    let dot = Container::new(text(""))
        .width(Length::Fixed(10.0))
        .height(Length::Fixed(10.0))
        .style(move |_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(accent_color)),
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let message_widget = Text::new(message_text)
        .size(typography::BODY)
        .style(|theme: &Theme| text::Style {
            color: Some(theme.palette().text),
        });

    let toast_id = toast.id();
    let dismiss_button = button(Text::new("\u{2715}").size(typography::BODY_SM))
        .on_press(Message::Dismiss(toast_id))
        .padding(spacing::XXS)
        .style(dismiss_button_style);

    // Layout: [dot] [message] [dismiss]
    let content = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Container::new(dot).padding(spacing::XXS))
        .push(
            Container::new(message_widget)
                .width(Length::Fill)
                .align_x(alignment::Horizontal::Left),
        )
        .push(dismiss_button);

    Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .padding(spacing::SM)
        .style(move |theme: &Theme| toast_container_style(theme, accent_color))
        .into()
}

/// Renders the toast overlay with all visible toasts.
///
/// Positions toasts in the top-right corner, stacked vertically.
pub fn overlay<'a>(manager: &'a Manager, i18n: &'a I18n) -> Element<'a, Message> {
    let toasts: Vec<Element<'a, Message>> = manager
        .visible()
        .map(|entry| toast(entry, i18n))
        .collect();

    if toasts.is_empty() {
        // Return an empty container that takes no space
        Container::new(text(""))
            .width(Length::Shrink)
            .height(Length::Shrink)
            .into()
    } else {
        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Right);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Right)
            .align_y(alignment::Vertical::Top)
            .padding(spacing::MD)
            .into()
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..Default::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    // A gray wash appears under the cursor; otherwise the button is bare.
    let wash = match status {
        button::Status::Hovered => Some(opacity::OVERLAY_SUBTLE),
        button::Status::Pressed => Some(opacity::OVERLAY_MEDIUM),
        _ => None,
    };

    button::Style {
        background: wash.map(|a| {
            iced::Background::Color(Color {
                a,
                ..palette::GRAY_400
            })
        }),
        text_color: if status == button::Status::Disabled {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..base.text
            }
        } else {
            base.text
        },
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toasts::Severity;

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = palette::SUCCESS_500;
        let style = toast_container_style(&theme, accent);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn overlay_renders_for_empty_and_filled_manager() {
        let i18n = I18n::default();
        let manager = Manager::new();
        let _empty = overlay(&manager, &i18n);

        let mut manager = Manager::new();
        manager.push(Toast::new(Severity::Danger, "toast-config-load-error"));
        let _filled = overlay(&manager, &i18n);
    }
}
