// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Flat text button with no chrome of its own.
fn flat(text_color: Color) -> button::Style {
    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Primary action button (submit, sign-up).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (fill, edge) = match status {
        button::Status::Hovered => (palette::PRIMARY_400, palette::PRIMARY_500),
        button::Status::Disabled => (palette::GRAY_200, palette::GRAY_400),
        button::Status::Active | button::Status::Pressed => {
            (palette::PRIMARY_500, palette::PRIMARY_700)
        }
    };

    button::Style {
        background: Some(Background::Color(fill)),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_400
        } else {
            palette::WHITE
        },
        border: Border {
            color: edge,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: match status {
            button::Status::Hovered => shadow::MD,
            button::Status::Disabled => shadow::NONE,
            _ => shadow::SM,
        },
        snap: true,
    }
}

/// Text-only link button used for the section anchors in the navbar.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered | button::Status::Pressed => flat(palette::PRIMARY_400),
        _ => flat(theme.extended_palette().background.base.text),
    }
}

/// Full-width row button used for clickable list rows (notification feed).
pub fn row(theme: &Theme, status: button::Status) -> button::Style {
    let bg = theme.extended_palette().background;
    let base = flat(bg.base.text);

    let highlight = match status {
        button::Status::Hovered => Some(bg.weak.color),
        button::Status::Pressed => Some(bg.strong.color),
        _ => None,
    };

    match highlight {
        Some(color) => button::Style {
            background: Some(Background::Color(color)),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..base
        },
        None => base,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_active_uses_brand_background() {
        let style = primary(&Theme::Dark, button::Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn primary_disabled_is_grayed_out() {
        let style = primary(&Theme::Dark, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn link_has_no_background() {
        for status in [
            button::Status::Active,
            button::Status::Hovered,
            button::Status::Pressed,
            button::Status::Disabled,
        ] {
            assert!(link(&Theme::Dark, status).background.is_none());
        }
    }

    #[test]
    fn row_highlights_only_under_the_cursor() {
        assert!(row(&Theme::Dark, button::Status::Active).background.is_none());
        assert!(row(&Theme::Dark, button::Status::Hovered).background.is_some());
        assert!(row(&Theme::Dark, button::Status::Pressed).background.is_some());
    }
}
