// SPDX-License-Identifier: MPL-2.0
//! Design tokens: the constants every view and style reads from.
//!
//! The palette mirrors the EventHub web theme (Bootstrap 5 semantic
//! colors), spacing sits on a 4px grid, and the catalogue layout model
//! in [`crate::ui::catalogue::layout`] depends on the `sizing` values
//! staying in sync with the rendered widgets.

use iced::Color;

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    // Brand blues (Bootstrap "primary" scale)
    pub const PRIMARY_400: Color = Color::from_rgb(0.239, 0.545, 0.992);
    pub const PRIMARY_500: Color = Color::from_rgb(0.051, 0.431, 0.992);
    pub const PRIMARY_700: Color = Color::from_rgb(0.039, 0.345, 0.792);

    // Semantic accents, matching the web app's toast styling
    pub const DANGER_500: Color = Color::from_rgb(0.863, 0.208, 0.271);
    pub const WARNING_500: Color = Color::from_rgb(1.0, 0.757, 0.027);
    pub const SUCCESS_500: Color = Color::from_rgb(0.098, 0.529, 0.329);
    pub const INFO_500: Color = Color::from_rgb(0.051, 0.792, 0.941);
}

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
}

pub mod sizing {
    /// Busy-overlay spinner diameter.
    pub const SPINNER: f32 = 48.0;

    pub const TOAST_WIDTH: f32 = 320.0;
    pub const FORM_WIDTH: f32 = 420.0;
    pub const SEARCH_WIDTH: f32 = 280.0;

    // Catalogue rows. The scroll/visibility model computes offsets from
    // these, so they must match what the card and heading views render.
    pub const CARD_HEIGHT: f32 = 132.0;
    pub const CARD_IMAGE: f32 = 96.0;
    pub const SECTION_HEADER_HEIGHT: f32 = 44.0;
}

pub mod typography {
    /// Form and page headings.
    pub const TITLE_LG: f32 = 30.0;
    /// App name, section headings.
    pub const TITLE_MD: f32 = 20.0;
    /// Card titles.
    pub const TITLE_SM: f32 = 18.0;
    /// Default UI text.
    pub const BODY: f32 = 14.0;
    /// Secondary text, inline errors.
    pub const BODY_SM: f32 = 13.0;
    /// Badges and timestamps.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    /// Pill shape for dots and badges.
    pub const FULL: f32 = 9999.0;
}

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };
}

// Scale ordering is load-bearing for the layout model; break the build
// rather than ship inverted tokens.
const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);
    assert!(spacing::XL > spacing::LG);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::CARD_HEIGHT > sizing::CARD_IMAGE);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_sits_on_the_four_pixel_grid() {
        for value in [
            spacing::XXS,
            spacing::XS,
            spacing::SM,
            spacing::MD,
            spacing::LG,
            spacing::XL,
        ] {
            assert_eq!(value % 4.0, 0.0, "{value} is off-grid");
        }
    }

    #[test]
    fn semantic_accents_are_distinct() {
        let colors = [
            palette::DANGER_500,
            palette::WARNING_500,
            palette::SUCCESS_500,
            palette::INFO_500,
            palette::PRIMARY_500,
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in colors.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }
}
