// SPDX-License-Identifier: MPL-2.0
//! One catalogue entry: event details, a lazily loaded image, and a
//! scroll-triggered reveal animation.

use crate::api::EventSummary;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::util;
use iced::widget::image::{Handle, Image};
use iced::widget::{container, text, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

/// Reveal progress gained per animation tick.
const REVEAL_STEP: f32 = 0.125;

/// Vertical rise distance of the reveal animation, in logical pixels.
const REVEAL_RISE: f32 = 30.0;

/// Lazy image slot. Promotion out of `Deferred` is one-shot; a slot never
/// goes back to waiting.
#[derive(Debug, Clone)]
pub enum ImageSlot {
    /// Not yet requested; holds the deferred source URL.
    Deferred { url: String },
    /// Fetch in flight.
    Loading,
    /// Bytes arrived and decoded into a handle.
    Loaded(Handle),
    /// No URL, or the fetch failed.
    Missing,
}

impl ImageSlot {
    /// Takes the deferred URL, moving the slot to `Loading`.
    ///
    /// Returns `None` when the slot already left the deferred state.
    pub fn begin_loading(&mut self) -> Option<String> {
        if let ImageSlot::Deferred { url } = self {
            let url = url.clone();
            *self = ImageSlot::Loading;
            Some(url)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_deferred(&self) -> bool {
        matches!(self, ImageSlot::Deferred { .. })
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, ImageSlot::Loading)
    }
}

/// Scroll-triggered entrance animation. One-shot: once entering, the card
/// never hides again.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reveal {
    Hidden,
    Entering { progress: f32 },
    Shown,
}

impl Reveal {
    /// Starts the animation if it has not run yet.
    pub fn trigger(&mut self) {
        if *self == Reveal::Hidden {
            *self = Reveal::Entering { progress: 0.0 };
        }
    }

    /// Advances one tick; returns whether the animation is still running.
    pub fn advance(&mut self) -> bool {
        if let Reveal::Entering { progress } = self {
            *progress += REVEAL_STEP;
            if *progress >= 1.0 {
                *self = Reveal::Shown;
                return false;
            }
            return true;
        }
        false
    }

    /// Current opacity in `0.0..=1.0`.
    #[must_use]
    pub fn alpha(&self) -> f32 {
        match self {
            Reveal::Hidden => 0.0,
            Reveal::Entering { progress } => progress.min(1.0),
            Reveal::Shown => 1.0,
        }
    }

    /// Remaining upward travel of the entrance animation.
    #[must_use]
    pub fn rise_offset(&self) -> f32 {
        (1.0 - self.alpha()) * REVEAL_RISE
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self, Reveal::Entering { .. })
    }
}

/// One catalogue card.
#[derive(Debug, Clone)]
pub struct Card {
    pub summary: EventSummary,
    pub image: ImageSlot,
    pub reveal: Reveal,
}

impl Card {
    #[must_use]
    pub fn new(summary: EventSummary) -> Self {
        let image = match &summary.image_url {
            Some(url) => ImageSlot::Deferred { url: url.clone() },
            None => ImageSlot::Missing,
        };
        Self {
            summary,
            image,
            reveal: Reveal::Hidden,
        }
    }
}

/// Renders one card at its current reveal state.
pub fn view<'a, Message: 'a>(card: &'a Card, i18n: &'a I18n) -> Element<'a, Message> {
    let alpha = card.reveal.alpha();
    let summary = &card.summary;

    let image: Element<'a, Message> = match &card.image {
        ImageSlot::Loaded(handle) => Image::new(handle.clone())
            .width(Length::Fixed(sizing::CARD_IMAGE))
            .height(Length::Fixed(sizing::CARD_IMAGE))
            .into(),
        _ => image_placeholder(),
    };

    let when = match (
        util::format_date(&summary.start_date),
        util::format_time(&summary.start_date),
    ) {
        (Some(date), Some(time)) => format!("{date} \u{00B7} {time}"),
        (Some(date), None) => date,
        _ => summary.start_date.clone(),
    };

    let mut meta_line = when;
    if let Some(venue) = &summary.venue {
        meta_line.push_str(" \u{00B7} ");
        meta_line.push_str(venue);
    }

    let details = Column::new()
        .spacing(spacing::XXS)
        .push(Text::new(&summary.title).size(typography::TITLE_SM))
        .push(
            Text::new(i18n.tr(summary.kind.heading_key()))
                .size(typography::CAPTION)
                .style(|_theme: &Theme| text::Style {
                    color: Some(palette::PRIMARY_400),
                }),
        )
        .push(Text::new(meta_line).size(typography::CAPTION))
        .push(Text::new(&summary.description).size(typography::BODY_SM));

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(image)
        .push(details);

    // The rise offset shifts content down inside the fixed-height card so
    // the surrounding layout model stays valid during the animation.
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_HEIGHT))
        .padding(Padding {
            top: spacing::SM + card.reveal.rise_offset(),
            right: spacing::MD,
            bottom: spacing::SM,
            left: spacing::MD,
        })
        .style(styles::container::card(alpha))
        .into()
}

fn image_placeholder<'a, Message: 'a>() -> Element<'a, Message> {
    Container::new(text(""))
        .width(Length::Fixed(sizing::CARD_IMAGE))
        .height(Length::Fixed(sizing::CARD_IMAGE))
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            })),
            border: iced::Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}
