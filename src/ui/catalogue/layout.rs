// SPDX-License-Identifier: MPL-2.0
//! Vertical layout model for the catalogue list.
//!
//! The scrollable renders fixed-height rows, so section offsets and
//! viewport intersection can be computed from the same constants the view
//! uses. Keep [`ROW_SPACING`] in sync with the list column's spacing.

use super::card::Card;
use crate::api::EventKind;
use crate::ui::design_tokens::{sizing, spacing};

/// Vertical gap between rows; must match the view column spacing.
pub const ROW_SPACING: f32 = spacing::SM;

/// Padding above the first row; must match the list container padding.
pub const TOP_PADDING: f32 = spacing::MD;

/// One row of the catalogue list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Slot {
    /// Section heading for an event kind.
    Heading(EventKind),
    /// Card at this index in the catalogue's card vector.
    Card(usize),
}

/// A placed row: what it is and where it sits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedSlot {
    pub slot: Slot,
    pub top: f32,
    pub height: f32,
}

/// The full placed list.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    slots: Vec<PlacedSlot>,
    total_height: f32,
}

impl Layout {
    /// Places headings and cards top to bottom. Cards are expected to be
    /// grouped by kind in [`EventKind::ALL`] order; a heading is emitted
    /// before the first card of each present kind.
    #[must_use]
    pub fn build(cards: &[Card]) -> Self {
        let mut slots = Vec::new();
        let mut cursor = TOP_PADDING;
        let mut current_kind: Option<EventKind> = None;

        for (index, card) in cards.iter().enumerate() {
            let kind = card.summary.kind;
            if current_kind != Some(kind) {
                current_kind = Some(kind);
                slots.push(PlacedSlot {
                    slot: Slot::Heading(kind),
                    top: cursor,
                    height: sizing::SECTION_HEADER_HEIGHT,
                });
                cursor += sizing::SECTION_HEADER_HEIGHT + ROW_SPACING;
            }

            slots.push(PlacedSlot {
                slot: Slot::Card(index),
                top: cursor,
                height: sizing::CARD_HEIGHT,
            });
            cursor += sizing::CARD_HEIGHT + ROW_SPACING;
        }

        let total_height = if slots.is_empty() {
            TOP_PADDING
        } else {
            cursor - ROW_SPACING + TOP_PADDING
        };

        Self {
            slots,
            total_height,
        }
    }

    /// All placed rows, top to bottom.
    #[must_use]
    pub fn slots(&self) -> &[PlacedSlot] {
        &self.slots
    }

    /// Total scrollable content height.
    #[must_use]
    pub fn total_height(&self) -> f32 {
        self.total_height
    }

    /// The top of the heading for a kind, if any card of that kind exists.
    #[must_use]
    pub fn section_offset(&self, kind: EventKind) -> Option<f32> {
        self.slots.iter().find_map(|placed| match placed.slot {
            Slot::Heading(k) if k == kind => Some(placed.top),
            _ => None,
        })
    }

    /// Indices of cards whose rows intersect the given viewport window.
    #[must_use]
    pub fn visible_cards(&self, offset_y: f32, viewport_height: f32) -> Vec<usize> {
        let window_top = offset_y;
        let window_bottom = offset_y + viewport_height;

        self.slots
            .iter()
            .filter_map(|placed| match placed.slot {
                Slot::Card(index)
                    if placed.top < window_bottom && placed.top + placed.height > window_top =>
                {
                    Some(index)
                }
                _ => None,
            })
            .collect()
    }

    /// Largest reachable scroll offset for a viewport of this height.
    #[must_use]
    pub fn max_scroll(&self, viewport_height: f32) -> f32 {
        (self.total_height - viewport_height).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EventSummary;

    fn sample_card(id: u64, kind: EventKind) -> Card {
        Card::new(EventSummary {
            id,
            title: format!("Event {id}"),
            description: String::new(),
            kind,
            venue: None,
            start_date: "2026-09-01T10:00:00".to_string(),
            end_date: "2026-09-01T12:00:00".to_string(),
            image_url: None,
        })
    }

    #[test]
    fn empty_catalogue_has_no_slots() {
        let layout = Layout::build(&[]);
        assert!(layout.slots().is_empty());
        assert!(layout.section_offset(EventKind::Fest).is_none());
    }

    #[test]
    fn heading_precedes_first_card_of_each_kind() {
        let cards = vec![
            sample_card(1, EventKind::Fest),
            sample_card(2, EventKind::Fest),
            sample_card(3, EventKind::Workshop),
        ];
        let layout = Layout::build(&cards);

        let kinds: Vec<_> = layout
            .slots()
            .iter()
            .filter_map(|p| match p.slot {
                Slot::Heading(k) => Some(k),
                Slot::Card(_) => None,
            })
            .collect();
        assert_eq!(kinds, [EventKind::Fest, EventKind::Workshop]);
    }

    #[test]
    fn section_offset_matches_heading_position() {
        let cards = vec![
            sample_card(1, EventKind::Fest),
            sample_card(2, EventKind::Workshop),
        ];
        let layout = Layout::build(&cards);

        let expected = TOP_PADDING
            + sizing::SECTION_HEADER_HEIGHT
            + ROW_SPACING
            + sizing::CARD_HEIGHT
            + ROW_SPACING;
        assert_eq!(layout.section_offset(EventKind::Workshop), Some(expected));
    }

    #[test]
    fn missing_section_has_no_offset() {
        let cards = vec![sample_card(1, EventKind::Fest)];
        let layout = Layout::build(&cards);
        assert!(layout.section_offset(EventKind::Webinar).is_none());
    }

    #[test]
    fn visible_cards_excludes_rows_outside_the_window() {
        let cards: Vec<_> = (0..10).map(|i| sample_card(i, EventKind::Fest)).collect();
        let layout = Layout::build(&cards);

        // A window barely taller than one card sees the first card (and
        // not the tenth).
        let first_card_top = TOP_PADDING + sizing::SECTION_HEADER_HEIGHT + ROW_SPACING;
        let visible = layout.visible_cards(first_card_top, sizing::CARD_HEIGHT);
        assert!(visible.contains(&0));
        assert!(!visible.contains(&9));
    }

    #[test]
    fn visible_cards_includes_partially_overlapping_rows() {
        let cards: Vec<_> = (0..4).map(|i| sample_card(i, EventKind::Fest)).collect();
        let layout = Layout::build(&cards);

        let first_card_top = TOP_PADDING + sizing::SECTION_HEADER_HEIGHT + ROW_SPACING;
        // Scroll so the first card is half off the top of the window.
        let offset = first_card_top + sizing::CARD_HEIGHT / 2.0;
        let visible = layout.visible_cards(offset, 400.0);
        assert!(visible.contains(&0));
    }

    #[test]
    fn max_scroll_is_zero_for_short_content() {
        let cards = vec![sample_card(1, EventKind::Fest)];
        let layout = Layout::build(&cards);
        assert_eq!(layout.max_scroll(10_000.0), 0.0);
    }
}
