// SPDX-License-Identifier: MPL-2.0
//! Event catalogue: a scrollable, sectioned list of events.
//!
//! Owns the three scroll-coupled behaviors:
//! - section links animate the scrollable to a section heading,
//! - card images load the first time their row enters the viewport,
//! - cards play a one-shot entrance animation on first visibility.
//!
//! Viewport intersection works off the fixed-height [`layout`] model
//! rather than measuring widgets, so all of it is testable headlessly.

pub mod card;
pub mod layout;

pub use card::{Card, ImageSlot, Reveal};

use crate::api::{EventKind, EventSummary};
use crate::error::ApiError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::util::Throttle;
use iced::alignment::Vertical;
use iced::widget::scrollable::{RelativeOffset, Viewport};
use iced::widget::{operation, Column, Container, Id, Scrollable, Text};
use iced::{Element, Length, Padding, Task};
use layout::{Layout, Slot};
use std::time::{Duration, Instant};

/// Identifier of the catalogue scrollable widget.
pub const SCROLLABLE_ID: &str = "catalogue-scrollable";

/// Duration of the eased section-link scroll.
const SCROLL_DURATION: Duration = Duration::from_millis(400);

/// Minimum gap between visibility scans driven by scroll events.
const SCAN_THROTTLE: Duration = Duration::from_millis(100);

/// Assumed viewport height before the first scroll event reports one.
const FALLBACK_VIEWPORT_HEIGHT: f32 = 600.0;

/// An in-flight section scroll.
#[derive(Debug, Clone, Copy)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
}

/// Messages emitted by the catalogue.
#[derive(Debug, Clone)]
pub enum Message {
    /// The scrollable reported a new viewport.
    Scrolled {
        offset_y: f32,
        viewport_height: f32,
    },
    /// A navbar section link was clicked.
    SectionLinkClicked(EventKind),
}

/// Effects the parent application must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Start fetching these card images (card index, deferred URL).
    FetchImages(Vec<(usize, String)>),
}

/// Catalogue state.
#[derive(Debug)]
pub struct State {
    cards: Vec<Card>,
    layout: Layout,
    offset_y: f32,
    viewport_height: Option<f32>,
    scroll_anim: Option<ScrollAnimation>,
    scan_throttle: Throttle,
}

impl Default for State {
    fn default() -> Self {
        Self {
            cards: Vec::new(),
            layout: Layout::default(),
            offset_y: 0.0,
            viewport_height: None,
            scroll_anim: None,
            scan_throttle: Throttle::new(SCAN_THROTTLE),
        }
    }
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the catalogue contents, resetting scroll position.
    ///
    /// Returns the initial visibility effect plus a task snapping the
    /// scrollable back to the top.
    pub fn set_events(&mut self, events: Vec<EventSummary>) -> (Effect, Task<Message>) {
        let mut events = events;
        events.sort_by_key(|event| {
            let order = EventKind::ALL
                .iter()
                .position(|kind| *kind == event.kind)
                .unwrap_or(EventKind::ALL.len());
            (order, event.start_date.clone())
        });

        self.cards = events.into_iter().map(Card::new).collect();
        self.layout = Layout::build(&self.cards);
        self.offset_y = 0.0;
        self.scroll_anim = None;
        self.scan_throttle.reset();

        let scroll_task = operation::snap_to(
            Id::new(SCROLLABLE_ID),
            RelativeOffset { x: 0.0, y: 0.0 },
        );
        (self.scan(), scroll_task)
    }

    /// Handles a catalogue message.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::Scrolled {
                offset_y,
                viewport_height,
            } => {
                self.offset_y = offset_y;
                self.viewport_height = Some(viewport_height);

                if self.scan_throttle.try_fire() {
                    self.scan()
                } else {
                    Effect::None
                }
            }
            Message::SectionLinkClicked(kind) => {
                // A link to a section with no events is a silent no-op.
                if let Some(target) = self.layout.section_offset(kind) {
                    let max = self.layout.max_scroll(self.viewport_height());
                    self.scroll_anim = Some(ScrollAnimation {
                        from: self.offset_y,
                        to: target.min(max),
                        started_at: Instant::now(),
                    });
                }
                Effect::None
            }
        }
    }

    /// Advances animations one tick. Returns the visibility effect of any
    /// scroll movement plus the snap task positioning the scrollable.
    pub fn tick(&mut self, now: Instant) -> (Effect, Task<Message>) {
        for card in &mut self.cards {
            card.reveal.advance();
        }

        let Some(anim) = self.scroll_anim else {
            return (Effect::None, Task::none());
        };

        let elapsed = now.saturating_duration_since(anim.started_at);
        let t = (elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32()).min(1.0);
        self.offset_y = anim.from + (anim.to - anim.from) * ease_out_cubic(t);

        if t >= 1.0 {
            self.offset_y = anim.to;
            self.scroll_anim = None;
        }

        let max = self.layout.max_scroll(self.viewport_height());
        let relative_y = if max > 0.0 { self.offset_y / max } else { 0.0 };
        let snap = operation::snap_to(
            Id::new(SCROLLABLE_ID),
            RelativeOffset {
                x: 0.0,
                y: relative_y,
            },
        );

        (self.scan(), snap)
    }

    /// Records the result of an image fetch.
    pub fn image_loaded(&mut self, index: usize, result: Result<Vec<u8>, ApiError>) {
        let Some(entry) = self.cards.get_mut(index) else {
            return;
        };

        match result {
            Ok(bytes) => {
                entry.image = ImageSlot::Loaded(iced::widget::image::Handle::from_bytes(bytes));
            }
            Err(err) => {
                log::warn!(
                    "image fetch failed for event {}: {}",
                    entry.summary.id,
                    err
                );
                entry.image = ImageSlot::Missing;
            }
        }
    }

    /// Whether a tick subscription is needed to keep animations moving.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.scroll_anim.is_some() || self.cards.iter().any(|card| card.reveal.is_animating())
    }

    /// The cards, in layout order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Current scroll offset tracked from viewport events and animation.
    #[must_use]
    pub fn offset_y(&self) -> f32 {
        self.offset_y
    }

    fn viewport_height(&self) -> f32 {
        self.viewport_height.unwrap_or(FALLBACK_VIEWPORT_HEIGHT)
    }

    /// Promotes every card intersecting the viewport: reveals start and
    /// deferred images move to loading.
    fn scan(&mut self) -> Effect {
        let visible = self
            .layout
            .visible_cards(self.offset_y, self.viewport_height());

        let mut requests = Vec::new();
        for index in visible {
            if let Some(entry) = self.cards.get_mut(index) {
                entry.reveal.trigger();
                if let Some(url) = entry.image.begin_loading() {
                    requests.push((index, url));
                }
            }
        }

        if requests.is_empty() {
            Effect::None
        } else {
            Effect::FetchImages(requests)
        }
    }
}

/// Cubic ease-out curve.
fn ease_out_cubic(t: f32) -> f32 {
    let inv = 1.0 - t.clamp(0.0, 1.0);
    1.0 - inv * inv * inv
}

/// Renders the catalogue list.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    if state.cards.is_empty() {
        return Container::new(Text::new(i18n.tr("catalogue-empty")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let mut list = Column::new().spacing(layout::ROW_SPACING);
    for placed in state.layout.slots() {
        match placed.slot {
            Slot::Heading(kind) => {
                list = list.push(
                    Container::new(Text::new(i18n.tr(kind.heading_key())).size(typography::TITLE_MD))
                        .height(Length::Fixed(sizing::SECTION_HEADER_HEIGHT))
                        .align_y(Vertical::Bottom),
                );
            }
            Slot::Card(index) => {
                list = list.push(card::view(&state.cards[index], i18n));
            }
        }
    }

    let content = Container::new(list).padding(Padding {
        top: layout::TOP_PADDING,
        right: spacing::MD,
        bottom: layout::TOP_PADDING,
        left: spacing::MD,
    });

    Scrollable::new(content)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(|viewport: Viewport| {
            let bounds = viewport.bounds();
            Message::Scrolled {
                offset_y: viewport.absolute_offset().y,
                viewport_height: bounds.height,
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EventSummary;

    fn sample_events(count: u64, kind: EventKind) -> Vec<EventSummary> {
        (0..count)
            .map(|id| EventSummary {
                id,
                title: format!("Event {id}"),
                description: String::new(),
                kind,
                venue: None,
                start_date: format!("2026-09-{:02}T10:00:00", id + 1),
                end_date: format!("2026-09-{:02}T12:00:00", id + 1),
                image_url: Some(format!("/static/img/event-{id}.png")),
            })
            .collect()
    }

    #[test]
    fn set_events_promotes_only_initially_visible_cards() {
        let mut state = State::new();
        let (effect, _task) = state.set_events(sample_events(10, EventKind::Fest));

        let Effect::FetchImages(requests) = effect else {
            panic!("expected initial image requests");
        };
        let indices: Vec<_> = requests.iter().map(|(i, _)| *i).collect();
        assert!(indices.contains(&0));

        // Far-below-the-fold cards stay deferred until scrolled to.
        assert!(state.cards()[9].image.is_deferred());
        assert_eq!(state.cards()[9].reveal, Reveal::Hidden);
    }

    #[test]
    fn scrolling_down_promotes_further_cards() {
        let mut state = State::new();
        let _ = state.set_events(sample_events(10, EventKind::Fest));

        let effect = state.handle_message(Message::Scrolled {
            offset_y: 1000.0,
            viewport_height: 600.0,
        });

        let Effect::FetchImages(requests) = effect else {
            panic!("expected image requests after scroll");
        };
        let indices: Vec<_> = requests.iter().map(|(i, _)| *i).collect();
        assert!(indices.contains(&9));
        assert!(indices.iter().all(|i| *i > 0));
    }

    #[test]
    fn scroll_scans_are_throttled() {
        let mut state = State::new();
        let _ = state.set_events(sample_events(20, EventKind::Fest));

        let first = state.handle_message(Message::Scrolled {
            offset_y: 800.0,
            viewport_height: 600.0,
        });
        assert_ne!(first, Effect::None);

        // Immediately after, the throttle swallows the scan.
        let second = state.handle_message(Message::Scrolled {
            offset_y: 1600.0,
            viewport_height: 600.0,
        });
        assert_eq!(second, Effect::None);
    }

    #[test]
    fn promotion_is_one_shot_per_card() {
        let mut state = State::new();
        let _ = state.set_events(sample_events(3, EventKind::Fest));

        // Everything is visible in the fallback viewport; a re-scan at the
        // same position must not request the same images again.
        let effect = state.handle_message(Message::Scrolled {
            offset_y: 0.0,
            viewport_height: 600.0,
        });
        assert_eq!(effect, Effect::None);
    }

    #[test]
    fn section_link_to_missing_section_is_a_no_op() {
        let mut state = State::new();
        let _ = state.set_events(sample_events(3, EventKind::Fest));
        let offset_before = state.offset_y();

        let effect = state.handle_message(Message::SectionLinkClicked(EventKind::Webinar));

        assert_eq!(effect, Effect::None);
        assert!(!state.is_animating());
        assert_eq!(state.offset_y(), offset_before);
    }

    #[test]
    fn section_link_starts_an_eased_scroll() {
        let mut state = State::new();
        let mut events = sample_events(6, EventKind::Fest);
        events.extend(sample_events(6, EventKind::Workshop));
        let _ = state.set_events(events);
        state.handle_message(Message::Scrolled {
            offset_y: 0.0,
            viewport_height: 400.0,
        });

        state.handle_message(Message::SectionLinkClicked(EventKind::Workshop));
        assert!(state.is_animating());

        // Mid-animation the offset moves toward the target.
        let (_, _task) = state.tick(Instant::now() + SCROLL_DURATION / 2);
        assert!(state.offset_y() > 0.0);

        // After the full duration the animation settles and clears.
        let (_, _task) = state.tick(Instant::now() + SCROLL_DURATION * 2);
        assert!(state.scroll_anim.is_none());
    }

    #[test]
    fn image_loaded_failure_marks_slot_missing() {
        let mut state = State::new();
        let _ = state.set_events(sample_events(1, EventKind::Fest));

        state.image_loaded(0, Err(ApiError::Timeout));
        assert!(matches!(state.cards()[0].image, ImageSlot::Missing));
    }

    #[test]
    fn image_loaded_out_of_range_is_ignored() {
        let mut state = State::new();
        let _ = state.set_events(sample_events(1, EventKind::Fest));
        state.image_loaded(42, Ok(vec![1, 2, 3]));
    }

    #[test]
    fn reveal_animation_finishes_and_stops_ticking() {
        let mut state = State::new();
        let _ = state.set_events(sample_events(1, EventKind::Fest));
        assert!(state.is_animating());

        for _ in 0..20 {
            let _ = state.tick(Instant::now());
        }
        assert!(!state.is_animating());
        assert_eq!(state.cards()[0].reveal, Reveal::Shown);
    }

    #[test]
    fn ease_out_cubic_is_monotonic_and_bounded() {
        assert_eq!(ease_out_cubic(0.0), 0.0);
        assert!((ease_out_cubic(1.0) - 1.0).abs() < f32::EPSILON);
        assert!(ease_out_cubic(0.25) < ease_out_cubic(0.5));
        assert!(ease_out_cubic(0.5) > 0.5); // ease-out front-loads movement
    }
}
