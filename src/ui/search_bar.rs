// SPDX-License-Identifier: MPL-2.0
//! Debounced search input for the event catalogue.
//!
//! Every edit bumps a generation counter and asks the app to schedule a
//! delayed wake-up carrying that generation; only the wake-up matching
//! the latest generation fires the search, which gives restart-on-input
//! debounce semantics without cancelling timers.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing};
use iced::widget::text_input;
use iced::{Element, Length};
use std::time::Duration;

/// Quiet period after the last keystroke before a search fires.
pub const DEBOUNCE_DELAY: Duration = Duration::from_millis(300);

/// Queries shorter than this never fire.
pub const MIN_QUERY_LEN: usize = 2;

/// Search input state.
#[derive(Debug, Clone, Default)]
pub struct State {
    input: String,
    generation: u64,
}

/// Messages emitted by the search input.
#[derive(Debug, Clone)]
pub enum Message {
    InputChanged(String),
    /// A scheduled debounce wake-up landed; carries the generation it was
    /// scheduled for.
    DebounceElapsed(u64),
}

/// Effects the parent application must act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Schedule a `DebounceElapsed(generation)` after [`DEBOUNCE_DELAY`].
    ScheduleDebounce(u64),
    /// Run the search with this query.
    Search(String),
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Current debounce generation.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Handles a message and returns the effect for the parent.
    pub fn handle_message(&mut self, message: Message) -> Effect {
        match message {
            Message::InputChanged(value) => {
                self.input = value;
                self.generation += 1;
                Effect::ScheduleDebounce(self.generation)
            }
            Message::DebounceElapsed(generation) => {
                // A newer keystroke superseded this wake-up.
                if generation != self.generation {
                    return Effect::None;
                }

                let query = self.input.trim();
                if query.chars().count() < MIN_QUERY_LEN {
                    return Effect::None;
                }

                Effect::Search(query.to_string())
            }
        }
    }
}

/// Renders the search input.
pub fn view<'a>(state: &'a State, i18n: &'a I18n) -> Element<'a, Message> {
    text_input(&i18n.tr("search-placeholder"), &state.input)
        .on_input(Message::InputChanged)
        .padding(spacing::XS)
        .width(Length::Fixed(sizing::SEARCH_WIDTH))
        .into()
}
