// SPDX-License-Identifier: MPL-2.0
//! Full-surface busy overlay with animated spinner.
//!
//! The app owns exactly one `State`, so at most one overlay can exist at
//! a time. Showing while already visible is a no-op.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{Column, Container, Text};
use iced::{Element, Length};
use std::time::Instant;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.1;

/// Busy overlay state.
#[derive(Debug, Clone, Default)]
pub struct State {
    active: bool,
    started_at: Option<Instant>,
    spinner_rotation: f32,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates the overlay. Already-active overlays keep their start
    /// time and rotation.
    pub fn show(&mut self) {
        if !self.active {
            self.active = true;
            self.started_at = Some(Instant::now());
            self.spinner_rotation = 0.0;
        }
    }

    /// Deactivates the overlay.
    pub fn hide(&mut self) {
        self.active = false;
        self.started_at = None;
        self.spinner_rotation = 0.0;
    }

    /// Advances the spinner animation while active.
    pub fn tick(&mut self) {
        if self.active {
            self.spinner_rotation += SPINNER_SPEED;
            if self.spinner_rotation > std::f32::consts::TAU {
                self.spinner_rotation -= std::f32::consts::TAU;
            }
        }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// When the overlay became visible, if it is.
    #[must_use]
    pub fn started_at(&self) -> Option<Instant> {
        self.started_at
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}

/// Renders the dimmed backdrop with a centered spinner panel.
pub fn view<'a, Message: 'static>(state: &State, i18n: &I18n) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_400, state.spinner_rotation()).into_element();

    let label = Text::new(i18n.tr("overlay-loading")).size(typography::BODY);

    let panel = Container::new(
        Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(spinner)
            .push(label),
    )
    .padding(spacing::XL)
    .style(styles::container::panel);

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_activates_and_stamps_start() {
        let mut state = State::new();
        assert!(!state.is_active());

        state.show();
        assert!(state.is_active());
        assert!(state.started_at().is_some());
    }

    #[test]
    fn show_while_active_keeps_original_start() {
        let mut state = State::new();
        state.show();
        let first = state.started_at();
        state.tick();

        state.show();
        assert_eq!(state.started_at(), first);
        assert!(state.spinner_rotation() > 0.0);
    }

    #[test]
    fn hide_clears_state() {
        let mut state = State::new();
        state.show();
        state.tick();
        state.hide();

        assert!(!state.is_active());
        assert!(state.started_at().is_none());
        assert_eq!(state.spinner_rotation(), 0.0);
    }

    #[test]
    fn tick_only_advances_while_active() {
        let mut state = State::new();
        state.tick();
        assert_eq!(state.spinner_rotation(), 0.0);

        state.show();
        state.tick();
        assert!(state.spinner_rotation() > 0.0);
    }
}
