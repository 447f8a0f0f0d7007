// SPDX-License-Identifier: MPL-2.0
//! Canvas-drawn busy spinner.
//!
//! A ring of dots whose opacity trails behind the rotation angle. The
//! caller owns the angle and advances it from the tick subscription, so
//! the widget itself stays stateless between frames.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::TAU;

/// Number of dots in the ring.
const DOT_COUNT: usize = 8;

/// Dot radius relative to the ring radius.
const DOT_SCALE: f32 = 0.18;

/// Animated spinner driven by an externally owned rotation angle.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    /// Wraps the spinner in a fixed-size Canvas widget.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let ring_radius = frame.width().min(frame.height()) / 2.0 - 4.0;
                let dot_radius = ring_radius * DOT_SCALE;

                #[allow(clippy::cast_precision_loss)]
                for i in 0..DOT_COUNT {
                    let step = i as f32 / DOT_COUNT as f32;
                    let angle = self.rotation + step * TAU;

                    // Opacity falls off with distance behind the leading dot.
                    let alpha = 0.15 + 0.85 * (1.0 - step);

                    let dot = Path::circle(
                        Point::new(
                            center.x + ring_radius * angle.cos(),
                            center.y + ring_radius * angle.sin(),
                        ),
                        dot_radius,
                    );
                    frame.fill(
                        &dot,
                        Color {
                            a: alpha,
                            ..self.color
                        },
                    );
                }
            });

        vec![geometry]
    }
}
