use std::f32::consts::PI;
use std::marker::PhantomData;

use iced::advanced::graphics::gradient;
use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path, Stroke};
use iced::{Color, Point, Rectangle, Size, Theme};

use crate::animation::TiltCardState;
use crate::theme::PaletteColors;

/// Canvas program for tilt-responsive project cards.
///
/// The tilt renders as a 2D approximation: the card face shifts a few
/// pixels against the pointer and grows slightly while hovered, with a
/// pulsing accent border and a pointer-following glare sweep.
pub struct TiltCard<'a, Message> {
    pub state: &'a TiltCardState,
    pub base_color: Color,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> TiltCard<'a, Message> {
    pub fn new(state: &'a TiltCardState, base_color: Color, palette: PaletteColors) -> Self {
        Self {
            state,
            base_color,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for TiltCard<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let card = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let (angle_x, angle_y) = self.state.tilt_angles(bounds.width, bounds.height);

            // Degrees to pixels of face shift; leave grows the inset back.
            let shift_x = -angle_y * 0.8;
            let shift_y = angle_x * 0.8;
            let inset = if self.state.is_hovered { 2.0 } else { 6.0 };

            let origin = Point::new(inset + shift_x, inset + shift_y);
            let face = Size::new(bounds.width - inset * 2.0, bounds.height - inset * 2.0);
            let card_path = Path::rectangle(origin, face);

            frame.fill(&card_path, self.base_color);

            // Border pulses while hovered.
            let pulse = (self.state.hover_tick.sin() + 1.0) * 0.5;
            let border_alpha = if self.state.is_hovered {
                0.8 + 0.2 * pulse
            } else {
                0.15
            };
            let border_color = if self.state.is_hovered {
                self.palette.accent
            } else {
                self.palette.border
            };
            let stroke_width = if self.state.is_hovered { 2.0 } else { 1.0 };

            frame.stroke(
                &card_path,
                Stroke::default()
                    .with_color(Color {
                        a: border_alpha,
                        ..border_color
                    })
                    .with_width(stroke_width),
            );

            // Glare sweep tracks the pointer.
            if self.state.is_hovered {
                let center = frame.center();
                let dx = (self.state.mouse_position.x - center.x) / (bounds.width / 2.0);
                let dy = (self.state.mouse_position.y - center.y) / (bounds.height / 2.0);

                let angle = dx * 0.5 + PI / 4.0;
                let glare_len = bounds.width * 1.5;
                let cx = center.x + dx * bounds.width * 0.2;
                let cy = center.y + dy * bounds.height * 0.2;

                let start = Point::new(
                    cx + angle.cos() * glare_len * 0.5,
                    cy + angle.sin() * glare_len * 0.5,
                );
                let end = Point::new(
                    cx - angle.cos() * glare_len * 0.5,
                    cy - angle.sin() * glare_len * 0.5,
                );

                let glare = gradient::Linear::new(start, end)
                    .add_stop(0.0, Color::TRANSPARENT)
                    .add_stop(
                        0.5,
                        Color {
                            a: 0.1,
                            ..Color::WHITE
                        },
                    )
                    .add_stop(1.0, Color::TRANSPARENT);

                frame.fill(&card_path, glare);
            }
        });
        vec![card]
    }
}
