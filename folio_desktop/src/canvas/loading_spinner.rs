use std::f32::consts::PI;
use std::marker::PhantomData;

use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};

use crate::animation::LoadingState;
use crate::constants::LOADING_SPINNER_SIZE;
use crate::theme::PaletteColors;

/// Canvas program for the startup loading overlay.
///
/// Draws the full-surface backdrop and an orbital-dot spinner in one
/// pass; the whole overlay fades with the loading state's opacity and
/// leaves the tree once the fade completes.
pub struct LoadingSpinner<'a, Message> {
    pub state: &'a LoadingState,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> LoadingSpinner<'a, Message> {
    pub fn new(state: &'a LoadingState, palette: PaletteColors) -> Self {
        Self {
            state,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for LoadingSpinner<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let overlay = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let opacity = self.state.opacity();
            if opacity <= 0.01 {
                return;
            }

            let backdrop = Path::rectangle(Point::ORIGIN, bounds.size());
            frame.fill(
                &backdrop,
                Color {
                    a: opacity,
                    ..self.palette.background
                },
            );

            // Orbital dots with a trailing shimmer.
            let center = frame.center();
            let time = self.state.spinner_tick;
            let dots = 8;
            let radius = LOADING_SPINNER_SIZE * 0.7;
            let dot_size = LOADING_SPINNER_SIZE * 0.15;

            for i in 0..dots {
                let progress = i as f32 / dots as f32;
                let angle = progress * 2.0 * PI + time * 3.0;

                let x = center.x + angle.cos() * radius;
                let y = center.y + angle.sin() * radius;

                let t = ((time * 3.0 + progress * 2.0 * PI) % (2.0 * PI)) / (2.0 * PI);
                let alpha = (0.3 + (t.sin() * 0.5 + 0.5) * 0.7) * opacity;

                let dot = Path::circle(Point::new(x, y), dot_size);
                frame.fill(
                    &dot,
                    Color {
                        a: alpha,
                        ..self.palette.accent
                    },
                );

                let halo = Path::circle(Point::new(x, y), dot_size * 2.0);
                frame.fill(
                    &halo,
                    Color {
                        a: alpha * 0.2,
                        ..self.palette.glow
                    },
                );
            }
        });
        vec![overlay]
    }
}
