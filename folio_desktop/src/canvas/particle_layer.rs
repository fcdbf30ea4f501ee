use std::marker::PhantomData;

use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Theme};

use crate::animation::ParticleLayerState;
use crate::theme::PaletteColors;

/// Canvas program for the drifting particle backdrop.
///
/// Every frame starts from a cleared surface and refills one circle per
/// particle, in insertion order, tinted with the palette accent at the
/// particle's own opacity.
pub struct ParticleLayer<'a, Message> {
    pub state: &'a ParticleLayerState,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> ParticleLayer<'a, Message> {
    pub fn new(state: &'a ParticleLayerState, palette: PaletteColors) -> Self {
        Self {
            state,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for ParticleLayer<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let layer = self.state.cache.draw(renderer, bounds.size(), |frame| {
            for particle in self.state.field.particles() {
                let dot = Path::circle(Point::new(particle.x, particle.y), particle.size);
                frame.fill(
                    &dot,
                    Color {
                        a: particle.opacity,
                        ..self.palette.accent
                    },
                );
            }
        });
        vec![layer]
    }
}
