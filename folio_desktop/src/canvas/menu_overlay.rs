use std::marker::PhantomData;

use iced::mouse;
use iced::widget::canvas::{self, Geometry, Path};
use iced::{Color, Point, Rectangle, Size, Theme};

use crate::animation::MenuState;
use crate::constants::NAV_PANEL_WIDTH;
use crate::theme::PaletteColors;

/// Canvas program for the navigation overlay backdrop.
///
/// Dims the page and slides a panel in from the right edge, with a thin
/// accent seam along the panel's leading edge.
pub struct MenuOverlay<'a, Message> {
    pub state: &'a MenuState,
    pub palette: PaletteColors,
    pub _marker: PhantomData<Message>,
}

impl<'a, Message> MenuOverlay<'a, Message> {
    pub fn new(state: &'a MenuState, palette: PaletteColors) -> Self {
        Self {
            state,
            palette,
            _marker: PhantomData,
        }
    }
}

impl<'a, Message> canvas::Program<Message> for MenuOverlay<'a, Message> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let backdrop = self.state.cache.draw(renderer, bounds.size(), |frame| {
            let progress = self.state.progress();
            if progress < 0.01 {
                return;
            }

            let eased = ease_out_cubic(progress.min(1.0));

            // Dim everything behind the panel.
            let dim = Path::rectangle(Point::ORIGIN, bounds.size());
            frame.fill(
                &dim,
                Color {
                    a: 0.45 * eased,
                    ..Color::BLACK
                },
            );

            // Panel slides in from the right.
            let panel_width = NAV_PANEL_WIDTH.min(bounds.width);
            let panel_x = bounds.width - panel_width * eased;
            let panel = Path::rectangle(
                Point::new(panel_x, 0.0),
                Size::new(bounds.width - panel_x, bounds.height),
            );
            frame.fill(
                &panel,
                Color {
                    a: 0.98 * eased,
                    ..self.palette.surface
                },
            );

            // Accent seam on the leading edge.
            if eased > 0.2 {
                let seam = Path::rectangle(
                    Point::new(panel_x, 0.0),
                    Size::new(2.0, bounds.height),
                );
                frame.fill(
                    &seam,
                    Color {
                        a: 0.6 * eased,
                        ..self.palette.accent
                    },
                );
            }
        });
        vec![backdrop]
    }
}

/// Cubic ease-out for smooth deceleration
fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}
