use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::primitive::{Primitive, Vertex};
use crate::core::data::screen::Screen;
use crate::core::util::compute_zoom_rect::MAX_ZOOM_FRACTION;

pub const DEFAULT_ZOOM_FRACTION: f64 = 0.25;
pub const MIN_ZOOM_FRACTION: f64 = 0.05;
pub const ZOOM_FRACTION_STEP: f64 = 0.05;

/// Size of the zoom selector as a fraction of the screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ZoomBox {
    fraction: f64,
}

impl Default for ZoomBox {
    fn default() -> Self {
        Self {
            fraction: DEFAULT_ZOOM_FRACTION,
        }
    }
}

impl ZoomBox {
    #[must_use]
    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    pub fn grow(&mut self) {
        if self.fraction < MAX_ZOOM_FRACTION {
            self.fraction = (self.fraction + ZOOM_FRACTION_STEP).min(MAX_ZOOM_FRACTION);
        }
    }

    /// Shrinks by one step but never below a single step.
    pub fn shrink(&mut self) {
        if self.fraction > MIN_ZOOM_FRACTION {
            self.fraction -= ZOOM_FRACTION_STEP;
        }
        if self.fraction <= MIN_ZOOM_FRACTION {
            self.fraction = ZOOM_FRACTION_STEP;
        }
    }

    /// Four red lines framing the box around `centre`, in the coordinates
    /// `centre` is given in.
    #[must_use]
    pub fn outline(&self, centre: Point, screen: Screen) -> Vec<Primitive> {
        let half_width = f64::from(screen.width()) * self.fraction / 2.0;
        let half_height = f64::from(screen.height()) * self.fraction / 2.0;
        let x = f64::from(centre.x);
        let y = f64::from(centre.y);

        let bottom_left = Vertex::new(x - half_width, y - half_height);
        let top_left = Vertex::new(x - half_width, y + half_height);
        let top_right = Vertex::new(x + half_width, y + half_height);
        let bottom_right = Vertex::new(x + half_width, y - half_height);

        vec![
            Primitive::line(bottom_left, top_left, Colour::RED),
            Primitive::line(top_left, top_right, Colour::RED),
            Primitive::line(top_right, bottom_right, Colour::RED),
            Primitive::line(bottom_right, bottom_left, Colour::RED),
        ]
    }
}
