use crate::core::data::complex::Complex;
use crate::core::data::point::Point;
use crate::core::data::screen::Screen;
use crate::core::data::view_rect::ViewRect;
use std::error::Error;
use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PixelToPlaneError {
    PointOutsideScreen { point: Point, screen: Screen },
}

impl fmt::Display for PixelToPlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PointOutsideScreen { point, screen } => {
                write!(
                    f,
                    "point (x: {}, y: {}) is outside the {}x{} screen",
                    point.x,
                    point.y,
                    screen.width(),
                    screen.height()
                )
            }
        }
    }
}

impl Error for PixelToPlaneError {}

/// Maps a pixel to the plane by linear interpolation across the view.
///
/// Pixel `(0, 0)` lands on `(real_min, imag_min)`; the far edges are
/// exclusive, so the last pixel stops one step short of `real_max`/`imag_max`.
pub fn pixel_to_plane(
    pixel_position: Point,
    view: ViewRect,
    screen: Screen,
) -> Result<Complex, PixelToPlaneError> {
    if !screen.contains_point(pixel_position) {
        return Err(PixelToPlaneError::PointOutsideScreen {
            point: pixel_position,
            screen,
        });
    }

    Ok(interpolate(
        f64::from(pixel_position.x),
        f64::from(pixel_position.y),
        view,
        screen,
    ))
}

/// Unchecked interpolation; coordinates may lie off screen or between pixels.
pub(crate) fn interpolate(x: f64, y: f64, view: ViewRect, screen: Screen) -> Complex {
    let real = (x / f64::from(screen.width())) * view.width() + view.real_min();
    let imag = (y / f64::from(screen.height())) * view.height() + view.imag_min();

    Complex { real, imag }
}
