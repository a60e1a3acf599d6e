use std::error::Error;
use std::fmt;

use crate::core::data::point::Point;
use crate::core::data::screen::Screen;
use crate::core::data::view_rect::{ViewRect, ViewRectError};
use crate::core::util::pixel_to_plane::interpolate;

pub const MAX_ZOOM_FRACTION: f64 = 1.0;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ZoomError {
    InvalidZoomFraction { fraction: f64 },
    View(ViewRectError),
}

impl fmt::Display for ZoomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidZoomFraction { fraction } => {
                write!(f, "zoom fraction must be greater than zero, got {}", fraction)
            }
            Self::View(err) => write!(f, "zoomed view is invalid: {}", err),
        }
    }
}

impl Error for ZoomError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidZoomFraction { .. } => None,
            Self::View(err) => Some(err),
        }
    }
}

impl From<ViewRectError> for ZoomError {
    fn from(err: ViewRectError) -> Self {
        Self::View(err)
    }
}

/// Computes the view covered by a zoom box centred on `centre`.
///
/// The box spans `screen * zoom_fraction` pixels in each direction; its
/// corners are mapped back through the current view. Fractions above 1.0
/// are clamped to 1.0 and `centre` uses bottom-origin rows.
pub fn compute_zoom_rect(
    view: ViewRect,
    screen: Screen,
    centre: Point,
    zoom_fraction: f64,
) -> Result<ViewRect, ZoomError> {
    if !(zoom_fraction > 0.0) {
        return Err(ZoomError::InvalidZoomFraction {
            fraction: zoom_fraction,
        });
    }

    let fraction = zoom_fraction.min(MAX_ZOOM_FRACTION);
    let half_width = f64::from(screen.width()) / 2.0 * fraction;
    let half_height = f64::from(screen.height()) / 2.0 * fraction;
    let x = f64::from(centre.x);
    let y = f64::from(centre.y);

    let lower = interpolate(x - half_width, y - half_height, view, screen);
    let upper = interpolate(x + half_width, y + half_height, view, screen);

    Ok(ViewRect::new(lower.real, upper.real, lower.imag, upper.imag)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    fn setup() -> (ViewRect, Screen) {
        (
            ViewRect::new(-2.0, 2.0, -1.5, 1.5).unwrap(),
            Screen::new(400, 300).unwrap(),
        )
    }

    #[test]
    fn test_zoom_on_centre_shrinks_around_centre() {
        let (view, screen) = setup();

        let zoomed = compute_zoom_rect(view, screen, Point { x: 200, y: 150 }, 0.25).unwrap();

        assert!((zoomed.real_min() + 0.5).abs() < EPSILON);
        assert!((zoomed.real_max() - 0.5).abs() < EPSILON);
        assert!((zoomed.imag_min() + 0.375).abs() < EPSILON);
        assert!((zoomed.imag_max() - 0.375).abs() < EPSILON);
    }

    #[test]
    fn test_zoom_preserves_aspect_ratio() {
        let (view, screen) = setup();

        let zoomed = compute_zoom_rect(view, screen, Point { x: 37, y: 201 }, 0.1).unwrap();

        assert!((zoomed.height() / zoomed.width() - view.height() / view.width()).abs() < 1e-9);
        assert!((zoomed.width() - view.width() * 0.1).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_off_centre_moves_view() {
        let (view, screen) = setup();

        let zoomed = compute_zoom_rect(view, screen, Point { x: 300, y: 75 }, 0.5).unwrap();

        // Pixel (300, 75) maps to (1.0, -0.75).
        assert!((zoomed.centre().real - 1.0).abs() < EPSILON);
        assert!((zoomed.centre().imag + 0.75).abs() < EPSILON);
    }

    #[test]
    fn test_zoom_fraction_is_clamped_to_one() {
        let (view, screen) = setup();
        let centre = Point { x: 200, y: 150 };

        let clamped = compute_zoom_rect(view, screen, centre, 3.0).unwrap();
        let full = compute_zoom_rect(view, screen, centre, 1.0).unwrap();

        assert_eq!(clamped, full);
        assert!((full.real_min() - view.real_min()).abs() < EPSILON);
        assert!((full.imag_max() - view.imag_max()).abs() < EPSILON);
    }

    #[test]
    fn test_non_positive_zoom_fraction_fails() {
        let (view, screen) = setup();
        let centre = Point { x: 200, y: 150 };

        assert_eq!(
            compute_zoom_rect(view, screen, centre, 0.0),
            Err(ZoomError::InvalidZoomFraction { fraction: 0.0 })
        );
        assert!(compute_zoom_rect(view, screen, centre, -0.5).is_err());
        assert!(compute_zoom_rect(view, screen, centre, f64::NAN).is_err());
    }
}
