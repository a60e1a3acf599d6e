use std::error::Error;
use std::fmt;

use crate::core::data::point::Point;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScreenError {
    InvalidSize { width: u32, height: u32 },
}

impl fmt::Display for ScreenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "screen size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ScreenError {}

/// Pixel resolution of the drawing surface.
///
/// Pixels are addressed `0..width` by `0..height`. Rows count upwards from
/// the bottom edge, matching the imaginary axis of the plane.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Screen {
    width: u32,
    height: u32,
}

impl Screen {
    pub fn new(width: u32, height: u32) -> Result<Self, ScreenError> {
        if width == 0 || height == 0 || width > i32::MAX as u32 || height > i32::MAX as u32 {
            return Err(ScreenError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    #[must_use]
    pub fn contains_point(&self, point: Point) -> bool {
        point.x >= 0
            && point.y >= 0
            && (point.x as u32) < self.width
            && (point.y as u32) < self.height
    }

    /// Converts between top-origin rows (window input) and bottom-origin rows.
    /// Rows far outside the screen saturate instead of wrapping.
    #[must_use]
    pub fn flip_y(&self, y: i32) -> i32 {
        i32::try_from(self.height)
            .unwrap_or(i32::MAX)
            .saturating_sub(y)
    }

    /// Every pixel, row by row from row 0.
    pub fn pixels(&self) -> impl Iterator<Item = Point> + use<> {
        let width = self.width as i32;
        let height = self.height as i32;

        (0..height).flat_map(move |y| (0..width).map(move |x| Point { x, y }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_new_valid() {
        let screen = Screen::new(800, 600).unwrap();

        assert_eq!(screen.width(), 800);
        assert_eq!(screen.height(), 600);
        assert_eq!(screen.size(), 480_000);
    }

    #[test]
    fn test_screen_dimensions_must_be_positive() {
        assert_eq!(
            Screen::new(0, 600),
            Err(ScreenError::InvalidSize {
                width: 0,
                height: 600
            })
        );
        assert_eq!(
            Screen::new(800, 0),
            Err(ScreenError::InvalidSize {
                width: 800,
                height: 0
            })
        );
    }

    #[test]
    fn test_screen_contains_point() {
        let screen = Screen::new(10, 5).unwrap();

        assert!(screen.contains_point(Point { x: 0, y: 0 }));
        assert!(screen.contains_point(Point { x: 9, y: 4 }));
        assert!(!screen.contains_point(Point { x: 10, y: 4 }));
        assert!(!screen.contains_point(Point { x: 9, y: 5 }));
        assert!(!screen.contains_point(Point { x: -1, y: 0 }));
        assert!(!screen.contains_point(Point { x: 0, y: -1 }));
    }

    #[test]
    fn test_flip_y_round_trips() {
        let screen = Screen::new(10, 5).unwrap();

        assert_eq!(screen.flip_y(0), 5);
        assert_eq!(screen.flip_y(5), 0);
        assert_eq!(screen.flip_y(screen.flip_y(3)), 3);
    }

    #[test]
    fn test_flip_y_saturates_far_off_screen() {
        let screen = Screen::new(10, 5).unwrap();

        assert_eq!(screen.flip_y(i32::MIN), i32::MAX);
        assert_eq!(screen.flip_y(i32::MAX), 5 - i32::MAX);
    }

    #[test]
    fn test_pixels_visits_rows_in_order() {
        let screen = Screen::new(3, 2).unwrap();
        let pixels: Vec<Point> = screen.pixels().collect();

        assert_eq!(pixels.len(), 6);
        assert_eq!(pixels[0], Point { x: 0, y: 0 });
        assert_eq!(pixels[2], Point { x: 2, y: 0 });
        assert_eq!(pixels[3], Point { x: 0, y: 1 });
        assert_eq!(pixels[5], Point { x: 2, y: 1 });
    }
}
