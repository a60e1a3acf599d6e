use std::error::Error;
use std::fmt;

use crate::core::data::complex::Complex;
use crate::core::data::screen::Screen;

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ViewRectError {
    InvalidSize { width: f64, height: f64 },
}

impl fmt::Display for ViewRectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { width, height } => {
                write!(f, "view rect size must be positive: {}x{}", width, height)
            }
        }
    }
}

impl Error for ViewRectError {}

/// Region of the complex plane mapped onto the screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ViewRect {
    real_min: f64,
    real_max: f64,
    imag_min: f64,
    imag_max: f64,
}

impl ViewRect {
    pub fn new(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        imag_max: f64,
    ) -> Result<Self, ViewRectError> {
        let width = real_max - real_min;
        let height = imag_max - imag_min;

        // Written so that NaN widths are rejected too.
        if !(width > 0.0 && height > 0.0) {
            return Err(ViewRectError::InvalidSize { width, height });
        }

        Ok(Self {
            real_min,
            real_max,
            imag_min,
            imag_max,
        })
    }

    /// Builds a view whose `imag_max` follows the screen's aspect ratio so
    /// the plane is not stretched.
    pub fn with_aspect(
        real_min: f64,
        real_max: f64,
        imag_min: f64,
        screen: Screen,
    ) -> Result<Self, ViewRectError> {
        let imag_max = imag_min
            + (real_max - real_min) * f64::from(screen.height()) / f64::from(screen.width());

        Self::new(real_min, real_max, imag_min, imag_max)
    }

    #[must_use]
    pub fn real_min(&self) -> f64 {
        self.real_min
    }

    #[must_use]
    pub fn real_max(&self) -> f64 {
        self.real_max
    }

    #[must_use]
    pub fn imag_min(&self) -> f64 {
        self.imag_min
    }

    #[must_use]
    pub fn imag_max(&self) -> f64 {
        self.imag_max
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.real_max - self.real_min
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.imag_max - self.imag_min
    }

    #[must_use]
    pub fn centre(&self) -> Complex {
        Complex::new(
            (self.real_min + self.real_max) / 2.0,
            (self.imag_min + self.imag_max) / 2.0,
        )
    }

    #[must_use]
    pub fn contains_point(&self, point: Complex) -> bool {
        self.real_min <= point.real
            && self.imag_min <= point.imag
            && self.real_max >= point.real
            && self.imag_max >= point.imag
    }
}

/// Opening window of a fractal. `imag_max` is derived from the screen.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DefaultView {
    pub real_min: f64,
    pub real_max: f64,
    pub imag_min: f64,
}

impl DefaultView {
    pub fn to_view(self, screen: Screen) -> Result<ViewRect, ViewRectError> {
        ViewRect::with_aspect(self.real_min, self.real_max, self.imag_min, screen)
    }
}
