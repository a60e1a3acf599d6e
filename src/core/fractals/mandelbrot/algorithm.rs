use crate::core::data::complex::Complex;
use crate::core::data::fractal_result::EscapeResult;
use crate::core::data::view_rect::DefaultView;
use crate::core::fractals::escape_time::colour_map::{EscapeTimeColourMap, HueBand};
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::{escape_time, quadratic_step};

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

pub const DEFAULT_VIEW: DefaultView = DefaultView {
    real_min: -2.0,
    real_max: 1.0,
    imag_min: -1.1,
};

/// Turquoise through royal blue.
pub const MANDELBROT_HUE_BAND: HueBand = HueBand::new(0.745_098_039, 0.882_352_941);

/// `z = z² + c` with `z₀ = 0` and `c` the plane point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterationsError);
        }

        Ok(Self { max_iterations })
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn classify(&self, point: Complex) -> EscapeResult {
        escape_time(Complex::ZERO, point, self.max_iterations, quadratic_step)
    }

    #[must_use]
    pub fn colour_map(&self) -> EscapeTimeColourMap {
        EscapeTimeColourMap::new("Mandelbrot", MANDELBROT_HUE_BAND, self.max_iterations)
    }
}
