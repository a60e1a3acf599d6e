use crate::core::data::complex::Complex;
use crate::core::data::fractal_result::EscapeResult;
use crate::core::data::view_rect::DefaultView;
use crate::core::fractals::escape_time::colour_map::{EscapeTimeColourMap, HueBand};
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::escape_time;

pub const DEFAULT_MAX_ITERATIONS: u32 = 40;

pub const DEFAULT_VIEW: DefaultView = DefaultView {
    real_min: -2.0,
    real_max: 1.2,
    imag_min: -1.6,
};

/// Reds into yellow.
pub const BURNING_SHIP_HUE_BAND: HueBand = HueBand::new(0.0, 0.125);

/// Folds both components of `z` to be non-negative before squaring.
#[must_use]
pub fn burning_ship_step(z: Complex, c: Complex) -> Complex {
    let folded = z.abs_components();

    folded * folded + c
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct BurningShipAlgorithm {
    max_iterations: u32,
}

impl BurningShipAlgorithm {
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
        escape_time(Complex::ZERO, point, self.max_iterations, burning_ship_step)
    }

    #[must_use]
    pub fn colour_map(&self) -> EscapeTimeColourMap {
        EscapeTimeColourMap::new("Burning Ship", BURNING_SHIP_HUE_BAND, self.max_iterations)
    }
}
