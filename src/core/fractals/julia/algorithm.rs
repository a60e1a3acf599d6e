use crate::core::data::complex::Complex;
use crate::core::data::fractal_result::EscapeResult;
use crate::core::data::view_rect::DefaultView;
use crate::core::fractals::escape_time::colour_map::{EscapeTimeColourMap, HueBand};
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::escape_time::{escape_time, quadratic_step};
use crate::core::fractals::julia::presets::JuliaPreset;

pub const DEFAULT_MAX_ITERATIONS: u32 = 50;

pub const DEFAULT_VIEW: DefaultView = DefaultView {
    real_min: -2.0,
    real_max: 2.0,
    imag_min: -1.35,
};

/// Greens.
pub const JULIA_HUE_BAND: HueBand = HueBand::new(0.352_941_176, 0.470_588_235);

/// `z = z² + c` with `z₀` the plane point and `c` fixed by the preset.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct JuliaAlgorithm {
    constant: Complex,
    max_iterations: u32,
}

impl JuliaAlgorithm {
    pub fn new(constant: Complex, max_iterations: u32) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterationsError);
        }

        Ok(Self {
            constant,
            max_iterations,
        })
    }

    pub fn from_preset(preset: JuliaPreset, max_iterations: u32) -> Result<Self, EscapeTimeError> {
        Self::new(preset.constant(), max_iterations)
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.constant
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    #[must_use]
    pub fn classify(&self, point: Complex) -> EscapeResult {
        escape_time(point, self.constant, self.max_iterations, quadratic_step)
    }

    #[must_use]
    pub fn colour_map(&self) -> EscapeTimeColourMap {
        EscapeTimeColourMap::new("Julia", JULIA_HUE_BAND, self.max_iterations)
    }
}
