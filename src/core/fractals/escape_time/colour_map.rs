use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::{Colour, Hsl};
use crate::core::data::fractal_result::EscapeResult;
use crate::core::util::hsl_to_rgb::hsl_to_rgb;

/// Range of hues an escape-time fractal is painted with.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HueBand {
    pub low: f64,
    pub high: f64,
}

impl HueBand {
    #[must_use]
    pub const fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Linear remap of `t` in `[0, 1]` onto the band.
    #[must_use]
    pub fn hue(&self, t: f64) -> f64 {
        self.low + t * (self.high - self.low)
    }

    #[must_use]
    pub fn contains(&self, hue: f64) -> bool {
        hue >= self.low.min(self.high) && hue <= self.low.max(self.high)
    }
}

/// Interior points are black. Escaped points get full saturation, a hue
/// from the band and a lightness of half the normalised iteration count.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapeTimeColourMap {
    name: &'static str,
    band: HueBand,
    max_iterations: u32,
}

impl EscapeTimeColourMap {
    #[must_use]
    pub fn new(name: &'static str, band: HueBand, max_iterations: u32) -> Self {
        Self {
            name,
            band,
            max_iterations,
        }
    }

    #[must_use]
    pub fn band(&self) -> HueBand {
        self.band
    }

    #[must_use]
    pub fn hsl(&self, iterations: u32) -> Hsl {
        let t = f64::from(iterations) / f64::from(self.max_iterations);

        Hsl::new(self.band.hue(t), 1.0, 0.5 * t)
    }
}

impl ColourMap<EscapeResult> for EscapeTimeColourMap {
    fn map(&self, value: EscapeResult) -> Result<Colour, ColourMapError> {
        if value.iterations > self.max_iterations {
            return Err(ColourMapError::IterationsExceedMax {
                iterations: value.iterations,
                max_iterations: self.max_iterations,
            });
        }

        if value.iterations == self.max_iterations {
            return Ok(Colour::BLACK);
        }

        Ok(hsl_to_rgb(self.hsl(value.iterations)))
    }

    fn display_name(&self) -> &str {
        self.name
    }
}
