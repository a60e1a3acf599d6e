use std::error::Error;
use std::fmt;

use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::complex::Complex;
use crate::core::data::fractal_result::FractalResult;
use crate::core::data::point::Point;
use crate::core::data::screen::Screen;
use crate::core::data::view_rect::{DefaultView, ViewRect};
use crate::core::fractals::burning_ship::algorithm::{self as burning_ship, BurningShipAlgorithm};
use crate::core::fractals::escape_time::colour_map::EscapeTimeColourMap;
use crate::core::fractals::escape_time::errors::EscapeTimeError;
use crate::core::fractals::fractal_kinds::FractalKind;
use crate::core::fractals::julia::algorithm::{self as julia, JuliaAlgorithm};
use crate::core::fractals::julia::presets::JuliaPreset;
use crate::core::fractals::mandelbrot::algorithm::{self as mandelbrot, MandelbrotAlgorithm};
use crate::core::fractals::newton::algorithm::{self as newton, NewtonAlgorithm};
use crate::core::fractals::newton::colour_map::NewtonColourMap;
use crate::core::fractals::newton::errors::NewtonError;
use crate::core::util::pixel_to_plane::{PixelToPlaneError, pixel_to_plane};

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PlaneFractalError {
    EscapeTime(EscapeTimeError),
    Newton(NewtonError),
}

impl fmt::Display for PlaneFractalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EscapeTime(err) => write!(f, "{}", err),
            Self::Newton(err) => write!(f, "{}", err),
        }
    }
}

impl Error for PlaneFractalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::EscapeTime(err) => Some(err),
            Self::Newton(err) => Some(err),
        }
    }
}

impl From<EscapeTimeError> for PlaneFractalError {
    fn from(err: EscapeTimeError) -> Self {
        Self::EscapeTime(err)
    }
}

impl From<NewtonError> for PlaneFractalError {
    fn from(err: NewtonError) -> Self {
        Self::Newton(err)
    }
}

/// Selection of a per-pixel fractal with the parameters only it needs.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum PlaneFractalKind {
    #[default]
    Mandelbrot,
    Julia { preset: JuliaPreset },
    BurningShip,
    Newton { degree: u32 },
}

impl PlaneFractalKind {
    #[must_use]
    pub const fn kind(self) -> FractalKind {
        match self {
            Self::Mandelbrot => FractalKind::Mandelbrot,
            Self::Julia { .. } => FractalKind::Julia,
            Self::BurningShip => FractalKind::BurningShip,
            Self::Newton { .. } => FractalKind::Newton,
        }
    }

    /// Plane variant of `kind` with default parameters, or `None` for the
    /// geometric figures.
    #[must_use]
    pub const fn from_kind(kind: FractalKind) -> Option<Self> {
        match kind {
            FractalKind::Mandelbrot => Some(Self::Mandelbrot),
            FractalKind::Julia => Some(Self::Julia {
                preset: JuliaPreset::new(0),
            }),
            FractalKind::BurningShip => Some(Self::BurningShip),
            FractalKind::Newton => Some(Self::Newton {
                degree: newton::DEFAULT_DEGREE,
            }),
            FractalKind::Levy | FractalKind::SierpinskiTriangle | FractalKind::SierpinskiCarpet => {
                None
            }
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        self.kind().display_name()
    }

    #[must_use]
    pub const fn default_view(self) -> DefaultView {
        match self {
            Self::Mandelbrot => mandelbrot::DEFAULT_VIEW,
            Self::Julia { .. } => julia::DEFAULT_VIEW,
            Self::BurningShip => burning_ship::DEFAULT_VIEW,
            Self::Newton { .. } => newton::DEFAULT_VIEW,
        }
    }

    #[must_use]
    pub const fn default_max_iterations(self) -> u32 {
        match self {
            Self::Mandelbrot => mandelbrot::DEFAULT_MAX_ITERATIONS,
            Self::Julia { .. } => julia::DEFAULT_MAX_ITERATIONS,
            Self::BurningShip => burning_ship::DEFAULT_MAX_ITERATIONS,
            Self::Newton { .. } => newton::DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn build(self, max_iterations: u32) -> Result<PlaneFractal, PlaneFractalError> {
        Ok(match self {
            Self::Mandelbrot => PlaneFractal::Mandelbrot(MandelbrotAlgorithm::new(max_iterations)?),
            Self::Julia { preset } => {
                PlaneFractal::Julia(JuliaAlgorithm::from_preset(preset, max_iterations)?)
            }
            Self::BurningShip => {
                PlaneFractal::BurningShip(BurningShipAlgorithm::new(max_iterations)?)
            }
            Self::Newton { degree } => {
                PlaneFractal::Newton(NewtonAlgorithm::new(degree, max_iterations)?)
            }
        })
    }
}

/// A ready-to-run per-pixel classifier.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaneFractal {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
    BurningShip(BurningShipAlgorithm),
    Newton(NewtonAlgorithm),
}

impl PlaneFractal {
    #[must_use]
    pub fn classify(&self, point: Complex) -> FractalResult {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.classify(point).into(),
            Self::Julia(algorithm) => algorithm.classify(point).into(),
            Self::BurningShip(algorithm) => algorithm.classify(point).into(),
            Self::Newton(algorithm) => algorithm.classify(point).into(),
        }
    }

    #[must_use]
    pub fn colour_map(&self) -> PlaneColourMap {
        match self {
            Self::Mandelbrot(algorithm) => PlaneColourMap::EscapeTime(algorithm.colour_map()),
            Self::Julia(algorithm) => PlaneColourMap::EscapeTime(algorithm.colour_map()),
            Self::BurningShip(algorithm) => PlaneColourMap::EscapeTime(algorithm.colour_map()),
            Self::Newton(algorithm) => PlaneColourMap::Newton(algorithm.colour_map()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PlaneColourMap {
    EscapeTime(EscapeTimeColourMap),
    Newton(NewtonColourMap),
}

impl ColourMap<FractalResult> for PlaneColourMap {
    fn map(&self, value: FractalResult) -> Result<Colour, ColourMapError> {
        match (self, value) {
            (Self::EscapeTime(map), FractalResult::EscapeTime(result)) => map.map(result),
            (Self::Newton(map), FractalResult::Newton(result)) => map.map(result),
            (Self::EscapeTime(_), FractalResult::Newton(_)) => {
                Err(ColourMapError::MismatchedResult {
                    expected: "escape-time",
                })
            }
            (Self::Newton(_), FractalResult::EscapeTime(_)) => {
                Err(ColourMapError::MismatchedResult { expected: "Newton" })
            }
        }
    }

    fn display_name(&self) -> &str {
        match self {
            Self::EscapeTime(map) => map.display_name(),
            Self::Newton(map) => map.display_name(),
        }
    }
}

/// Classifies screen pixels by mapping them through a view onto the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaneRenderer {
    fractal: PlaneFractal,
    view: ViewRect,
    screen: Screen,
}

impl PlaneRenderer {
    #[must_use]
    pub fn new(fractal: PlaneFractal, view: ViewRect, screen: Screen) -> Self {
        Self {
            fractal,
            view,
            screen,
        }
    }

    #[must_use]
    pub fn fractal(&self) -> &PlaneFractal {
        &self.fractal
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }
}

impl FractalAlgorithm for PlaneRenderer {
    type Success = FractalResult;
    type Failure = PixelToPlaneError;

    fn compute(&self, pixel: Point) -> Result<Self::Success, Self::Failure> {
        let point = pixel_to_plane(pixel, self.view, self.screen)?;

        Ok(self.fractal.classify(point))
    }
}
