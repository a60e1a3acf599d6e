pub mod errors;
pub mod levy;
pub mod sierpinski_carpet;
pub mod sierpinski_triangle;

use std::fmt;

use crate::core::data::primitive::Primitive;
use crate::core::data::screen::Screen;
use crate::core::fractals::geometry::errors::GeometryError;
use crate::core::fractals::geometry::levy::{LEVY_MAX_DEPTH, LevyCurve};
use crate::core::fractals::geometry::sierpinski_carpet::SierpinskiCarpet;
use crate::core::fractals::geometry::sierpinski_triangle::SierpinskiTriangle;

/// Side length, in pixels, of both Sierpinski figures.
pub const SIERPINSKI_SIDE: f64 = 500.0;
pub const SIERPINSKI_MAX_DEPTH: u32 = 6;
pub const MIN_DEPTH: u32 = 1;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeometryFractalKind {
    Levy,
    SierpinskiTriangle,
    SierpinskiCarpet,
}

impl GeometryFractalKind {
    pub const ALL: &'static [Self] = &[Self::Levy, Self::SierpinskiTriangle, Self::SierpinskiCarpet];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Levy => "Lévy curve",
            Self::SierpinskiTriangle => "Sierpinski triangle",
            Self::SierpinskiCarpet => "Sierpinski carpet",
        }
    }

    #[must_use]
    pub const fn max_depth(self) -> u32 {
        match self {
            Self::Levy => LEVY_MAX_DEPTH,
            Self::SierpinskiTriangle | Self::SierpinskiCarpet => SIERPINSKI_MAX_DEPTH,
        }
    }

    /// Depth a freshly selected figure is drawn at.
    #[must_use]
    pub const fn default_depth(self) -> u32 {
        MIN_DEPTH
    }

    /// Builds the figure at `depth`, laid out on `screen`.
    pub fn generate(self, depth: u32, screen: Screen) -> Result<Vec<Primitive>, GeometryError> {
        match self {
            Self::Levy => LevyCurve::centred(screen).generate(depth),
            Self::SierpinskiTriangle => SierpinskiTriangle::centred(screen).generate(depth),
            Self::SierpinskiCarpet => SierpinskiCarpet::centred(screen).generate(depth),
        }
    }
}

impl fmt::Display for GeometryFractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
