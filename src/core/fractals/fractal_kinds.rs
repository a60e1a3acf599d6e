use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::core::fractals::geometry::GeometryFractalKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FractalKind {
    #[default]
    Mandelbrot,
    Julia,
    BurningShip,
    Newton,
    Levy,
    SierpinskiTriangle,
    SierpinskiCarpet,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFractalKindError {
    input: String,
}

impl fmt::Display for ParseFractalKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = FractalKind::ALL.iter().map(|kind| kind.slug()).collect();

        write!(
            f,
            "unknown fractal '{}', expected one of: {}",
            self.input,
            names.join(", ")
        )
    }
}

impl Error for ParseFractalKindError {}

impl FractalKind {
    pub const ALL: &'static [Self] = &[
        Self::Mandelbrot,
        Self::Julia,
        Self::BurningShip,
        Self::Newton,
        Self::Levy,
        Self::SierpinskiTriangle,
        Self::SierpinskiCarpet,
    ];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
            Self::Julia => "Julia",
            Self::BurningShip => "Burning Ship",
            Self::Newton => "Newton",
            Self::Levy => "Lévy curve",
            Self::SierpinskiTriangle => "Sierpinski triangle",
            Self::SierpinskiCarpet => "Sierpinski carpet",
        }
    }

    /// Command-line name.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Mandelbrot => "mandelbrot",
            Self::Julia => "julia",
            Self::BurningShip => "burning-ship",
            Self::Newton => "newton",
            Self::Levy => "levy",
            Self::SierpinskiTriangle => "sierpinski-triangle",
            Self::SierpinskiCarpet => "sierpinski-carpet",
        }
    }

    /// Whether the fractal is computed per pixel over the complex plane.
    #[must_use]
    pub const fn is_plane(self) -> bool {
        matches!(
            self,
            Self::Mandelbrot | Self::Julia | Self::BurningShip | Self::Newton
        )
    }

    #[must_use]
    pub const fn as_geometry(self) -> Option<GeometryFractalKind> {
        match self {
            Self::Levy => Some(GeometryFractalKind::Levy),
            Self::SierpinskiTriangle => Some(GeometryFractalKind::SierpinskiTriangle),
            Self::SierpinskiCarpet => Some(GeometryFractalKind::SierpinskiCarpet),
            Self::Mandelbrot | Self::Julia | Self::BurningShip | Self::Newton => None,
        }
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for FractalKind {
    type Err = ParseFractalKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseFractalKindError {
                input: s.to_string(),
            })
    }
}
