use crate::core::data::colour::Colour;
use crate::core::data::primitive::{Primitive, Vertex};
use crate::core::data::screen::Screen;
use crate::core::fractals::geometry::errors::{GeometryError, validate_depth};

pub const LEVY_MAX_DEPTH: u32 = 16;

/// Lévy C curve grown from one or more seed segments.
#[derive(Debug, Clone, PartialEq)]
pub struct LevyCurve {
    seeds: Vec<(Vertex, Vertex)>,
}

impl LevyCurve {
    /// A single curve on the segment `from -> to`.
    #[must_use]
    pub fn new(from: Vertex, to: Vertex) -> Self {
        Self {
            seeds: vec![(from, to)],
        }
    }

    /// The full figure: the middle third of the screen's horizontal midline,
    /// drawn once in each direction so the two halves bulge apart.
    #[must_use]
    pub fn centred(screen: Screen) -> Self {
        let y = f64::from(screen.height() / 2);
        let left = Vertex::new(f64::from(screen.width() / 3), y);
        let right = Vertex::new(f64::from(2 * screen.width() / 3), y);

        Self {
            seeds: vec![(left, right), (right, left)],
        }
    }

    #[must_use]
    pub fn seeds(&self) -> &[(Vertex, Vertex)] {
        &self.seeds
    }

    pub fn generate(&self, depth: u32) -> Result<Vec<Primitive>, GeometryError> {
        validate_depth(depth, LEVY_MAX_DEPTH)?;

        let mut lines = Vec::with_capacity(self.seeds.len() << (depth - 1));
        for &(from, to) in &self.seeds {
            subdivide(from, to, depth, &mut lines);
        }

        Ok(lines)
    }
}

/// Apex of the right isosceles triangle built on `from -> to`.
#[must_use]
pub fn levy_apex(from: Vertex, to: Vertex) -> Vertex {
    Vertex::new(
        (from.x + to.x) / 2.0 + (to.y - from.y) / 2.0,
        (from.y + to.y) / 2.0 - (to.x - from.x) / 2.0,
    )
}

fn subdivide(from: Vertex, to: Vertex, depth: u32, lines: &mut Vec<Primitive>) {
    if depth <= 1 {
        lines.push(Primitive::line(from, to, Colour::WHITE));
        return;
    }

    let apex = levy_apex(from, to);
    subdivide(from, apex, depth - 1, lines);
    subdivide(apex, to, depth - 1, lines);
}
