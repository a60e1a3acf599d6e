use std::fmt;

use crate::core::data::colour::Colour;

/// Screen-space vertex of a drawable primitive.
#[derive(Debug, Copy, Clone, PartialEq, Default)]
pub struct Vertex {
    pub x: f64,
    pub y: f64,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Line,
    Triangle,
    Quad,
}

impl PrimitiveKind {
    #[must_use]
    pub const fn vertex_count(self) -> usize {
        match self {
            Self::Line => 2,
            Self::Triangle => 3,
            Self::Quad => 4,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Triangle => "triangle",
            Self::Quad => "quad",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A filled (triangle, quad) or stroked (line) shape handed to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    kind: PrimitiveKind,
    vertices: Vec<Vertex>,
    colour: Colour,
}

impl Primitive {
    #[must_use]
    pub fn line(from: Vertex, to: Vertex, colour: Colour) -> Self {
        Self {
            kind: PrimitiveKind::Line,
            vertices: vec![from, to],
            colour,
        }
    }

    #[must_use]
    pub fn triangle(a: Vertex, b: Vertex, c: Vertex, colour: Colour) -> Self {
        Self {
            kind: PrimitiveKind::Triangle,
            vertices: vec![a, b, c],
            colour,
        }
    }

    #[must_use]
    pub fn quad(a: Vertex, b: Vertex, c: Vertex, d: Vertex, colour: Colour) -> Self {
        Self {
            kind: PrimitiveKind::Quad,
            vertices: vec![a, b, c, d],
            colour,
        }
    }

    #[must_use]
    pub fn kind(&self) -> PrimitiveKind {
        self.kind
    }

    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    #[must_use]
    pub fn colour(&self) -> Colour {
        self.colour
    }
}
