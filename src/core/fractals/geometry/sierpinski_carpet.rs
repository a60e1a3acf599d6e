use crate::core::data::colour::Colour;
use crate::core::data::primitive::{Primitive, Vertex};
use crate::core::data::screen::Screen;
use crate::core::fractals::geometry::errors::{GeometryError, validate_depth};
use crate::core::fractals::geometry::{SIERPINSKI_MAX_DEPTH, SIERPINSKI_SIDE};

fn square(bottom_left: Vertex, side: f64, colour: Colour) -> Primitive {
    Primitive::quad(
        bottom_left,
        Vertex::new(bottom_left.x + side, bottom_left.y),
        Vertex::new(bottom_left.x + side, bottom_left.y + side),
        Vertex::new(bottom_left.x, bottom_left.y + side),
        colour,
    )
}

/// Sierpinski carpet: a square with the middle ninth removed, repeatedly.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SierpinskiCarpet {
    bottom_left: Vertex,
    side: f64,
}

impl SierpinskiCarpet {
    #[must_use]
    pub fn new(bottom_left: Vertex, side: f64) -> Self {
        Self { bottom_left, side }
    }

    #[must_use]
    pub fn centred(screen: Screen) -> Self {
        let centre_x = f64::from(screen.width() / 2);
        let centre_y = f64::from(screen.height() / 2);

        Self::new(
            Vertex::new(centre_x - SIERPINSKI_SIDE / 2.0, centre_y - SIERPINSKI_SIDE / 2.0),
            SIERPINSKI_SIDE,
        )
    }

    /// The white outer square followed by the black holes of every level,
    /// shallowest first.
    ///
    /// Level `k` splits the square into a `3^(k-1)` by `3^(k-1)` grid of
    /// blocks and removes the centre cell of each, row by row from the
    /// bottom.
    pub fn generate(&self, depth: u32) -> Result<Vec<Primitive>, GeometryError> {
        validate_depth(depth, SIERPINSKI_MAX_DEPTH)?;

        let hole_count = (9usize.pow(depth) - 1) / 8;
        let mut primitives = Vec::with_capacity(1 + hole_count);
        primitives.push(square(self.bottom_left, self.side, Colour::WHITE));
        self.remove_centres(1, depth, &mut primitives);

        Ok(primitives)
    }

    fn remove_centres(&self, level: u32, depth: u32, holes: &mut Vec<Primitive>) {
        if level > depth {
            return;
        }

        let blocks = 3u32.pow(level - 1);
        let cell = self.side / f64::from(3 * blocks);
        let block = 3.0 * cell;

        for row in 0..blocks {
            for column in 0..blocks {
                let corner = Vertex::new(
                    self.bottom_left.x + f64::from(column) * block + cell,
                    self.bottom_left.y + f64::from(row) * block + cell,
                );
                holes.push(square(corner, cell, Colour::BLACK));
            }
        }

        self.remove_centres(level + 1, depth, holes);
    }
}
