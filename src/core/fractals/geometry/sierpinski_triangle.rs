use crate::core::data::colour::Colour;
use crate::core::data::primitive::{Primitive, Vertex};
use crate::core::data::screen::Screen;
use crate::core::fractals::geometry::errors::{GeometryError, validate_depth};
use crate::core::fractals::geometry::{SIERPINSKI_MAX_DEPTH, SIERPINSKI_SIDE};

#[derive(Debug, Copy, Clone, PartialEq)]
struct Triangle {
    bottom_left: Vertex,
    bottom_right: Vertex,
    top: Vertex,
}

impl Triangle {
    fn to_primitive(self, colour: Colour) -> Primitive {
        Primitive::triangle(self.top, self.bottom_left, self.bottom_right, colour)
    }
}

/// Equilateral Sierpinski triangle resting on a horizontal base.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SierpinskiTriangle {
    outer: Triangle,
}

impl SierpinskiTriangle {
    #[must_use]
    pub fn new(bottom_left: Vertex, side: f64) -> Self {
        let height = side * 3.0_f64.sqrt() / 2.0;

        Self {
            outer: Triangle {
                bottom_left,
                bottom_right: Vertex::new(bottom_left.x + side, bottom_left.y),
                top: Vertex::new(bottom_left.x + side / 2.0, bottom_left.y + height),
            },
        }
    }

    /// Standard-size triangle whose bounding box is centred on the screen.
    #[must_use]
    pub fn centred(screen: Screen) -> Self {
        let height = SIERPINSKI_SIDE * 3.0_f64.sqrt() / 2.0;
        let centre_x = f64::from(screen.width() / 2);
        let centre_y = f64::from(screen.height() / 2);

        Self::new(
            Vertex::new(centre_x - SIERPINSKI_SIDE / 2.0, centre_y - height / 2.0),
            SIERPINSKI_SIDE,
        )
    }

    /// The white outer triangle followed by the black holes of every level,
    /// shallowest first. Level `k` removes `3^(k-1)` holes.
    pub fn generate(&self, depth: u32) -> Result<Vec<Primitive>, GeometryError> {
        validate_depth(depth, SIERPINSKI_MAX_DEPTH)?;

        let hole_count = (3usize.pow(depth) - 1) / 2;
        let mut primitives = Vec::with_capacity(1 + hole_count);
        primitives.push(self.outer.to_primitive(Colour::WHITE));
        remove_centres(vec![self.outer], 1, depth, &mut primitives);

        Ok(primitives)
    }
}

/// Punches the inverted middle triangle out of every triangle in `frontier`,
/// then recurses on the three corner triangles each one leaves behind.
fn remove_centres(frontier: Vec<Triangle>, level: u32, depth: u32, holes: &mut Vec<Primitive>) {
    if level > depth {
        return;
    }

    let mut next = Vec::with_capacity(frontier.len() * 3);

    for triangle in frontier {
        let left = triangle.bottom_left.midpoint(triangle.top);
        let right = triangle.bottom_right.midpoint(triangle.top);
        let bottom = triangle.bottom_left.midpoint(triangle.bottom_right);

        holes.push(Primitive::triangle(left, right, bottom, Colour::BLACK));

        next.push(Triangle {
            bottom_left: triangle.bottom_left,
            bottom_right: bottom,
            top: left,
        });
        next.push(Triangle {
            bottom_left: bottom,
            bottom_right: triangle.bottom_right,
            top: right,
        });
        next.push(Triangle {
            bottom_left: left,
            bottom_right: right,
            top: triangle.top,
        });
    }

    remove_centres(next, level + 1, depth, holes);
}
