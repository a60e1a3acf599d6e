use crate::core::data::colour::Colour;

/// One classified pixel. `y` counts rows up from the bottom of the screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct PixelSample {
    pub x: i32,
    pub y: i32,
    pub colour: Colour,
}
