use crate::core::data::colour::Colour;
use crate::core::data::point::Point;
use crate::core::data::screen::Screen;
use std::error::Error;
use std::fmt;

fn screen_to_buffer_size(screen: Screen) -> usize {
    (screen.size() * 3) as usize
}

#[derive(Debug, Clone, PartialEq)]
pub enum PixelBufferError {
    PixelOutsideBounds { pixel: Point, screen: Screen },
    BoundsMismatch {
        screen_size: usize,
        buffer_size: usize,
    },
}

impl fmt::Display for PixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsMismatch {
                screen_size,
                buffer_size,
            } => {
                write!(
                    f,
                    "screen size {} does not match buffer size {}",
                    screen_size, buffer_size
                )
            }
            Self::PixelOutsideBounds { pixel, screen } => {
                write!(
                    f,
                    "pixel at x:{}, y:{} outside of {}x{} image",
                    pixel.x,
                    pixel.y,
                    screen.width(),
                    screen.height()
                )
            }
        }
    }
}

impl Error for PixelBufferError {}

pub type PixelBufferData = Vec<u8>;

/// Packed RGB image, three bytes per pixel, rows stored top to bottom.
#[derive(Debug)]
pub struct PixelBuffer {
    screen: Screen,
    buffer: PixelBufferData,
}

impl PixelBuffer {
    #[must_use]
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            buffer: vec![0; screen_to_buffer_size(screen)],
        }
    }

    pub fn from_data(screen: Screen, buffer: PixelBufferData) -> Result<Self, PixelBufferError> {
        let screen_size = screen_to_buffer_size(screen);

        if screen_size != buffer.len() {
            return Err(PixelBufferError::BoundsMismatch {
                screen_size,
                buffer_size: buffer.len(),
            });
        }

        Ok(Self { screen, buffer })
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        self.screen
    }

    #[must_use]
    pub fn buffer(&self) -> &PixelBufferData {
        &self.buffer
    }

    #[must_use]
    pub fn buffer_size(&self) -> usize {
        self.buffer.len()
    }

    /// Writes one pixel. `pixel.y` is an image row, counted from the top.
    pub fn set_pixel(&mut self, pixel: Point, colour: Colour) -> Result<(), PixelBufferError> {
        if !self.screen.contains_point(pixel) {
            return Err(PixelBufferError::PixelOutsideBounds {
                pixel,
                screen: self.screen,
            });
        }

        let index = ((pixel.y as usize) * (self.screen.width() as usize) + pixel.x as usize) * 3;

        self.buffer[index] = colour.r;
        self.buffer[index + 1] = colour.g;
        self.buffer[index + 2] = colour.b;

        Ok(())
    }

    #[must_use]
    pub fn pixel(&self, pixel: Point) -> Option<Colour> {
        if !self.screen.contains_point(pixel) {
            return None;
        }

        let index = ((pixel.y as usize) * (self.screen.width() as usize) + pixel.x as usize) * 3;

        Some(Colour {
            r: self.buffer[index],
            g: self.buffer[index + 1],
            b: self.buffer[index + 2],
        })
    }
}
