use crate::core::actions::generate_pixel_buffer::ports::colour_map::{ColourMap, ColourMapError};
use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferData, PixelBufferError};
use crate::core::data::screen::Screen;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum GeneratePixelBufferError {
    ColourMap(ColourMapError),
    PixelBuffer(PixelBufferError),
}

impl fmt::Display for GeneratePixelBufferError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ColourMap(err) => write!(f, "colour map error: {}", err),
            Self::PixelBuffer(err) => write!(f, "pixel buffer error: {}", err),
        }
    }
}

impl Error for GeneratePixelBufferError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ColourMap(err) => Some(err),
            Self::PixelBuffer(err) => Some(err),
        }
    }
}

impl From<PixelBufferError> for GeneratePixelBufferError {
    fn from(err: PixelBufferError) -> Self {
        Self::PixelBuffer(err)
    }
}

impl From<ColourMapError> for GeneratePixelBufferError {
    fn from(err: ColourMapError) -> Self {
        Self::ColourMap(err)
    }
}

/// Colours per-pixel results into an image.
///
/// `input` is in plane order (row 0 is the bottom of the view); the buffer is
/// written top row first, so plane row 0 ends up as the last image row.
pub fn generate_pixel_buffer<T, CMap: ColourMap<T>>(
    input: Vec<T>,
    mapper: &CMap,
    screen: Screen,
) -> Result<PixelBuffer, GeneratePixelBufferError> {
    let buffer_size = (screen.size() * 3) as usize;

    if input.len() * 3 != buffer_size {
        return Err(PixelBufferError::BoundsMismatch {
            screen_size: buffer_size,
            buffer_size: input.len() * 3,
        }
        .into());
    }

    let width = screen.width() as usize;
    let height = screen.height() as usize;
    let mut buffer: PixelBufferData = vec![0; buffer_size];

    for (index, value) in input.into_iter().enumerate() {
        let Colour { r, g, b } = mapper.map(value)?;
        let x = index % width;
        let image_row = height - 1 - index / width;
        let offset = (image_row * width + x) * 3;

        buffer[offset..offset + 3].copy_from_slice(&[r, g, b]);
    }

    Ok(PixelBuffer::from_data(screen, buffer)?)
}
