use std::path::Path;

use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::primitive::Primitive;

pub trait FilePresenterPort {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()>;
}

pub trait PrimitiveFilePresenterPort {
    fn present(&self, primitives: &[Primitive], filepath: impl AsRef<Path>) -> std::io::Result<()>;
}
