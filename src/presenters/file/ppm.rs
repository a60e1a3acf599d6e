use crate::controllers::ports::file_presenter::FilePresenterPort;
use crate::core::data::pixel_buffer::PixelBuffer;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Writes images as binary PPM (P6).
#[derive(Debug, Default)]
pub struct PpmFilePresenter {}

impl PpmFilePresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, buffer: &PixelBuffer, mut writer: W) -> std::io::Result<()> {
        let screen = buffer.screen();

        // PPM header: P6 means binary RGB, then width, height and max_colour
        writeln!(writer, "P6")?;
        writeln!(writer, "{} {}", screen.width(), screen.height())?;
        writeln!(writer, "255")?;
        writer.write_all(buffer.buffer())?;
        writer.flush()
    }
}

impl FilePresenterPort for PpmFilePresenter {
    fn present(&self, buffer: &PixelBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(filepath)?;

        self.write_to(buffer, BufWriter::new(file))
    }
}
