use crate::controllers::ports::file_presenter::PrimitiveFilePresenterPort;
use crate::core::data::primitive::Primitive;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Plain-text dump of primitives, one per line:
/// `kind x0 y0 x1 y1 ... r g b`.
#[derive(Debug, Default)]
pub struct PrimitiveListingPresenter {}

impl PrimitiveListingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }

    pub fn write_to<W: Write>(&self, primitives: &[Primitive], mut writer: W) -> std::io::Result<()> {
        for primitive in primitives {
            write!(writer, "{}", primitive.kind())?;
            for vertex in primitive.vertices() {
                write!(writer, " {} {}", vertex.x, vertex.y)?;
            }
            let colour = primitive.colour();
            writeln!(writer, " {} {} {}", colour.r, colour.g, colour.b)?;
        }

        writer.flush()
    }
}

impl PrimitiveFilePresenterPort for PrimitiveListingPresenter {
    fn present(&self, primitives: &[Primitive], filepath: impl AsRef<Path>) -> std::io::Result<()> {
        let file = std::fs::File::create(filepath)?;

        self.write_to(primitives, BufWriter::new(file))
    }
}
