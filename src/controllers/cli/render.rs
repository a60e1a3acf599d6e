use std::error::Error;
use std::path::Path;
use std::time::Instant;

use crate::controllers::explorer::{Explorer, Frame};
use crate::controllers::ports::file_presenter::{FilePresenterPort, PrimitiveFilePresenterPort};
use crate::core::actions::render_frame::render_frame::samples_to_pixel_buffer;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::primitive::Primitive;

enum RenderOutput {
    Image(PixelBuffer),
    Listing(Vec<Primitive>),
}

/// Renders the explorer's current fractal once and hands it to a file
/// presenter: images for plane fractals, primitive listings for figures.
pub struct CliRenderController<P: FilePresenterPort, L: PrimitiveFilePresenterPort> {
    image_presenter: P,
    listing_presenter: L,
    output: Option<RenderOutput>,
}

impl<P: FilePresenterPort, L: PrimitiveFilePresenterPort> CliRenderController<P, L> {
    pub fn new(image_presenter: P, listing_presenter: L) -> Self {
        Self {
            image_presenter,
            listing_presenter,
            output: None,
        }
    }

    pub fn generate(&mut self, explorer: &Explorer) -> Result<(), Box<dyn Error>> {
        let screen = explorer.viewport().screen();

        println!("Rendering {}...", explorer.kind());
        println!("Image size: {}x{}", screen.width(), screen.height());
        match explorer.plane_fractal() {
            Some(_) => println!("Max iterations: {}", explorer.max_iterations()),
            None => println!("Depth: {}", explorer.depth()),
        }

        let start = Instant::now();
        let frame = explorer.render()?;
        let duration = start.elapsed();

        println!("Duration:   {:?}", duration);

        self.output = Some(match frame {
            Frame::Pixels(samples) => RenderOutput::Image(samples_to_pixel_buffer(&samples, screen)?),
            Frame::Primitives(primitives) => RenderOutput::Listing(primitives),
        });

        Ok(())
    }

    /// File extension matching what [`Self::generate`] produced.
    #[must_use]
    pub fn extension(&self) -> Option<&'static str> {
        match self.output {
            Some(RenderOutput::Image(_)) => Some("ppm"),
            Some(RenderOutput::Listing(_)) => Some("txt"),
            None => None,
        }
    }

    pub fn write(&self, filepath: impl AsRef<Path>) -> std::io::Result<()> {
        match &self.output {
            Some(RenderOutput::Image(buffer)) => self.image_presenter.present(buffer, &filepath)?,
            Some(RenderOutput::Listing(primitives)) => {
                self.listing_presenter.present(primitives, &filepath)?
            }
            None => return Ok(()),
        }

        println!("Saved to {}", filepath.as_ref().display());
        Ok(())
    }
}
