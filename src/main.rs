use std::path::PathBuf;

use clap::Parser;
use fractal_engine::{
    CliRenderController, Explorer, FractalKind, JuliaPreset, PpmFilePresenter,
    PrimitiveListingPresenter, Screen,
};

#[derive(Parser, Debug)]
#[command(name = "fractal_engine")]
#[command(about = "Renders escape-time, Newton and recursive fractals to files")]
struct Args {
    /// mandelbrot, julia, burning-ship, newton, levy, sierpinski-triangle or sierpinski-carpet
    #[arg(short, long, default_value = "mandelbrot")]
    fractal: FractalKind,

    #[arg(long, default_value_t = 800)]
    width: u32,

    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Iteration limit; defaults to the fractal's own
    #[arg(short, long)]
    iterations: Option<u32>,

    /// Index of the Julia constant (wraps)
    #[arg(long, default_value_t = 0)]
    julia_preset: usize,

    /// Newton polynomial degree, 2 to 9
    #[arg(long)]
    degree: Option<u32>,

    /// Recursion depth for the Lévy curve and Sierpinski figures
    #[arg(long)]
    depth: Option<u32>,

    /// Output file; defaults to output/<fractal>.<ppm|txt>
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Classify pixels on the rayon thread pool
    #[arg(long)]
    parallel: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let screen = Screen::new(args.width, args.height)?;
    let mut explorer = Explorer::new(args.fractal, screen)?;

    explorer.set_julia_preset(JuliaPreset::new(args.julia_preset));
    explorer.set_parallel(args.parallel);
    if let Some(degree) = args.degree {
        explorer.set_newton_degree(degree)?;
    }
    if let Some(iterations) = args.iterations {
        explorer.set_max_iterations(iterations)?;
    }
    if let Some(depth) = args.depth {
        explorer.set_depth(depth)?;
    }

    let mut controller =
        CliRenderController::new(PpmFilePresenter::new(), PrimitiveListingPresenter::new());
    controller.generate(&explorer)?;

    let output = args.output.unwrap_or_else(|| {
        let extension = controller.extension().unwrap_or("ppm");
        PathBuf::from("output").join(format!("{}.{}", args.fractal.slug(), extension))
    });
    if let Some(parent) = output.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    controller.write(&output)?;

    Ok(())
}
