use clap::Parser;

use mandelbrot_viewer::{GuiArgs, PixelsPresenterFactory, RunGuiCommand, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = GuiArgs::parse();
    init_logging(args.verbosity, &["wgpu_core", "wgpu_hal", "naga", "egui"]);

    let config = args.view.into_config()?;
    let command = RunGuiCommand::new(PixelsPresenterFactory::new());

    command.execute(&config)
}
