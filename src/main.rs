use clap::Parser;
use log::debug;

use mandelbrot_viewer::{PpmFilePresenter, RenderArgs, RenderFileController, init_logging};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = RenderArgs::parse();
    init_logging(args.verbosity, &[]);
    debug!("Command-line args: {:?}", args);

    let config = args.view.into_config()?;
    let mut controller = RenderFileController::new(PpmFilePresenter::new(), config);

    controller.generate()?;
    controller.write(&args.output)?;

    Ok(())
}
