use std::error::Error;

use clap::Parser;
use env_logger::Env;
use log::info;

use fbfractal::{
    ExplorerConfig, FramebufferSurface, PpmFilePresenter, RenderLoop, SnapshotController,
    TerminalInput,
};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let config = ExplorerConfig::parse();
    let view = config.view_state()?;

    if let Some(path) = &config.headless {
        let mut controller = SnapshotController::new(PpmFilePresenter::new());

        controller.generate(&view)?;
        controller.write(path)?;

        return Ok(());
    }

    // acquire the device before raw mode so a failed open leaves the terminal untouched
    let surface = FramebufferSurface::open(&config.device)?;
    let input = TerminalInput::new()?;
    let stats = RenderLoop::new(surface, input, view).run()?;

    info!(
        "{} frames completed, {} pixels rendered",
        stats.frames_completed, stats.pixels_rendered
    );

    Ok(())
}
