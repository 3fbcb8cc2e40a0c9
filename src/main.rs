mod app;
mod camera;
mod cli;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::{Context, Result};
use app::PointViewerApp;
use cli::Cli;
use eframe::egui;
use state::AppState;

fn main() -> Result<()> {
    env_logger::init();

    let cli = match Cli::try_from_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(e) => {
            log::debug!("Rejected arguments: {e:?}");
            println!("{e}");
            std::process::exit(1);
        }
    };

    run(&cli.input)
}

/// Load `path` and show its points until the window is closed.
///
/// The file is fully loaded before any window opens; load failures are
/// returned to `main` and end the process.
fn run(path: &Path) -> Result<()> {
    let file = data::loader::load_point_file(path)
        .with_context(|| format!("loading points from {}", path.display()))?;
    let title = app::window_title(Some(&file));

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    log::debug!("Opening viewer window");
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(PointViewerApp::new(AppState::new(file))))),
    )
    .map_err(|e| anyhow::anyhow!("viewer window failed: {e}"))
}
