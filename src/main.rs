mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::PubTrendApp;
use eframe::egui;

/// Loaded at startup when no file is named on the command line.
const DEFAULT_DATA_FILE: &str = "Publications.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let startup_file = std::env::args().nth(1).map(PathBuf::from).or_else(|| {
        let default = PathBuf::from(DEFAULT_DATA_FILE);
        default.exists().then_some(default)
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "PubTrend – Publications by Year",
        options,
        Box::new(move |_cc| {
            let mut app = PubTrendApp::default();
            if let Some(path) = &startup_file {
                // A broken startup file is fatal; interactive opens later on
                // only surface a status message.
                let dataset = data::loader::load_file(path)
                    .map_err(|e| format!("failed to load {}: {e:#}", path.display()))?;
                log::info!(
                    "Loaded {} rows from {} ({} buckets)",
                    dataset.len(),
                    path.display(),
                    dataset.buckets.bucket_count
                );
                app.state.set_dataset(dataset);
            }
            Ok(Box::new(app))
        }),
    )
}
