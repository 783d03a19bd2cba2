use std::path::Path;

use eframe::egui;

use carscope::app::CarscopeApp;
use carscope::data::loader;
use carscope::state::AppState;

/// Fixed dataset location; no flags, no environment variables.
const DATA_PATH: &str = "car_prices.csv";

fn main() -> eframe::Result {
    env_logger::init();

    // Load-time errors are fatal: no partial or degraded mode.
    let dataset = match loader::load_csv(Path::new(DATA_PATH)) {
        Ok(ds) => ds,
        Err(err) => {
            log::error!("Failed to load {DATA_PATH}: {err:#}");
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} sales records across {} manufacturers",
        dataset.len(),
        dataset.makes.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Carscope – Vehicle Sales in USA",
        options,
        Box::new(move |cc| {
            cc.egui_ctx.set_visuals(egui::Visuals::dark());
            Ok(Box::new(CarscopeApp::new(AppState::new(dataset))))
        }),
    )
}
