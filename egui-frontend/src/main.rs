use anyhow::Context;
use eframe::egui;
use log::{error, info};

use expense_tracker_egui::{AppConfig, ExpenseTrackerApp};

fn main() -> anyhow::Result<()> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting expense tracker egui application");

    let config = AppConfig::load().context("Failed to load configuration")?;
    let title = config.window_title.clone();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 700.0])
            .with_min_inner_size([720.0, 560.0])
            .with_title(&title)
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        &title,
        options,
        Box::new(|cc| {
            // Needed for receipt thumbnails and previews
            egui_extras::install_image_loaders(&cc.egui_ctx);

            info!("Successfully initialized expense tracker app");
            Ok(Box::new(ExpenseTrackerApp::new(config)))
        }),
    )
    .map_err(|e| {
        error!("Failed to run app: {}", e);
        anyhow::anyhow!("Failed to run app: {}", e)
    })
}
