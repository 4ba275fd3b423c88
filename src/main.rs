mod app;
mod chart;
mod color;
mod config;
mod data;
mod pipeline;
mod reactive;
mod state;
mod ui;

use std::sync::Arc;

use anyhow::{anyhow, Context};
use app::PenguinDashApp;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = data::provider::load_penguins()
        .inspect_err(|e| log::error!("Failed to load dataset: {e}"))
        .context("loading penguin dataset")?;
    log::info!("Loaded {} penguin records", dataset.len());
    let dataset = Arc::new(dataset);

    eframe::run_native(
        config::APP_TITLE,
        config::native_options(),
        Box::new(move |_cc| Ok(Box::new(PenguinDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow!("running dashboard: {e}"))
}
