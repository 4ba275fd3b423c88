use std::ops::RangeInclusive;

use eframe::egui;

/// Window and top-bar title.
pub const APP_TITLE: &str = "Penguins Data";

/// Link shown at the bottom of the sidebar.
pub const REPOSITORY_URL: &str = "https://github.com/AnalysisKris/cintel-03-reactive-kristenfinley";

/// Initial bin count of both histograms.
pub const DEFAULT_BINS: u32 = 30;

/// Upper bound on the bins any histogram actually computes.
pub const MAX_BINS: u32 = 500;

/// Bounds of the layered histogram's bin slider.
pub const LAYERED_BIN_RANGE: RangeInclusive<u32> = 1..=100;

/// Species shown when the dashboard opens.
pub const DEFAULT_SPECIES: &[&str] = &["Adelie"];

/// Hex colours for Adelie, Gentoo and Chinstrap.
pub const SPECIES_COLORS: [&str; 3] = ["#5e4b8a", "#a55e8b", "#d59b84"];

/// Fill behind every chart.
pub const PLOT_BACKGROUND: &str = "#ffebee";

pub fn native_options() -> eframe::NativeOptions {
    eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([720.0, 480.0]),
        ..Default::default()
    }
}
