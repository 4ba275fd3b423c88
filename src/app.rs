use std::sync::Arc;

use eframe::egui::{self, Ui};

use crate::color::Theme;
use crate::data::model::Dataset;
use crate::state::AppState;
use crate::ui::{panels, plot, tables};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PenguinDashApp {
    pub state: AppState,
    pub theme: Theme,
    /// Selection version whose recompute counters were last logged.
    logged_version: u64,
}

impl PenguinDashApp {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            state: AppState::new(dataset),
            theme: Theme::load(),
            logged_version: 0,
        }
    }
}

impl eframe::App for PenguinDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and counts ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: selection ----
        egui::SidePanel::left("sidebar")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state, &self.theme);
            });

        // ---- Central panel: tables, then charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            let view = self.state.pipeline.filtered(&self.state.selection);
            ui.columns(2, |cols: &mut [Ui]| {
                cols[0].group(|ui: &mut Ui| {
                    ui.strong("Data Table");
                    ui.separator();
                    tables::data_table(ui, view);
                });
                cols[1].group(|ui: &mut Ui| {
                    ui.strong("Data Grid");
                    ui.separator();
                    tables::data_grid(ui, view);
                });
            });
            ui.add_space(8.0);

            ui.group(|ui: &mut Ui| {
                plot::chart_tabs(ui, &mut self.state, &self.theme);
            });
        });

        if self.state.version != self.logged_version {
            self.logged_version = self.state.version;
            log::debug!(
                "selection v{}: pipeline recomputations {:?}",
                self.state.version,
                self.state.pipeline.stats()
            );
        }
    }
}
