use eframe::egui::{self, RichText, ScrollArea, Ui};

use crate::color::Theme;
use crate::config::{APP_TITLE, LAYERED_BIN_RANGE, REPOSITORY_URL};
use crate::data::model::{Measurement, Species};
use crate::state::{AppState, SelectionEvent};

// ---------------------------------------------------------------------------
// Left side panel – selection widgets
// ---------------------------------------------------------------------------

/// Render the sidebar and apply whatever the user changed.
pub fn side_panel(ui: &mut Ui, state: &mut AppState, theme: &Theme) {
    ui.heading("Sidebar");
    ui.separator();

    // Widgets edit copies; the changes go through `AppState::apply`.
    let mut events: Vec<SelectionEvent> = Vec::new();
    let selection = &state.selection;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Attribute selector ----
            ui.strong("Select Attribute");
            egui::ComboBox::from_id_salt("selected_attribute")
                .selected_text(selection.attribute.column())
                .show_ui(ui, |ui: &mut Ui| {
                    for m in Measurement::SELECTABLE {
                        if ui
                            .selectable_label(selection.attribute == m, m.column())
                            .clicked()
                        {
                            events.push(SelectionEvent::SetAttribute(m));
                        }
                    }
                });
            ui.add_space(6.0);

            // ---- Bin counts ----
            ui.strong("Stacked Histogram Bins");
            let mut stacked = selection.stacked_bins;
            if ui
                .add(egui::DragValue::new(&mut stacked).range(1..=u32::MAX))
                .changed()
            {
                events.push(SelectionEvent::SetStackedBins(stacked));
            }
            ui.add_space(6.0);

            ui.strong("Layered Histogram Bins");
            let mut layered = selection.layered_bins;
            if ui
                .add(egui::Slider::new(&mut layered, LAYERED_BIN_RANGE))
                .changed()
            {
                events.push(SelectionEvent::SetLayeredBins(layered));
            }
            ui.add_space(6.0);

            // ---- Species checkboxes ----
            ui.strong("Select Species");
            ui.horizontal_wrapped(|ui: &mut Ui| {
                for species in Species::ALL {
                    let name = species.name();
                    let mut checked = selection.species.contains(name);
                    let text = RichText::new(name).color(theme.species.color_for(species));
                    if ui.checkbox(&mut checked, text).changed() {
                        events.push(SelectionEvent::SetSpecies {
                            name: name.to_string(),
                            selected: checked,
                        });
                    }
                }
            });

            ui.separator();
            ui.hyperlink_to("GitHub Code Repository", REPOSITORY_URL);
        });

    // The top bar was drawn before these events; redraw so its counts catch up.
    for event in events {
        if state.apply(event) {
            ui.ctx().request_repaint();
        }
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the title and record counts.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(APP_TITLE);
        ui.separator();

        let total = state.dataset().len();
        let visible = state.pipeline.filtered(&state.selection).len();
        ui.label(format!("{total} records loaded, {visible} visible"));
    });
}
