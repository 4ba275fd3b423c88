use eframe::egui::{self, Align, Layout, RichText, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::data::filter::FilteredView;
use crate::data::model::{Column, MISSING};

const ROW_HEIGHT: f32 = 18.0;
const CARD_HEIGHT: f32 = 240.0;

fn cell_text(text: String) -> RichText {
    if text == MISSING {
        RichText::new(text).weak()
    } else {
        RichText::new(text)
    }
}

// ---------------------------------------------------------------------------
// Data Table – virtualized, resizable columns
// ---------------------------------------------------------------------------

pub fn data_table(ui: &mut Ui, view: &FilteredView) {
    ui.push_id("data_table", |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .vscroll(true)
            .max_scroll_height(CARD_HEIGHT)
            .cell_layout(Layout::left_to_right(Align::Center))
            .columns(TableColumn::auto().at_least(48.0), Column::ALL.len())
            .header(ROW_HEIGHT + 2.0, |mut header| {
                for column in Column::ALL {
                    header.col(|ui: &mut Ui| {
                        ui.strong(column.header());
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, view.len(), |mut row| {
                    let Some(record) = view.get(row.index()) else {
                        return;
                    };
                    for column in Column::ALL {
                        row.col(|ui: &mut Ui| {
                            ui.label(cell_text(record.cell(column)));
                        });
                    }
                });
            });
    });
}

// ---------------------------------------------------------------------------
// Data Grid – plain striped grid
// ---------------------------------------------------------------------------

pub fn data_grid(ui: &mut Ui, view: &FilteredView) {
    ScrollArea::both()
        .id_salt("data_grid_scroll")
        .max_height(CARD_HEIGHT)
        .auto_shrink([false, true])
        .show(ui, |ui: &mut Ui| {
            egui::Grid::new("data_grid")
                .striped(true)
                .num_columns(Column::ALL.len())
                .show(ui, |ui: &mut Ui| {
                    for column in Column::ALL {
                        ui.strong(column.header());
                    }
                    ui.end_row();

                    for record in view.records() {
                        for column in Column::ALL {
                            let text = cell_text(record.cell(column));
                            if column.is_numeric() {
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui: &mut Ui| {
                                    ui.label(text);
                                });
                            } else {
                                ui.label(text);
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}
