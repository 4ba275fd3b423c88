use eframe::egui::{self, Stroke, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot, PlotPoints, PlotUi, Points};

use crate::chart::{GroupedBars, Histogram, ScatterPlot};
use crate::color::Theme;
use crate::data::model::Measurement;
use crate::state::{AppState, ChartTab};

// ---------------------------------------------------------------------------
// Tabbed chart card
// ---------------------------------------------------------------------------

/// Render the tab strip and the active chart. Only the active chart is pulled
/// from the pipeline.
pub fn chart_tabs(ui: &mut Ui, state: &mut AppState, theme: &Theme) {
    ui.horizontal(|ui: &mut Ui| {
        for tab in ChartTab::ALL {
            ui.selectable_value(&mut state.active_tab, tab, tab.title());
        }
    });
    ui.separator();

    let AppState {
        pipeline,
        selection,
        active_tab,
        ..
    } = state;

    egui::Frame::default()
        .fill(theme.plot_background)
        .show(ui, |ui: &mut Ui| match active_tab {
            ChartTab::StackedHistogram => {
                stacked_histogram(ui, pipeline.stacked_histogram(selection), theme)
            }
            ChartTab::LayeredHistogram => {
                layered_histogram(ui, pipeline.layered_histogram(selection), theme)
            }
            ChartTab::Scatter => scatter_plot(ui, pipeline.scatter(selection), theme),
            ChartTab::GroupedBar => grouped_bar_plot(ui, pipeline.grouped_bars(selection), theme),
        });
}

fn no_data(ui: &mut Ui, message: String) {
    ui.centered_and_justified(|ui: &mut Ui| {
        ui.label(message);
    });
}

fn histogram_caption(ui: &mut Ui, hist: &Histogram) {
    ui.horizontal(|ui: &mut Ui| {
        ui.strong(hist.measurement.label());
        ui.label(format!(
            "{} values in {} bins",
            hist.total(),
            hist.bin_count()
        ));
        if hist.missing > 0 {
            ui.weak(format!("({} missing)", hist.missing));
        }
    });
}

fn show_histogram(ui: &mut Ui, id: &str, measurement: Measurement, add: impl FnOnce(&mut PlotUi)) {
    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label(measurement.label())
        .y_axis_label("Count")
        .show_background(false)
        .include_y(0.0)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, add);
}

// ---------------------------------------------------------------------------
// Histograms
// ---------------------------------------------------------------------------

/// Species bars stacked on shared bins.
fn stacked_histogram(ui: &mut Ui, hist: &Histogram, theme: &Theme) {
    if hist.is_empty() {
        no_data(ui, format!("No {} values in the current selection", hist.measurement));
        return;
    }
    histogram_caption(ui, hist);

    let width = hist.bin_width();
    let mut charts: Vec<BarChart> = Vec::with_capacity(hist.series.len());
    for series in &hist.series {
        let color = theme.species.color_for(series.species);
        let bars: Vec<Bar> = series
            .counts
            .iter()
            .enumerate()
            .map(|(i, &n)| Bar::new(hist.bin_center(i), n as f64).width(width))
            .collect();
        let below: Vec<&BarChart> = charts.iter().collect();
        let chart = BarChart::new(bars)
            .name(series.species.name())
            .color(color)
            .stack_on(&below);
        charts.push(chart);
    }

    show_histogram(ui, "stacked_histogram", hist.measurement, |plot_ui| {
        for chart in charts {
            plot_ui.bar_chart(chart);
        }
    });
}

/// Translucent species bars drawn over one another on shared bins.
fn layered_histogram(ui: &mut Ui, hist: &Histogram, theme: &Theme) {
    if hist.is_empty() {
        no_data(ui, format!("No {} values in the current selection", hist.measurement));
        return;
    }
    histogram_caption(ui, hist);

    let width = hist.bin_width();
    show_histogram(ui, "layered_histogram", hist.measurement, |plot_ui| {
        for series in &hist.series {
            let color = theme.species.color_for(series.species);
            let bars: Vec<Bar> = series
                .counts
                .iter()
                .enumerate()
                .filter(|&(_, &n)| n > 0)
                .map(|(i, &n)| {
                    Bar::new(hist.bin_center(i), n as f64)
                        .width(width)
                        .fill(color.gamma_multiply(0.45))
                        .stroke(Stroke::new(1.0, color))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).name(series.species.name()).color(color));
        }
    });
}

// ---------------------------------------------------------------------------
// Scatterplot
// ---------------------------------------------------------------------------

fn scatter_plot(ui: &mut Ui, plot: &ScatterPlot, theme: &Theme) {
    if plot.is_empty() {
        no_data(ui, "No bill measurements in the current selection".to_string());
        return;
    }
    ui.horizontal(|ui: &mut Ui| {
        ui.strong("Bill Depth and Length");
        if plot.skipped > 0 {
            ui.weak(format!("({} records without bill measurements)", plot.skipped));
        }
    });

    Plot::new("bill_scatter")
        .legend(Legend::default())
        .x_axis_label(Measurement::BillLength.label())
        .y_axis_label(Measurement::BillDepth.label())
        .show_background(false)
        .show(ui, |plot_ui| {
            for series in &plot.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(series.species.name())
                        .color(theme.species.color_for(series.species))
                        .radius(3.0),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Grouped bar plot
// ---------------------------------------------------------------------------

fn grouped_bar_plot(ui: &mut Ui, bars: &GroupedBars, theme: &Theme) {
    if bars.is_empty() {
        no_data(ui, format!("No {} values in the current selection", bars.measurement));
        return;
    }
    ui.strong(format!("Average {} by Island", bars.measurement.label()));

    // Each island owns the interval [i - 0.4, i + 0.4], split among species.
    let group_width = 0.8;
    let slot = group_width / bars.series.len() as f64;
    let names: Vec<String> = bars.islands.iter().map(|i| i.name().to_string()).collect();

    Plot::new("grouped_bars")
        .legend(Legend::default())
        .y_axis_label(format!("Average {}", bars.measurement.label()))
        .show_background(false)
        .include_y(0.0)
        .x_axis_formatter(move |mark, _range| {
            let v = mark.value;
            if v >= 0.0 && (v - v.round()).abs() < 1e-6 {
                names.get(v.round() as usize).cloned().unwrap_or_default()
            } else {
                String::new()
            }
        })
        .show(ui, |plot_ui| {
            for (j, series) in bars.series.iter().enumerate() {
                let offset = (j as f64 + 0.5) * slot - group_width / 2.0;
                let chart_bars: Vec<Bar> = series
                    .means
                    .iter()
                    .enumerate()
                    .filter_map(|(i, mean)| {
                        mean.map(|m| {
                            Bar::new(i as f64 + offset, m)
                                .width(slot * 0.95)
                                .name(format!("{} · {}", bars.islands[i], series.species))
                        })
                    })
                    .collect();
                plot_ui.bar_chart(
                    BarChart::new(chart_bars)
                        .name(series.species.name())
                        .color(theme.species.color_for(series.species)),
                );
            }
        });
}
