//! The dashboard's dataflow graph.
//!
//! ```text
//!   selection.species ──► filtered ──┬──► stacked histogram  ◄── attribute, stacked_bins
//!                                    ├──► layered histogram  ◄── attribute, layered_bins
//!                                    ├──► scatter
//!                                    └──► grouped bars
//! ```
//!
//! Every node is a [`Memo`]. Reading a chart first refreshes `filtered`, then
//! keys the chart on the revision `filtered` reports, so a chart is only
//! recomputed when the view it is drawn from actually changed.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::chart::{GroupedBars, Histogram, ScatterPlot};
use crate::data::filter::FilteredView;
use crate::data::model::{Dataset, Measurement};
use crate::reactive::{Memo, Revision, Runtime};
use crate::state::Selection;

type HistogramKey = (Revision, Measurement, u32);

pub struct Pipeline {
    dataset: Arc<Dataset>,
    runtime: Runtime,
    filtered: Memo<BTreeSet<String>, FilteredView>,
    stacked: Memo<HistogramKey, Histogram>,
    layered: Memo<HistogramKey, Histogram>,
    scatter: Memo<Revision, ScatterPlot>,
    grouped: Memo<Revision, GroupedBars>,
}

/// How often each node has been computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PipelineStats {
    pub filtered: usize,
    pub stacked: usize,
    pub layered: usize,
    pub scatter: usize,
    pub grouped: usize,
}

impl Pipeline {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            dataset,
            runtime: Runtime::new(),
            filtered: Memo::new(),
            stacked: Memo::new(),
            layered: Memo::new(),
            scatter: Memo::new(),
            grouped: Memo::new(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Records whose species is selected.
    pub fn filtered(&mut self, selection: &Selection) -> &FilteredView {
        let Self {
            dataset,
            runtime,
            filtered,
            ..
        } = self;
        refresh_filtered(dataset, runtime, filtered, selection).0
    }

    pub fn stacked_histogram(&mut self, selection: &Selection) -> &Histogram {
        let Self {
            dataset,
            runtime,
            filtered,
            stacked,
            ..
        } = self;
        let (view, revision) = refresh_filtered(dataset, runtime, filtered, selection);
        let key = (revision, selection.attribute, selection.stacked_bins);
        stacked
            .get(runtime, key, |&(_, attribute, bins)| {
                log::debug!("binning {attribute} into {bins} stacked bins");
                Histogram::compute(view, attribute, bins)
            })
            .0
    }

    pub fn layered_histogram(&mut self, selection: &Selection) -> &Histogram {
        let Self {
            dataset,
            runtime,
            filtered,
            layered,
            ..
        } = self;
        let (view, revision) = refresh_filtered(dataset, runtime, filtered, selection);
        let key = (revision, selection.attribute, selection.layered_bins);
        layered
            .get(runtime, key, |&(_, attribute, bins)| {
                log::debug!("binning {attribute} into {bins} layered bins");
                Histogram::compute(view, attribute, bins)
            })
            .0
    }

    pub fn scatter(&mut self, selection: &Selection) -> &ScatterPlot {
        let Self {
            dataset,
            runtime,
            filtered,
            scatter,
            ..
        } = self;
        let (view, revision) = refresh_filtered(dataset, runtime, filtered, selection);
        scatter
            .get(runtime, revision, |_| {
                log::debug!("rebuilding bill scatterplot");
                ScatterPlot::compute(view)
            })
            .0
    }

    /// Mean bill length per island and species.
    pub fn grouped_bars(&mut self, selection: &Selection) -> &GroupedBars {
        let Self {
            dataset,
            runtime,
            filtered,
            grouped,
            ..
        } = self;
        let (view, revision) = refresh_filtered(dataset, runtime, filtered, selection);
        grouped
            .get(runtime, revision, |_| {
                log::debug!("rebuilding grouped bill length bars");
                GroupedBars::compute(view, Measurement::BillLength)
            })
            .0
    }

    pub fn stats(&self) -> PipelineStats {
        PipelineStats {
            filtered: self.filtered.recomputes(),
            stacked: self.stacked.recomputes(),
            layered: self.layered.recomputes(),
            scatter: self.scatter.recomputes(),
            grouped: self.grouped.recomputes(),
        }
    }
}

fn refresh_filtered<'a>(
    dataset: &Arc<Dataset>,
    runtime: &mut Runtime,
    filtered: &'a mut Memo<BTreeSet<String>, FilteredView>,
    selection: &Selection,
) -> (&'a FilteredView, Revision) {
    filtered.get(runtime, selection.species.clone(), |species| {
        log::debug!("filtering {} records for species {species:?}", dataset.len());
        FilteredView::new(dataset, species)
    })
}
