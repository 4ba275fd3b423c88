use std::collections::BTreeSet;
use std::sync::Arc;

use crate::config::{DEFAULT_BINS, DEFAULT_SPECIES, LAYERED_BIN_RANGE};
use crate::data::model::{Dataset, Measurement};
use crate::pipeline::Pipeline;

// ---------------------------------------------------------------------------
// Selection – one version of the user's inputs
// ---------------------------------------------------------------------------

/// The user's current choices. Never mutated in place: every interaction
/// produces the next value through [`Selection::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Measurement binned by both histograms.
    pub attribute: Measurement,
    /// Species names to keep. Names outside the domain match nothing.
    pub species: BTreeSet<String>,
    /// Bin count of the stacked histogram (at least 1, no upper bound).
    pub stacked_bins: u32,
    /// Bin count of the layered histogram, within [`LAYERED_BIN_RANGE`].
    pub layered_bins: u32,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            attribute: Measurement::BillLength,
            species: DEFAULT_SPECIES.iter().map(|s| s.to_string()).collect(),
            stacked_bins: DEFAULT_BINS,
            layered_bins: DEFAULT_BINS,
        }
    }
}

/// A single user interaction with the sidebar.
#[derive(Debug, Clone, PartialEq)]
pub enum SelectionEvent {
    SetAttribute(Measurement),
    SetSpecies { name: String, selected: bool },
    SetStackedBins(u32),
    SetLayeredBins(u32),
}

impl Selection {
    /// The selection that follows `event`. Bin counts are clamped to their
    /// valid ranges.
    pub fn apply(&self, event: SelectionEvent) -> Selection {
        let mut next = self.clone();
        match event {
            SelectionEvent::SetAttribute(m) => next.attribute = m,
            SelectionEvent::SetSpecies { name, selected } => {
                if selected {
                    next.species.insert(name);
                } else {
                    next.species.remove(&name);
                }
            }
            SelectionEvent::SetStackedBins(n) => next.stacked_bins = n.max(1),
            SelectionEvent::SetLayeredBins(n) => {
                next.layered_bins = n.clamp(*LAYERED_BIN_RANGE.start(), *LAYERED_BIN_RANGE.end())
            }
        }
        next
    }
}

// ---------------------------------------------------------------------------
// Chart tabs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartTab {
    #[default]
    StackedHistogram,
    LayeredHistogram,
    Scatter,
    GroupedBar,
}

impl ChartTab {
    pub const ALL: [ChartTab; 4] = [
        ChartTab::StackedHistogram,
        ChartTab::LayeredHistogram,
        ChartTab::Scatter,
        ChartTab::GroupedBar,
    ];

    pub fn title(self) -> &'static str {
        match self {
            ChartTab::StackedHistogram => "Stacked Histogram",
            ChartTab::LayeredHistogram => "Layered Histogram",
            ChartTab::Scatter => "Scatterplot",
            ChartTab::GroupedBar => "Grouped Bar Plot",
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Derived views of the dataset, refreshed on read.
    pub pipeline: Pipeline,

    /// Current selection.
    pub selection: Selection,

    /// Incremented each time `selection` changes value.
    pub version: u64,

    /// Chart shown in the tabbed card.
    pub active_tab: ChartTab,
}

impl AppState {
    pub fn new(dataset: Arc<Dataset>) -> Self {
        Self {
            pipeline: Pipeline::new(dataset),
            selection: Selection::default(),
            version: 0,
            active_tab: ChartTab::default(),
        }
    }

    pub fn dataset(&self) -> &Dataset {
        self.pipeline.dataset()
    }

    /// Apply a user interaction. Returns whether the selection changed.
    pub fn apply(&mut self, event: SelectionEvent) -> bool {
        let next = self.selection.apply(event);
        if next == self.selection {
            return false;
        }
        self.selection = next;
        self.version += 1;
        log::debug!("selection v{}: {:?}", self.version, self.selection);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::provider::load_penguins;

    fn state() -> AppState {
        AppState::new(Arc::new(load_penguins().unwrap()))
    }

    #[test]
    fn test_defaults() {
        let sel = Selection::default();
        assert_eq!(sel.attribute, Measurement::BillLength);
        assert_eq!(sel.species, BTreeSet::from(["Adelie".to_string()]));
        assert_eq!(sel.stacked_bins, 30);
        assert_eq!(sel.layered_bins, 30);
    }

    #[test]
    fn test_bins_are_clamped() {
        let sel = Selection::default();
        assert_eq!(sel.apply(SelectionEvent::SetStackedBins(0)).stacked_bins, 1);
        assert_eq!(sel.apply(SelectionEvent::SetStackedBins(500)).stacked_bins, 500);
        assert_eq!(sel.apply(SelectionEvent::SetLayeredBins(0)).layered_bins, 1);
        assert_eq!(sel.apply(SelectionEvent::SetLayeredBins(250)).layered_bins, 100);
        assert_eq!(sel.apply(SelectionEvent::SetLayeredBins(64)).layered_bins, 64);
    }

    #[test]
    fn test_species_toggle() {
        let sel = Selection::default()
            .apply(SelectionEvent::SetSpecies {
                name: "Gentoo".into(),
                selected: true,
            })
            .apply(SelectionEvent::SetSpecies {
                name: "Adelie".into(),
                selected: false,
            });
        assert_eq!(sel.species, BTreeSet::from(["Gentoo".to_string()]));
    }

    #[test]
    fn test_apply_leaves_previous_version_untouched() {
        let before = Selection::default();
        let after = before.apply(SelectionEvent::SetAttribute(Measurement::BodyMass));
        assert_eq!(before.attribute, Measurement::BillLength);
        assert_eq!(after.attribute, Measurement::BodyMass);
    }

    #[test]
    fn test_version_bumps_only_on_change() {
        let mut st = state();
        assert!(!st.apply(SelectionEvent::SetAttribute(Measurement::BillLength)));
        assert!(!st.apply(SelectionEvent::SetSpecies {
            name: "Adelie".into(),
            selected: true,
        }));
        assert_eq!(st.version, 0);

        assert!(st.apply(SelectionEvent::SetAttribute(Measurement::FlipperLength)));
        assert!(st.apply(SelectionEvent::SetLayeredBins(10)));
        assert_eq!(st.version, 2);

        assert!(st.apply(SelectionEvent::SetLayeredBins(100)));
        // Clamped to the value it already has.
        assert!(!st.apply(SelectionEvent::SetLayeredBins(250)));
        assert_eq!(st.version, 3);
    }

    #[test]
    fn test_dataset_is_shared_with_pipeline() {
        let st = state();
        assert_eq!(st.dataset().len(), 344);
    }
}
