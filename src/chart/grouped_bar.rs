use crate::data::filter::FilteredView;
use crate::data::model::{Island, Measurement, Species};

#[derive(Debug, Clone, PartialEq)]
pub struct GroupedSeries {
    pub species: Species,
    /// Mean per island, aligned with [`GroupedBars::islands`]. `None` when the
    /// species has no measured bird on that island.
    pub means: Vec<Option<f64>>,
}

/// Mean of a measurement per island, one bar per species within each island.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedBars {
    pub measurement: Measurement,
    /// Islands present in the view, in domain order.
    pub islands: Vec<Island>,
    pub series: Vec<GroupedSeries>,
}

impl GroupedBars {
    pub fn compute(view: &FilteredView, measurement: Measurement) -> Self {
        let islands: Vec<Island> = Island::ALL
            .into_iter()
            .filter(|&island| view.records().any(|r| r.island == island))
            .collect();

        let series = Species::ALL
            .into_iter()
            .filter(|&species| view.records().any(|r| r.species == species))
            .map(|species| {
                let means = islands
                    .iter()
                    .map(|&island| {
                        let (sum, n) = view
                            .records()
                            .filter(|r| r.species == species && r.island == island)
                            .filter_map(|r| r.measurement(measurement))
                            .fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
                        (n > 0).then(|| sum / n as f64)
                    })
                    .collect();
                GroupedSeries { species, means }
            })
            .collect();

        GroupedBars {
            measurement,
            islands,
            series,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.series
            .iter()
            .all(|s| s.means.iter().all(Option::is_none))
    }
}
