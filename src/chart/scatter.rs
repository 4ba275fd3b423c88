use crate::data::filter::FilteredView;
use crate::data::model::Species;

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub species: Species,
    /// `[bill_length_mm, bill_depth_mm]` pairs.
    pub points: Vec<[f64; 2]>,
}

/// Bill length against bill depth, one series per species.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPlot {
    pub series: Vec<ScatterSeries>,
    /// Records lacking either coordinate.
    pub skipped: usize,
}

impl ScatterPlot {
    pub fn compute(view: &FilteredView) -> Self {
        let mut series: Vec<ScatterSeries> = Species::ALL
            .iter()
            .map(|&species| ScatterSeries {
                species,
                points: Vec::new(),
            })
            .collect();
        let mut skipped = 0;

        for record in view.records() {
            match (record.bill_length_mm, record.bill_depth_mm) {
                (Some(x), Some(y)) => {
                    if let Some(s) = series.iter_mut().find(|s| s.species == record.species) {
                        s.points.push([x, y]);
                    }
                }
                _ => skipped += 1,
            }
        }
        series.retain(|s| !s.points.is_empty());

        ScatterPlot { series, skipped }
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
