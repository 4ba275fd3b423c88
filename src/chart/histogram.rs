use crate::config::MAX_BINS;
use crate::data::filter::FilteredView;
use crate::data::model::{Measurement, Species};

/// Per-species counts on the shared bin edges of a [`Histogram`].
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramSeries {
    pub species: Species,
    pub counts: Vec<u32>,
}

/// Frequency distribution of one measurement, split by species.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub measurement: Measurement,
    /// `bins + 1` ascending edges. Empty when there was nothing to bin.
    pub edges: Vec<f64>,
    /// One entry per species with at least one binned value, in domain order.
    pub series: Vec<HistogramSeries>,
    /// Records of the view whose value for `measurement` is absent.
    pub missing: usize,
}

impl Histogram {
    /// Bin `measurement` over the view into `bins` equal-width bins.
    ///
    /// Bins span the range of the present values; the last bin is closed on
    /// the right. A single distinct value `v` spans `[v - 0.5, v + 0.5]`.
    /// `bins` is clamped to `1..=MAX_BINS`.
    pub fn compute(view: &FilteredView, measurement: Measurement, bins: u32) -> Self {
        let mut missing = 0;
        let mut values: Vec<(Species, f64)> = Vec::with_capacity(view.len());
        for record in view.records() {
            match record.measurement(measurement) {
                Some(v) => values.push((record.species, v)),
                None => missing += 1,
            }
        }

        if values.is_empty() {
            return Histogram {
                measurement,
                edges: Vec::new(),
                series: Vec::new(),
                missing,
            };
        }

        let bins = bins.clamp(1, MAX_BINS) as usize;
        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, v)| {
                (lo.min(v), hi.max(v))
            });
        if lo == hi {
            lo -= 0.5;
            hi += 0.5;
        }
        let width = (hi - lo) / bins as f64;
        let mut edges: Vec<f64> = (0..bins).map(|i| lo + width * i as f64).collect();
        edges.push(hi);

        let mut series: Vec<HistogramSeries> = Vec::new();
        for species in Species::ALL {
            let mut counts = vec![0u32; bins];
            let mut any = false;
            for &(_, v) in values.iter().filter(|(s, _)| *s == species) {
                let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
                counts[idx] += 1;
                any = true;
            }
            if any {
                series.push(HistogramSeries { species, counts });
            }
        }

        Histogram {
            measurement,
            edges,
            series,
            missing,
        }
    }

    pub fn bin_count(&self) -> usize {
        self.edges.len().saturating_sub(1)
    }

    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if self.bin_count() > 0 => (hi - lo) / self.bin_count() as f64,
            _ => 0.0,
        }
    }

    /// Centre of bin `i`.
    pub fn bin_center(&self, i: usize) -> f64 {
        self.edges[i] + self.bin_width() / 2.0
    }

    /// No value was present to bin.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Number of values binned over all species.
    pub fn total(&self) -> u32 {
        self.series.iter().flat_map(|s| s.counts.iter()).sum()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::sync::Arc;

    use super::*;
    use crate::data::model::{Dataset, Island, Record};

    fn record(species: Species, mass: Option<f64>) -> Record {
        Record {
            species,
            island: Island::Dream,
            bill_length_mm: Some(40.0),
            bill_depth_mm: Some(18.0),
            flipper_length_mm: Some(190.0),
            body_mass_g: mass,
            sex: None,
            year: 2009,
        }
    }

    fn view_of(records: Vec<Record>, species: &[&str]) -> FilteredView {
        let ds = Arc::new(Dataset::new(records).unwrap());
        let selected: BTreeSet<String> = species.iter().map(|s| s.to_string()).collect();
        FilteredView::new(&ds, &selected)
    }

    #[test]
    fn test_missing_values_are_excluded_but_counted() {
        let view = view_of(
            vec![
                record(Species::Adelie, Some(3000.0)),
                record(Species::Adelie, None),
                record(Species::Adelie, Some(4000.0)),
                record(Species::Gentoo, None),
            ],
            &["Adelie", "Gentoo"],
        );
        let hist = Histogram::compute(&view, Measurement::BodyMass, 4);

        // The view itself still carries every record.
        assert_eq!(view.len(), 4);
        assert_eq!(hist.total(), 2);
        assert_eq!(hist.missing, 2);
        assert_eq!(hist.series.len(), 1);
        assert_eq!(hist.series[0].species, Species::Adelie);
    }

    #[test]
    fn test_edges_span_range_and_last_bin_is_closed() {
        let view = view_of(
            vec![
                record(Species::Adelie, Some(0.0)),
                record(Species::Adelie, Some(2.5)),
                record(Species::Adelie, Some(10.0)),
            ],
            &["Adelie"],
        );
        let hist = Histogram::compute(&view, Measurement::BodyMass, 4);
        assert_eq!(hist.edges, vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(hist.series[0].counts, vec![1, 1, 0, 1]);
        assert_eq!(hist.bin_width(), 2.5);
        assert_eq!(hist.bin_center(0), 1.25);
    }

    #[test]
    fn test_series_share_edges() {
        let view = view_of(
            vec![
                record(Species::Gentoo, Some(5000.0)),
                record(Species::Adelie, Some(3000.0)),
                record(Species::Chinstrap, Some(3900.0)),
                record(Species::Gentoo, Some(5400.0)),
            ],
            &["Adelie", "Gentoo", "Chinstrap"],
        );
        let hist = Histogram::compute(&view, Measurement::BodyMass, 3);
        assert_eq!(hist.bin_count(), 3);
        let order: Vec<Species> = hist.series.iter().map(|s| s.species).collect();
        assert_eq!(order, Species::ALL.to_vec());
        assert_eq!(hist.series[0].counts, vec![1, 0, 0]);
        assert_eq!(hist.series[1].counts, vec![0, 0, 2]);
        assert_eq!(hist.series[2].counts, vec![0, 1, 0]);
    }

    #[test]
    fn test_all_missing_gives_empty_histogram() {
        let view = view_of(
            vec![record(Species::Adelie, None), record(Species::Adelie, None)],
            &["Adelie"],
        );
        let hist = Histogram::compute(&view, Measurement::BodyMass, 30);
        assert!(hist.is_empty());
        assert_eq!(hist.bin_count(), 0);
        assert_eq!(hist.bin_width(), 0.0);
        assert_eq!(hist.missing, 2);
    }

    #[test]
    fn test_empty_view_gives_empty_histogram() {
        let view = view_of(vec![record(Species::Adelie, Some(1.0))], &[]);
        let hist = Histogram::compute(&view, Measurement::BodyMass, 30);
        assert!(hist.is_empty());
        assert_eq!(hist.missing, 0);
    }

    #[test]
    fn test_single_value_gets_unit_range() {
        let view = view_of(
            vec![
                record(Species::Adelie, Some(3500.0)),
                record(Species::Adelie, Some(3500.0)),
            ],
            &["Adelie"],
        );
        let hist = Histogram::compute(&view, Measurement::BodyMass, 2);
        assert_eq!(hist.edges, vec![3499.5, 3500.0, 3500.5]);
        assert_eq!(hist.series[0].counts, vec![0, 2]);
    }

    #[test]
    fn test_zero_bins_means_one() {
        let view = view_of(
            vec![
                record(Species::Adelie, Some(1.0)),
                record(Species::Adelie, Some(3.0)),
            ],
            &["Adelie"],
        );
        let hist = Histogram::compute(&view, Measurement::BodyMass, 0);
        assert_eq!(hist.bin_count(), 1);
        assert_eq!(hist.series[0].counts, vec![2]);
    }

    #[test]
    fn test_bin_count_matches_request() {
        let records = (0..50)
            .map(|i| record(Species::Gentoo, Some(4000.0 + i as f64 * 13.0)))
            .collect();
        let view = view_of(records, &["Gentoo"]);
        for bins in [1, 7, 30, 100] {
            let hist = Histogram::compute(&view, Measurement::BodyMass, bins);
            assert_eq!(hist.bin_count(), bins as usize);
            assert_eq!(hist.total(), 50);
        }
    }

    #[test]
    fn test_huge_bin_request_is_capped() {
        let view = view_of(
            vec![
                record(Species::Adelie, Some(3000.0)),
                record(Species::Adelie, Some(4000.0)),
            ],
            &["Adelie"],
        );
        let hist = Histogram::compute(&view, Measurement::BodyMass, u32::MAX);
        assert_eq!(hist.bin_count(), MAX_BINS as usize);
        assert_eq!(hist.edges.len(), MAX_BINS as usize + 1);
        assert_eq!(hist.total(), 2);
    }
}
