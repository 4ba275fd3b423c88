//! Plot-ready aggregations of a filtered view.
//!
//! Each model is a pure function of a [`FilteredView`](crate::data::filter::FilteredView)
//! plus whatever selection fields it needs; the UI only draws them.

pub mod grouped_bar;
pub mod histogram;
pub mod scatter;

pub use grouped_bar::GroupedBars;
pub use histogram::Histogram;
pub use scatter::ScatterPlot;
