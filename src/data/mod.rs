/// Data layer: core types, the dataset provider, and filtering.
///
/// Architecture:
/// ```text
///   penguins .csv (embedded)
///        │
///        ▼
///   ┌──────────┐
///   │  loader  │  parse rows, `NA` → None
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset  │  validated, shared behind Arc
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter  │  species membership → FilteredView
///   └──────────┘
/// ```
pub mod filter;
pub mod loader;
pub mod model;
pub mod provider;

use thiserror::Error;

/// Errors raised while building the dataset.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("CSV row {row}: {source}")]
    Csv {
        row: usize,
        #[source]
        source: csv::Error,
    },

    #[error("row {row}: {column} is not a finite number")]
    NonFinite { row: usize, column: &'static str },

    #[error("dataset contains no records")]
    Empty,
}
