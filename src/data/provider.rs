use super::loader;
use super::model::Dataset;
use super::DataError;

/// Penguin observations compiled into the binary, in palmerpenguins layout.
const PENGUINS_CSV: &str = include_str!("../../assets/penguins_sample.csv");

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Build the penguin dataset served for the lifetime of the process.
pub fn load_penguins() -> Result<Dataset, DataError> {
    let records = loader::parse_csv(PENGUINS_CSV.as_bytes())?;
    Dataset::new(records)
}
