use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Categorical columns
// ---------------------------------------------------------------------------

/// Penguin species observed in the Palmer Archipelago.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Species {
    Adelie,
    Gentoo,
    Chinstrap,
}

impl Species {
    /// The species domain in display order.
    pub const ALL: [Species; 3] = [Species::Adelie, Species::Gentoo, Species::Chinstrap];

    pub fn name(self) -> &'static str {
        match self {
            Species::Adelie => "Adelie",
            Species::Gentoo => "Gentoo",
            Species::Chinstrap => "Chinstrap",
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum Island {
    Biscoe,
    Dream,
    Torgersen,
}

impl Island {
    pub const ALL: [Island; 3] = [Island::Biscoe, Island::Dream, Island::Torgersen];

    pub fn name(self) -> &'static str {
        match self {
            Island::Biscoe => "Biscoe",
            Island::Dream => "Dream",
            Island::Torgersen => "Torgersen",
        }
    }
}

impl fmt::Display for Island {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
}

impl Sex {
    pub fn name(self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
        }
    }
}

// ---------------------------------------------------------------------------
// Measurement – the numeric columns
// ---------------------------------------------------------------------------

/// One of the four numeric columns of a [`Record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measurement {
    BillLength,
    BillDepth,
    FlipperLength,
    BodyMass,
}

impl Measurement {
    /// Measurements offered by the attribute selector.
    pub const SELECTABLE: [Measurement; 3] = [
        Measurement::BillLength,
        Measurement::FlipperLength,
        Measurement::BodyMass,
    ];

    /// Column name as it appears in the tables.
    pub fn column(self) -> &'static str {
        match self {
            Measurement::BillLength => "bill_length_mm",
            Measurement::BillDepth => "bill_depth_mm",
            Measurement::FlipperLength => "flipper_length_mm",
            Measurement::BodyMass => "body_mass_g",
        }
    }

    /// Human-readable axis label.
    pub fn label(self) -> &'static str {
        match self {
            Measurement::BillLength => "Bill Length (mm)",
            Measurement::BillDepth => "Bill Depth (mm)",
            Measurement::FlipperLength => "Flipper Length (mm)",
            Measurement::BodyMass => "Body Mass (g)",
        }
    }

    /// Number of decimals the field data is recorded with.
    pub fn precision(self) -> usize {
        match self {
            Measurement::BillLength | Measurement::BillDepth => 1,
            Measurement::FlipperLength | Measurement::BodyMass => 0,
        }
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single observed penguin. Absent measurements are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub species: Species,
    pub island: Island,
    pub bill_length_mm: Option<f64>,
    pub bill_depth_mm: Option<f64>,
    pub flipper_length_mm: Option<f64>,
    pub body_mass_g: Option<f64>,
    pub sex: Option<Sex>,
    pub year: u16,
}

impl Record {
    pub fn measurement(&self, measurement: Measurement) -> Option<f64> {
        match measurement {
            Measurement::BillLength => self.bill_length_mm,
            Measurement::BillDepth => self.bill_depth_mm,
            Measurement::FlipperLength => self.flipper_length_mm,
            Measurement::BodyMass => self.body_mass_g,
        }
    }

    /// Text shown for this record in the given table column.
    pub fn cell(&self, column: Column) -> String {
        match column {
            Column::Species => self.species.to_string(),
            Column::Island => self.island.to_string(),
            Column::Measurement(m) => match self.measurement(m) {
                Some(v) => format!("{v:.prec$}", prec = m.precision()),
                None => MISSING.to_string(),
            },
            Column::Sex => self
                .sex
                .map(|s| s.name().to_string())
                .unwrap_or_else(|| MISSING.to_string()),
            Column::Year => self.year.to_string(),
        }
    }
}

/// Placeholder rendered for absent values.
pub const MISSING: &str = "NA";

// ---------------------------------------------------------------------------
// Column – table layout
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Species,
    Island,
    Measurement(Measurement),
    Sex,
    Year,
}

impl Column {
    /// All table columns in display order.
    pub const ALL: [Column; 8] = [
        Column::Species,
        Column::Island,
        Column::Measurement(Measurement::BillLength),
        Column::Measurement(Measurement::BillDepth),
        Column::Measurement(Measurement::FlipperLength),
        Column::Measurement(Measurement::BodyMass),
        Column::Sex,
        Column::Year,
    ];

    pub fn header(self) -> &'static str {
        match self {
            Column::Species => "species",
            Column::Island => "island",
            Column::Measurement(m) => m.column(),
            Column::Sex => "sex",
            Column::Year => "year",
        }
    }

    pub fn is_numeric(self) -> bool {
        matches!(self, Column::Measurement(_) | Column::Year)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full dataset. Built once at startup and shared read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Validate and wrap the given records. At least one record is required.
    pub fn new(records: Vec<Record>) -> Result<Self, super::DataError> {
        if records.is_empty() {
            return Err(super::DataError::Empty);
        }
        const MEASUREMENTS: [Measurement; 4] = [
            Measurement::BillLength,
            Measurement::BillDepth,
            Measurement::FlipperLength,
            Measurement::BodyMass,
        ];
        for (row, record) in records.iter().enumerate() {
            for m in MEASUREMENTS {
                if record.measurement(m).is_some_and(|v| !v.is_finite()) {
                    return Err(super::DataError::NonFinite {
                        row,
                        column: m.column(),
                    });
                }
            }
        }
        Ok(Dataset { records })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataError;

    fn adelie(bill: Option<f64>) -> Record {
        Record {
            species: Species::Adelie,
            island: Island::Torgersen,
            bill_length_mm: bill,
            bill_depth_mm: Some(18.7),
            flipper_length_mm: Some(181.0),
            body_mass_g: None,
            sex: None,
            year: 2007,
        }
    }

    #[test]
    fn test_cells_use_column_precision() {
        let record = adelie(Some(39.1));
        assert_eq!(record.cell(Column::Species), "Adelie");
        assert_eq!(record.cell(Column::Island), "Torgersen");
        assert_eq!(record.cell(Column::Measurement(Measurement::BillLength)), "39.1");
        assert_eq!(record.cell(Column::Measurement(Measurement::FlipperLength)), "181");
        assert_eq!(record.cell(Column::Year), "2007");
    }

    #[test]
    fn test_missing_cells_render_placeholder() {
        let record = adelie(None);
        assert_eq!(record.cell(Column::Measurement(Measurement::BillLength)), "NA");
        assert_eq!(record.cell(Column::Measurement(Measurement::BodyMass)), "NA");
        assert_eq!(record.cell(Column::Sex), "NA");
    }

    #[test]
    fn test_dataset_rejects_non_finite_measurement() {
        let err = Dataset::new(vec![adelie(Some(40.0)), adelie(Some(f64::NAN))]).unwrap_err();
        assert!(matches!(
            err,
            DataError::NonFinite {
                row: 1,
                column: "bill_length_mm"
            }
        ));
    }

    #[test]
    fn test_dataset_rejects_no_records() {
        assert!(matches!(Dataset::new(Vec::new()), Err(DataError::Empty)));
    }

    #[test]
    fn test_dataset_accepts_missing_values() {
        let ds = Dataset::new(vec![adelie(None), adelie(Some(41.0))]).unwrap();
        assert_eq!(ds.len(), 2);
        assert!(!ds.is_empty());
    }

    #[test]
    fn test_column_headers_cover_every_field() {
        let headers: Vec<&str> = Column::ALL.iter().map(|c| c.header()).collect();
        assert_eq!(
            headers,
            [
                "species",
                "island",
                "bill_length_mm",
                "bill_depth_mm",
                "flipper_length_mm",
                "body_mass_g",
                "sex",
                "year"
            ]
        );
    }
}
