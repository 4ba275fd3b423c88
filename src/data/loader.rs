use std::io::Read;

use serde::Deserialize;

use super::model::{Island, Record, Sex, Species};
use super::DataError;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// One CSV row as written in the field data. Unparseable cells (the `NA`
/// placeholder) become `None`.
#[derive(Debug, Deserialize)]
struct RawRecord {
    species: Species,
    island: Island,
    #[serde(deserialize_with = "csv::invalid_option")]
    bill_length_mm: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    bill_depth_mm: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    flipper_length_mm: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    body_mass_g: Option<f64>,
    #[serde(deserialize_with = "csv::invalid_option")]
    sex: Option<Sex>,
    year: u16,
}

impl From<RawRecord> for Record {
    fn from(raw: RawRecord) -> Self {
        Record {
            species: raw.species,
            island: raw.island,
            bill_length_mm: raw.bill_length_mm,
            bill_depth_mm: raw.bill_depth_mm,
            flipper_length_mm: raw.flipper_length_mm,
            body_mass_g: raw.body_mass_g,
            sex: raw.sex,
            year: raw.year,
        }
    }
}

/// Parse penguin records from CSV with a header row.
///
/// Expected columns: `species, island, bill_length_mm, bill_depth_mm,
/// flipper_length_mm, body_mass_g, sex, year`. Rows keep file order.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Record>, DataError> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut records = Vec::new();

    for (row, result) in rdr.deserialize::<RawRecord>().enumerate() {
        let raw = result.map_err(|source| DataError::Csv { row, source })?;
        records.push(Record::from(raw));
    }

    log::debug!("parsed {} penguin records", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "species,island,bill_length_mm,bill_depth_mm,flipper_length_mm,body_mass_g,sex,year\n";

    #[test]
    fn test_rows_parse_in_file_order() {
        let text = format!(
            "{HEADER}Adelie,Torgersen,39.1,18.7,181,3750,male,2007\n\
             Gentoo,Biscoe,46.1,13.2,211,4500,female,2008\n"
        );
        let records = parse_csv(text.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].species, Species::Adelie);
        assert_eq!(records[0].bill_length_mm, Some(39.1));
        assert_eq!(records[0].sex, Some(Sex::Male));
        assert_eq!(records[1].island, Island::Biscoe);
        assert_eq!(records[1].body_mass_g, Some(4500.0));
        assert_eq!(records[1].year, 2008);
    }

    #[test]
    fn test_na_cells_become_none() {
        let text = format!("{HEADER}Adelie,Torgersen,NA,NA,NA,NA,NA,2007\n");
        let records = parse_csv(text.as_bytes()).unwrap();
        let r = &records[0];
        assert_eq!(r.bill_length_mm, None);
        assert_eq!(r.bill_depth_mm, None);
        assert_eq!(r.flipper_length_mm, None);
        assert_eq!(r.body_mass_g, None);
        assert_eq!(r.sex, None);
        assert_eq!(r.year, 2007);
    }

    #[test]
    fn test_unknown_species_reports_row() {
        let text = format!(
            "{HEADER}Adelie,Dream,37.0,18.0,190,3500,female,2009\n\
             Emperor,Dream,37.0,18.0,190,3500,female,2009\n"
        );
        let err = parse_csv(text.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::Csv { row: 1, .. }));
    }

    #[test]
    fn test_header_only_gives_no_records() {
        assert!(parse_csv(HEADER.as_bytes()).unwrap().is_empty());
    }
}
