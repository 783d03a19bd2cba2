use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use thiserror::Error;

use super::model::{SaleRecord, SalesDataset};

/// Columns the dashboard reads. Every one must be present in the header, and
/// a row missing a value in any of them is dropped at load time.
pub const USED_COLUMNS: [&str; 7] = [
    "year",
    "make",
    "model",
    "transmission",
    "state",
    "odometer",
    "sellingprice",
];

/// Structural problems with the source table (as opposed to I/O failures,
/// which surface as plain `anyhow` context).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("source table has no '{0}' column")]
    MissingColumn(&'static str),
    #[error("no usable rows left after dropping incomplete records")]
    EmptyDataset,
}

// ---------------------------------------------------------------------------
// Raw row, before cleaning
// ---------------------------------------------------------------------------

/// One CSV row as it comes off disk. The source file carries more columns
/// (vin, trim, seller, ...); serde ignores them. Every used field is optional
/// here so that a gap shows up as `None` instead of a hard decode error.
#[derive(Debug, Deserialize)]
struct RawRow {
    year: Option<i32>,
    make: Option<String>,
    model: Option<String>,
    transmission: Option<String>,
    state: Option<String>,
    odometer: Option<f64>,
    #[serde(rename = "sellingprice")]
    selling_price: Option<f64>,
}

impl RawRow {
    /// Clean the row: reject any gap in a used field, uppercase the state.
    fn into_record(self) -> Option<SaleRecord> {
        Some(SaleRecord {
            year: self.year?,
            make: non_empty(self.make)?,
            model: non_empty(self.model)?,
            transmission: non_empty(self.transmission)?,
            state: non_empty(self.state)?.to_uppercase(),
            odometer: self.odometer?,
            selling_price: self.selling_price?,
        })
    }
}

fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.trim().is_empty())
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load and clean the sales table from a CSV file.
pub fn load_csv(path: &Path) -> Result<SalesDataset> {
    let file = std::fs::File::open(path)
        .with_context(|| format!("opening {}", path.display()))?;
    load_from_reader(file).with_context(|| format!("loading {}", path.display()))
}

/// Load and clean the sales table from any CSV byte stream.
pub fn load_from_reader<R: Read>(input: R) -> Result<SalesDataset> {
    let mut reader = csv::Reader::from_reader(input);

    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV header")?
        .iter()
        .map(|h| h.to_string())
        .collect();
    for col in USED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col).into());
        }
    }

    let mut records = Vec::new();
    let mut dropped = 0usize;

    for row in reader.deserialize::<RawRow>() {
        // A row that fails to decode (e.g. text in a numeric column) is
        // treated the same as a row with a gap: dropped, not fatal.
        match row {
            Ok(raw) => match raw.into_record() {
                Some(rec) => records.push(rec),
                None => dropped += 1,
            },
            Err(_) => dropped += 1,
        }
    }

    if dropped > 0 {
        log::info!("Dropped {dropped} incomplete rows while loading");
    }
    if records.is_empty() {
        return Err(LoadError::EmptyDataset.into());
    }

    Ok(SalesDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "year,make,model,trim,transmission,vin,state,odometer,sellingprice\n";

    fn load(body: &str) -> Result<SalesDataset> {
        load_from_reader(format!("{HEADER}{body}").as_bytes())
    }

    #[test]
    fn loads_rows_and_uppercases_state() {
        let ds = load(
            "2015,Ford,Fusion,SE,automatic,v1,ca,23000,17500\n\
             2014,Kia,Sorento,LX,automatic,v2,tx,41000,14300\n",
        )
        .unwrap();

        assert_eq!(ds.len(), 2);
        assert!(ds.records.iter().all(|r| r.state.chars().all(|c| c.is_ascii_uppercase())));
        assert_eq!(ds.records[0].state, "CA");
        assert_eq!(ds.records[0].selling_price, 17500.0);
    }

    #[test]
    fn drops_rows_with_gaps_in_used_columns() {
        let ds = load(
            "2015,Ford,Fusion,SE,automatic,v1,ca,23000,17500\n\
             2015,Ford,Fusion,SE,,v2,ca,23000,17500\n\
             ,Ford,Fusion,SE,automatic,v3,ca,23000,17500\n\
             2015,Ford,Fusion,SE,automatic,v4,ca,,17500\n",
        )
        .unwrap();

        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn drops_rows_that_fail_to_decode() {
        let ds = load(
            "2015,Ford,Fusion,SE,automatic,v1,ca,23000,17500\n\
             not-a-year,Ford,Fusion,SE,automatic,v2,ca,23000,17500\n",
        )
        .unwrap();

        assert_eq!(ds.len(), 1);
    }

    #[test]
    fn missing_used_column_is_an_error() {
        let err = load_from_reader("year,make,model\n2015,Ford,Fusion\n".as_bytes())
            .unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("transmission"), "unexpected error: {msg}");
    }

    #[test]
    fn all_rows_incomplete_is_an_error() {
        let err = load("2015,Ford,Fusion,SE,,v1,ca,23000,17500\n").unwrap_err();
        assert!(format!("{err:#}").contains("no usable rows"));
    }
}
