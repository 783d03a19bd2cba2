use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// SaleRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single vehicle sale (one cleaned row of the source CSV).
///
/// Only the columns the dashboard uses are kept; the loader guarantees that
/// none of them is missing and that `state` is uppercase.
#[derive(Debug, Clone, PartialEq)]
pub struct SaleRecord {
    /// Production year.
    pub year: i32,
    /// Manufacturer ("Ford", "Kia", ...).
    pub make: String,
    /// Model name within the manufacturer.
    pub model: String,
    /// Transmission type ("automatic", "manual", ...).
    pub transmission: String,
    /// Two-letter state code, uppercase.
    pub state: String,
    /// Odometer reading at sale time.
    pub odometer: f64,
    /// Selling price in dollars.
    pub selling_price: f64,
}

// ---------------------------------------------------------------------------
// SalesDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full cleaned dataset with pre-computed selector option lists.
///
/// Constructed once at startup and never mutated afterwards; every consumer
/// borrows it.
#[derive(Debug, Clone)]
pub struct SalesDataset {
    /// All sales (rows), in source order.
    pub records: Vec<SaleRecord>,
    /// Distinct production years, most recent first.
    pub years: Vec<i32>,
    /// Distinct manufacturers, alphabetical.
    pub makes: Vec<String>,
}

impl SalesDataset {
    /// Build the selector option lists from the cleaned rows.
    pub fn from_records(records: Vec<SaleRecord>) -> Self {
        let mut years: BTreeSet<i32> = BTreeSet::new();
        let mut makes: BTreeSet<String> = BTreeSet::new();

        for rec in &records {
            years.insert(rec.year);
            makes.insert(rec.make.clone());
        }

        SalesDataset {
            records,
            years: years.into_iter().rev().collect(),
            makes: makes.into_iter().collect(),
        }
    }

    /// Number of sales records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct models offered by a manufacturer, alphabetical.
    pub fn models_for_make(&self, make: &str) -> Vec<String> {
        let models: BTreeSet<&str> = self
            .records
            .iter()
            .filter(|r| r.make == make)
            .map(|r| r.model.as_str())
            .collect();
        models.into_iter().map(str::to_string).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(make: &str, model: &str, year: i32) -> SaleRecord {
        SaleRecord {
            year,
            make: make.to_string(),
            model: model.to_string(),
            transmission: "automatic".to_string(),
            state: "CA".to_string(),
            odometer: 50_000.0,
            selling_price: 15_000.0,
        }
    }

    #[test]
    fn option_lists_are_distinct_and_ordered() {
        let ds = SalesDataset::from_records(vec![
            rec("Kia", "Sorento", 2014),
            rec("Ford", "Fusion", 2015),
            rec("Ford", "Focus", 2013),
            rec("Ford", "Fusion", 2015),
        ]);

        assert_eq!(ds.years, vec![2015, 2014, 2013]);
        assert_eq!(ds.makes, vec!["Ford", "Kia"]);
    }

    #[test]
    fn models_for_make_is_scoped_and_sorted() {
        let ds = SalesDataset::from_records(vec![
            rec("Ford", "Fusion", 2015),
            rec("Ford", "Focus", 2013),
            rec("Kia", "Sorento", 2014),
            rec("Ford", "Focus", 2014),
        ]);

        assert_eq!(ds.models_for_make("Ford"), vec!["Focus", "Fusion"]);
        assert_eq!(ds.models_for_make("Kia"), vec!["Sorento"]);
        assert!(ds.models_for_make("Rolls-Royce").is_empty());
    }
}
