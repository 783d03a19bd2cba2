use super::model::SalesDataset;

// ---------------------------------------------------------------------------
// Selector state: the three user-controlled filter inputs
// ---------------------------------------------------------------------------

/// Current values of the specific-search selectors.
///
/// Manufacturer is always set; year and model are optional, and `None` means
/// "no filter applied" for that dimension.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectorState {
    pub make: String,
    pub year: Option<i32>,
    pub model: Option<String>,
}

impl SelectorState {
    pub fn new(make: impl Into<String>) -> Self {
        SelectorState {
            make: make.into(),
            year: None,
            model: None,
        }
    }

    /// Switch manufacturer. The model list depends on the manufacturer, so a
    /// previously chosen model is cleared before the next evaluation.
    pub fn select_make(&mut self, make: impl Into<String>) {
        let make = make.into();
        if self.make != make {
            self.model = None;
            self.make = make;
        }
    }

    pub fn select_year(&mut self, year: Option<i32>) {
        self.year = year;
    }

    pub fn select_model(&mut self, model: Option<String>) {
        self.model = model;
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Return indices of records matching all active selectors.
///
/// The make filter always applies; year and model are independent conjunctive
/// filters applied only when present. The result (the derived view) is a
/// subset of the make-only view by construction, and may be empty.
pub fn filtered_indices(dataset: &SalesDataset, selectors: &SelectorState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| {
            rec.make == selectors.make
                && selectors.year.is_none_or(|y| rec.year == y)
                && selectors.model.as_deref().is_none_or(|m| rec.model == m)
        })
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{SaleRecord, SalesDataset};

    fn rec(make: &str, model: &str, year: i32) -> SaleRecord {
        SaleRecord {
            year,
            make: make.to_string(),
            model: model.to_string(),
            transmission: "automatic".to_string(),
            state: "CA".to_string(),
            odometer: 60_000.0,
            selling_price: 12_000.0,
        }
    }

    fn dataset() -> SalesDataset {
        SalesDataset::from_records(vec![
            rec("Ford", "Fusion", 2015), // 0
            rec("Kia", "Sorento", 2015), // 1
            rec("Ford", "Focus", 2014),  // 2
            rec("Ford", "Fusion", 2014), // 3
            rec("Kia", "Optima", 2013),  // 4
        ])
    }

    #[test]
    fn make_only_returns_exactly_that_make() {
        let ds = dataset();
        let idx = filtered_indices(&ds, &SelectorState::new("Ford"));
        assert_eq!(idx, vec![0, 2, 3]);
        assert!(idx.iter().all(|&i| ds.records[i].make == "Ford"));
    }

    #[test]
    fn year_filter_intersects_and_is_a_subset_of_make_only() {
        let ds = dataset();
        let mut sel = SelectorState::new("Ford");
        let make_only = filtered_indices(&ds, &sel);

        sel.select_year(Some(2014));
        let with_year = filtered_indices(&ds, &sel);

        assert_eq!(with_year, vec![2, 3]);
        assert!(with_year.iter().all(|i| make_only.contains(i)));
    }

    #[test]
    fn year_and_model_are_conjunctive() {
        let ds = dataset();
        let mut sel = SelectorState::new("Ford");
        sel.select_year(Some(2014));
        sel.select_model(Some("Fusion".to_string()));
        assert_eq!(filtered_indices(&ds, &sel), vec![3]);
    }

    #[test]
    fn changing_make_clears_the_model_selection() {
        let mut sel = SelectorState::new("Ford");
        sel.select_model(Some("Fusion".to_string()));

        sel.select_make("Kia");
        assert_eq!(sel.model, None);

        // Re-selecting the same make keeps the model.
        sel.select_model(Some("Sorento".to_string()));
        sel.select_make("Kia");
        assert_eq!(sel.model.as_deref(), Some("Sorento"));
    }

    #[test]
    fn no_match_yields_an_empty_view() {
        let ds = dataset();
        let mut sel = SelectorState::new("Kia");
        sel.select_year(Some(2014));
        assert!(filtered_indices(&ds, &sel).is_empty());
    }
}
