use super::aggregate::{
    self, PriceSpread, SalesSummary,
};
use super::filter::{filtered_indices, SelectorState};
use super::model::SalesDataset;

// ---------------------------------------------------------------------------
// Reactive units: pure (dataset, inputs) → named outputs
// ---------------------------------------------------------------------------
//
// Each unit is rebuilt in full whenever one of its watched inputs changes;
// nothing persists across evaluations beyond the inputs themselves.

/// Geographic view: production year → per-state sales counts.
#[derive(Debug, Clone)]
pub struct MapView {
    pub year: i32,
    /// Count per state code, descending; states without sales are omitted.
    pub state_counts: Vec<(String, usize)>,
}

impl MapView {
    pub fn build(dataset: &SalesDataset, year: i32) -> Self {
        MapView {
            year,
            state_counts: aggregate::state_counts_for_year(dataset, year),
        }
    }
}

/// Specific-search view: manufacturer + optional year/model → every artifact
/// of the search panel, all derived from one filtered view.
#[derive(Debug, Clone)]
pub struct SearchView {
    /// Headline above the summary table.
    pub headline: String,
    /// One-row summary, or the "no data" sentinel.
    pub summary: SalesSummary,
    /// Box-plot input; `None` when the view is empty.
    pub price_spread: Option<PriceSpread>,
    /// Transmission distribution over the view.
    pub transmission_counts: Vec<(String, usize)>,
    /// Per-state sales over the view, descending.
    pub state_counts: Vec<(String, usize)>,
    /// Models selectable for the current manufacturer.
    pub model_options: Vec<String>,
}

impl SearchView {
    pub fn build(dataset: &SalesDataset, selectors: &SelectorState) -> Self {
        let indices = filtered_indices(dataset, selectors);
        let rows = || indices.iter().map(|&i| &dataset.records[i]);

        SearchView {
            headline: format!("Data on {} sales", selectors.make),
            summary: SalesSummary::compute(&selectors.make, rows()),
            price_spread: aggregate::price_spread(rows()),
            transmission_counts: aggregate::value_counts(rows(), |r| &r.transmission),
            state_counts: aggregate::value_counts(rows(), |r| &r.state),
            model_options: dataset.models_for_make(&selectors.make),
        }
    }

    /// Whether the current selection matched no rows at all.
    pub fn is_empty(&self) -> bool {
        self.summary == SalesSummary::NoData
    }
}
