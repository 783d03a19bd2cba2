use crate::data::aggregate::{self, Histogram};
use crate::data::filter::SelectorState;
use crate::data::model::SalesDataset;
use crate::data::view::{MapView, SearchView};

/// Best-sellers chart size.
pub const TOP_MAKES: usize = 10;
/// Price-histogram resolution.
pub const PRICE_BINS: usize = 40;

/// Defaults carried over from the original dashboard; both fall back to the
/// first available option when the data lacks them.
const DEFAULT_MAP_YEAR: i32 = 2015;
const DEFAULT_MAKE: &str = "Ford";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
///
/// The dataset is immutable after construction. Everything else is either a
/// selector value or the last output of a reactive unit; each setter mutates
/// one input and rebuilds exactly the views that watch it.
pub struct AppState {
    /// The cleaned dataset, loaded once at startup.
    pub dataset: SalesDataset,

    /// Top-10 manufacturers by sales (whole dataset, computed at startup).
    pub best_sellers: Vec<(String, usize)>,
    /// Selling-price histogram (whole dataset, computed at startup).
    pub price_hist: Histogram,

    /// Production year driving the map.
    pub map_year: i32,
    /// Last-built geographic view.
    pub map_view: MapView,

    /// Manufacturer / year / model selectors of the search panel.
    pub selectors: SelectorState,
    /// Last-built search view.
    pub search_view: SearchView,
}

impl AppState {
    /// Build the initial state: static artifacts plus both reactive units
    /// evaluated against the default selections.
    pub fn new(dataset: SalesDataset) -> Self {
        let map_year = if dataset.years.contains(&DEFAULT_MAP_YEAR) {
            DEFAULT_MAP_YEAR
        } else {
            dataset.years.first().copied().unwrap_or(DEFAULT_MAP_YEAR)
        };
        let make = if dataset.makes.iter().any(|m| m == DEFAULT_MAKE) {
            DEFAULT_MAKE.to_string()
        } else {
            dataset.makes.first().cloned().unwrap_or_default()
        };

        let best_sellers = aggregate::top_makes(&dataset, TOP_MAKES);
        let price_hist = aggregate::histogram(
            dataset.records.iter().map(|r| r.selling_price),
            PRICE_BINS,
        );

        let selectors = SelectorState::new(make);
        let map_view = MapView::build(&dataset, map_year);
        let search_view = SearchView::build(&dataset, &selectors);

        AppState {
            dataset,
            best_sellers,
            price_hist,
            map_year,
            map_view,
            selectors,
            search_view,
        }
    }

    /// Map-year change: re-evaluate the geographic view only.
    pub fn set_map_year(&mut self, year: i32) {
        if self.map_year != year {
            self.map_year = year;
            self.map_view = MapView::build(&self.dataset, year);
        }
    }

    /// Selector changes: each re-evaluates the search view once.
    pub fn select_make(&mut self, make: String) {
        if self.selectors.make != make {
            self.selectors.select_make(make);
            self.refresh_search_view();
        }
    }

    pub fn select_year(&mut self, year: Option<i32>) {
        if self.selectors.year != year {
            self.selectors.select_year(year);
            self.refresh_search_view();
        }
    }

    pub fn select_model(&mut self, model: Option<String>) {
        if self.selectors.model != model {
            self.selectors.select_model(model);
            self.refresh_search_view();
        }
    }

    fn refresh_search_view(&mut self) {
        self.search_view = SearchView::build(&self.dataset, &self.selectors);
    }
}
