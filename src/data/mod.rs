/// Data layer: core types, loading, filtering, and aggregation.
///
/// Architecture:
/// ```text
///  car_prices.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + clean → SalesDataset (immutable)
///   └──────────┘
///        │
///        ▼
///   ┌────────────┐
///   │ SalesDataset│  Vec<SaleRecord>, selector option lists
///   └────────────┘
///        │
///        ▼
///   ┌──────────┐     ┌───────────┐
///   │  filter   │ ──▶ │ aggregate  │  derived view → counts / spreads / summary
///   └──────────┘     └───────────┘
///        │                 │
///        └────────┬────────┘
///                 ▼
///           ┌──────────┐
///           │   view    │  MapView / SearchView (reactive unit outputs)
///           └──────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod view;
