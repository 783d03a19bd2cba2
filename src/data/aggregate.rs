use std::collections::HashMap;

use super::model::{SaleRecord, SalesDataset};

// ---------------------------------------------------------------------------
// Categorical counts
// ---------------------------------------------------------------------------

/// Frequency per key over the given rows, sorted by count descending.
/// Ties keep first-encounter order (the sort is stable over a list built in
/// encounter order).
pub fn value_counts<'a, F>(
    rows: impl Iterator<Item = &'a SaleRecord>,
    key: F,
) -> Vec<(String, usize)>
where
    F: Fn(&SaleRecord) -> &str,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for rec in rows {
        let k = key(rec);
        match counts.get_mut(k) {
            Some(n) => *n += 1,
            None => {
                order.push(k.to_string());
                counts.insert(k.to_string(), 1);
            }
        }
    }

    let mut out: Vec<(String, usize)> = order
        .into_iter()
        .map(|k| {
            let n = counts[&k];
            (k, n)
        })
        .collect();
    out.sort_by(|a, b| b.1.cmp(&a.1));
    out
}

/// The `n` manufacturers with the most sales across the whole dataset.
pub fn top_makes(dataset: &SalesDataset, n: usize) -> Vec<(String, usize)> {
    let mut counts = value_counts(dataset.records.iter(), |r| &r.make);
    counts.truncate(n);
    counts
}

/// Sales count per state code for one production year. States with no sales
/// in that year are omitted, not zero-filled.
pub fn state_counts_for_year(dataset: &SalesDataset, year: i32) -> Vec<(String, usize)> {
    value_counts(
        dataset.records.iter().filter(|r| r.year == year),
        |r| &r.state,
    )
}

// ---------------------------------------------------------------------------
// Numeric distributions
// ---------------------------------------------------------------------------

/// Uniform-width binning of a numeric series.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Lower edge of the first bin.
    pub start: f64,
    /// Width of every bin.
    pub bin_width: f64,
    /// Count per bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// Bin `values` into `bins` uniform buckets spanning min..=max.
///
/// An empty series yields an empty histogram; a constant series yields a
/// single bucket holding everything.
pub fn histogram(values: impl Iterator<Item = f64>, bins: usize) -> Histogram {
    let values: Vec<f64> = values.filter(|v| v.is_finite()).collect();
    if values.is_empty() || bins == 0 {
        return Histogram {
            start: 0.0,
            bin_width: 0.0,
            counts: Vec::new(),
        };
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    if (max - min).abs() < f64::EPSILON {
        return Histogram {
            start: min,
            bin_width: 1.0,
            counts: vec![values.len()],
        };
    }

    let bin_width = (max - min) / bins as f64;
    let mut counts = vec![0usize; bins];
    for v in values {
        let mut idx = ((v - min) / bin_width) as usize;
        if idx >= bins {
            idx = bins - 1; // v == max lands in the last bucket
        }
        counts[idx] += 1;
    }

    Histogram {
        start: min,
        bin_width,
        counts,
    }
}

/// Five-number summary of selling price, the input for a box plot.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSpread {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

/// Compute the price spread over the given rows; `None` when there are none.
pub fn price_spread<'a>(rows: impl Iterator<Item = &'a SaleRecord>) -> Option<PriceSpread> {
    let mut prices: Vec<f64> = rows.map(|r| r.selling_price).collect();
    if prices.is_empty() {
        return None;
    }
    prices.sort_by(f64::total_cmp);

    Some(PriceSpread {
        min: prices[0],
        q1: quantile(&prices, 0.25),
        median: quantile(&prices, 0.5),
        q3: quantile(&prices, 0.75),
        max: prices[prices.len() - 1],
    })
}

/// Linear-interpolated quantile of a sorted, non-empty slice.
fn quantile(sorted: &[f64], q: f64) -> f64 {
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = pos - lo as f64;
        sorted[lo] + (sorted[hi] - sorted[lo]) * frac
    }
}

// ---------------------------------------------------------------------------
// One-row summary
// ---------------------------------------------------------------------------

/// Header of the summary table.
pub const SUMMARY_HEADER: [&str; 4] = ["Manufacturer", "Sold Cars", "Avg Price", "Avg Odometer"];

/// The one-row summary of a derived view, or the "no data" sentinel when the
/// view is empty (means over zero rows are never computed).
#[derive(Debug, Clone, PartialEq)]
pub enum SalesSummary {
    NoData,
    Data {
        make: String,
        sold: usize,
        avg_price: i64,
        avg_odometer: i64,
    },
}

impl SalesSummary {
    /// Summarize the rows of a derived view for one manufacturer.
    pub fn compute<'a>(make: &str, rows: impl Iterator<Item = &'a SaleRecord>) -> Self {
        let mut sold = 0usize;
        let mut price_total = 0.0;
        let mut odometer_total = 0.0;
        for rec in rows {
            sold += 1;
            price_total += rec.selling_price;
            odometer_total += rec.odometer;
        }

        if sold == 0 {
            return SalesSummary::NoData;
        }
        SalesSummary::Data {
            make: make.to_string(),
            sold,
            avg_price: (price_total / sold as f64).round() as i64,
            avg_odometer: (odometer_total / sold as f64).round() as i64,
        }
    }

    /// The four table cells, aligned with [`SUMMARY_HEADER`].
    pub fn cells(&self) -> [String; 4] {
        match self {
            SalesSummary::NoData => std::array::from_fn(|_| "no data".to_string()),
            SalesSummary::Data {
                make,
                sold,
                avg_price,
                avg_odometer,
            } => [
                make.clone(),
                sold.to_string(),
                avg_price.to_string(),
                avg_odometer.to_string(),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SalesDataset;

    fn rec(make: &str, year: i32, state: &str, price: f64, odometer: f64) -> SaleRecord {
        SaleRecord {
            year,
            make: make.to_string(),
            model: "M".to_string(),
            transmission: "automatic".to_string(),
            state: state.to_string(),
            odometer,
            selling_price: price,
        }
    }

    #[test]
    fn value_counts_sorts_descending_with_encounter_order_ties() {
        let rows = vec![
            rec("Kia", 2015, "CA", 1.0, 1.0),
            rec("Ford", 2015, "CA", 1.0, 1.0),
            rec("Ford", 2015, "CA", 1.0, 1.0),
            rec("BMW", 2015, "CA", 1.0, 1.0),
        ];
        let counts = value_counts(rows.iter(), |r| &r.make);
        // Kia and BMW tie at 1; Kia was seen first.
        assert_eq!(
            counts,
            vec![
                ("Ford".to_string(), 2),
                ("Kia".to_string(), 1),
                ("BMW".to_string(), 1),
            ]
        );
    }

    #[test]
    fn top_makes_truncates_to_n() {
        let ds = SalesDataset::from_records(vec![
            rec("Ford", 2015, "CA", 1.0, 1.0),
            rec("Ford", 2015, "CA", 1.0, 1.0),
            rec("Kia", 2015, "CA", 1.0, 1.0),
            rec("BMW", 2015, "CA", 1.0, 1.0),
        ]);
        let top = top_makes(&ds, 2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0], ("Ford".to_string(), 2));
    }

    #[test]
    fn state_counts_restrict_to_the_year_and_omit_absent_states() {
        let ds = SalesDataset::from_records(vec![
            rec("Ford", 2015, "CA", 1.0, 1.0),
            rec("Ford", 2015, "CA", 1.0, 1.0),
            rec("Ford", 2015, "TX", 1.0, 1.0),
            rec("Ford", 2014, "NY", 1.0, 1.0),
        ]);
        let counts = state_counts_for_year(&ds, 2015);
        assert_eq!(
            counts,
            vec![("CA".to_string(), 2), ("TX".to_string(), 1)]
        );
        assert!(state_counts_for_year(&ds, 1999).is_empty());
    }

    #[test]
    fn histogram_handles_empty_and_constant_series() {
        assert!(histogram(std::iter::empty(), 10).is_empty());

        let constant = histogram([5.0, 5.0, 5.0].into_iter(), 10);
        assert_eq!(constant.counts, vec![3]);
        assert_eq!(constant.start, 5.0);
    }

    #[test]
    fn histogram_counts_every_value_including_the_maximum() {
        let h = histogram((0..100).map(f64::from), 10);
        assert_eq!(h.counts.iter().sum::<usize>(), 100);
        assert_eq!(h.counts.len(), 10);
        // 99.0 must land in the last bucket, not fall off the end.
        assert!(h.counts[9] > 0);
    }

    #[test]
    fn price_spread_uses_interpolated_quartiles() {
        let rows: Vec<SaleRecord> = [1.0, 2.0, 3.0, 4.0]
            .iter()
            .map(|&p| rec("Ford", 2015, "CA", p, 1.0))
            .collect();
        let spread = price_spread(rows.iter()).unwrap();
        assert_eq!(spread.min, 1.0);
        assert_eq!(spread.q1, 1.75);
        assert_eq!(spread.median, 2.5);
        assert_eq!(spread.q3, 3.25);
        assert_eq!(spread.max, 4.0);

        assert_eq!(price_spread(std::iter::empty()), None);
    }

    #[test]
    fn summary_rounds_means_to_nearest_integer() {
        let rows = vec![
            rec("Ford", 2015, "CA", 100.0, 10.0),
            rec("Ford", 2015, "CA", 101.0, 11.0),
        ];
        let summary = SalesSummary::compute("Ford", rows.iter());
        assert_eq!(
            summary,
            SalesSummary::Data {
                make: "Ford".to_string(),
                sold: 2,
                avg_price: 101, // 100.5 rounds half away from zero
                avg_odometer: 11,
            }
        );
        assert_eq!(summary.cells()[1], "2");
    }

    #[test]
    fn empty_view_yields_the_no_data_sentinel_in_every_cell() {
        let summary = SalesSummary::compute("Ford", std::iter::empty());
        assert_eq!(summary, SalesSummary::NoData);
        assert_eq!(summary.cells(), std::array::from_fn::<String, 4, _>(|_| "no data".to_string()));
    }
}
