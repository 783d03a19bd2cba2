use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, GridMark, Legend, Plot};

use crate::color;
use crate::data::aggregate::{Histogram, PriceSpread};

const CHART_HEIGHT: f32 = 280.0;
const SERIES_FILL: Color32 = Color32::from_rgb(99, 110, 250);

// ---------------------------------------------------------------------------
// Chart widgets
// ---------------------------------------------------------------------------

fn chart_title(ui: &mut Ui, title: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(title).strong().size(16.0));
    });
}

/// Placeholder shown instead of a plot when the current view matched no rows.
fn no_data_placeholder(ui: &mut Ui) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(CHART_HEIGHT * 0.4);
        ui.label(RichText::new("no data for this selection").weak());
        ui.add_space(CHART_HEIGHT * 0.4);
    });
}

/// Vertical bar chart over categorical counts, one bar per key in the order
/// given (descending count).
pub fn count_bar_chart(ui: &mut Ui, id: &str, title: &str, counts: &[(String, usize)]) {
    chart_title(ui, title);
    if counts.is_empty() {
        no_data_placeholder(ui);
        return;
    }

    let labels: Vec<String> = counts.iter().map(|(k, _)| k.clone()).collect();
    let bars: Vec<Bar> = counts
        .iter()
        .enumerate()
        .map(|(i, (label, n))| Bar::new(i as f64, *n as f64).name(label).width(0.7))
        .collect();
    let chart = BarChart::new(bars).color(SERIES_FILL);

    Plot::new(id.to_string())
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark: GridMark, _range| categorical_label(&labels, mark))
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));
}

/// Transmission distribution: one colored series per transmission type so the
/// legend doubles as the category key (the original rendered this as a pie).
pub fn transmission_chart(ui: &mut Ui, counts: &[(String, usize)]) {
    chart_title(ui, "Transmission");
    if counts.is_empty() {
        no_data_placeholder(ui);
        return;
    }

    let palette = color::generate_palette(counts.len());
    let charts: Vec<BarChart> = counts
        .iter()
        .zip(palette)
        .enumerate()
        .map(|(i, ((label, n), fill))| {
            BarChart::new(vec![Bar::new(i as f64, *n as f64).width(0.7)])
                .name(label)
                .color(fill)
        })
        .collect();

    let labels: Vec<String> = counts.iter().map(|(k, _)| k.clone()).collect();
    Plot::new("transmission_distribution")
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark: GridMark, _range| categorical_label(&labels, mark))
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}

/// Top manufacturers by sales across the whole dataset.
pub fn best_sellers_chart(ui: &mut Ui, counts: &[(String, usize)]) {
    count_bar_chart(ui, "best_sellers", "Best selling manufacturers", counts);
}

/// Full-dataset selling-price histogram.
pub fn price_histogram_chart(ui: &mut Ui, hist: &Histogram) {
    chart_title(ui, "Sale Price Histogram");
    if hist.is_empty() {
        no_data_placeholder(ui);
        return;
    }

    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .map(|(i, &n)| {
            let center = hist.start + (i as f64 + 0.5) * hist.bin_width;
            Bar::new(center, n as f64).width(hist.bin_width)
        })
        .collect();
    let chart = BarChart::new(bars).color(SERIES_FILL);

    Plot::new("price_histogram")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| plot_ui.bar_chart(chart));
}

/// Horizontal box plot of selling price over the current derived view.
pub fn price_box_chart(ui: &mut Ui, spread: Option<&PriceSpread>) {
    chart_title(ui, "Selling price distribution");
    let Some(s) = spread else {
        no_data_placeholder(ui);
        return;
    };

    let elem = BoxElem::new(0.0, BoxSpread::new(s.min, s.q1, s.median, s.q3, s.max))
        .box_width(0.5)
        .fill(SERIES_FILL.gamma_multiply(0.5));
    let plot_box = BoxPlot::new(vec![elem]).horizontal().color(SERIES_FILL);

    Plot::new("price_box")
        .height(CHART_HEIGHT)
        .allow_drag(false)
        .allow_scroll(false)
        .show_axes([true, false])
        .show(ui, |plot_ui| plot_ui.box_plot(plot_box));
}

/// Show the category label at integer marks, nothing in between.
fn categorical_label(labels: &[String], mark: GridMark) -> String {
    let rounded = mark.value.round();
    if (mark.value - rounded).abs() > 0.05 || rounded < 0.0 {
        return String::new();
    }
    labels.get(rounded as usize).cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categorical_labels_only_appear_on_integer_marks() {
        let labels = vec!["CA".to_string(), "TX".to_string()];
        let mark = |value: f64| GridMark {
            value,
            step_size: 1.0,
        };

        assert_eq!(categorical_label(&labels, mark(0.0)), "CA");
        assert_eq!(categorical_label(&labels, mark(1.0)), "TX");
        assert_eq!(categorical_label(&labels, mark(0.5)), "");
        assert_eq!(categorical_label(&labels, mark(-1.0)), "");
        assert_eq!(categorical_label(&labels, mark(5.0)), "");
    }
}
