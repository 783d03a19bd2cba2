use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::aggregate::{SalesSummary, SUMMARY_HEADER};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Title and dataset status line.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading("Vehicle Sales in USA");
        ui.separator();
        ui.label(format!(
            "{} sales records, {} manufacturers, {} production years",
            state.dataset.len(),
            state.dataset.makes.len(),
            state.dataset.years.len(),
        ));
    });
}

// ---------------------------------------------------------------------------
// Selector widgets
// ---------------------------------------------------------------------------

/// Production-year dropdown driving the map.
pub fn map_year_selector(ui: &mut Ui, state: &mut AppState) {
    let years = state.dataset.years.clone();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select year of production");
        egui::ComboBox::from_id_salt("map_year")
            .selected_text(state.map_year.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for year in &years {
                    if ui
                        .selectable_label(state.map_year == *year, year.to_string())
                        .clicked()
                    {
                        state.set_map_year(*year);
                    }
                }
            });
    });
}

/// The manufacturer / model / year dropdowns of the search panel.
///
/// Manufacturer is required and non-clearable; model and year offer an "Any"
/// entry meaning "no filter". The model list always reflects the current
/// manufacturer and is rebuilt by the state layer on every make change.
pub fn search_controls(ui: &mut Ui, state: &mut AppState) {
    // Clone the option lists so the state can be mutated inside the closures.
    let makes = state.dataset.makes.clone();
    let years = state.dataset.years.clone();
    let models = state.search_view.model_options.clone();

    ui.strong("Manufacturer");
    egui::ComboBox::from_id_salt("manufacturer_name")
        .width(220.0)
        .selected_text(state.selectors.make.clone())
        .show_ui(ui, |ui: &mut Ui| {
            for make in &makes {
                if ui
                    .selectable_label(state.selectors.make == *make, make)
                    .clicked()
                {
                    state.select_make(make.clone());
                }
            }
        });

    ui.add_space(4.0);
    ui.strong("Model");
    let model_text = state
        .selectors
        .model
        .clone()
        .unwrap_or_else(|| "Any".to_string());
    egui::ComboBox::from_id_salt("model_name")
        .width(220.0)
        .selected_text(model_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.selectors.model.is_none(), "Any")
                .clicked()
            {
                state.select_model(None);
            }
            for model in &models {
                let is_selected = state.selectors.model.as_deref() == Some(model.as_str());
                if ui.selectable_label(is_selected, model).clicked() {
                    state.select_model(Some(model.clone()));
                }
            }
        });

    ui.add_space(4.0);
    ui.strong("Year of Production");
    let year_text = state
        .selectors
        .year
        .map(|y| y.to_string())
        .unwrap_or_else(|| "Any".to_string());
    egui::ComboBox::from_id_salt("year_of_production")
        .width(220.0)
        .selected_text(year_text)
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(state.selectors.year.is_none(), "Any")
                .clicked()
            {
                state.select_year(None);
            }
            for year in &years {
                if ui
                    .selectable_label(state.selectors.year == Some(*year), year.to_string())
                    .clicked()
                {
                    state.select_year(Some(*year));
                }
            }
        });
}

// ---------------------------------------------------------------------------
// Summary table
// ---------------------------------------------------------------------------

/// One-row summary of the current derived view; every cell reads "no data"
/// when the selection matched nothing.
pub fn summary_table(ui: &mut Ui, summary: &SalesSummary) {
    let cells = summary.cells();

    TableBuilder::new(ui)
        .striped(true)
        .vscroll(false)
        .columns(Column::remainder(), SUMMARY_HEADER.len())
        .header(22.0, |mut header| {
            for title in SUMMARY_HEADER {
                header.col(|ui: &mut Ui| {
                    ui.label(RichText::new(title).strong());
                });
            }
        })
        .body(|mut body| {
            body.row(20.0, |mut row| {
                for cell in &cells {
                    row.col(|ui: &mut Ui| {
                        ui.label(cell);
                    });
                }
            });
        });
}
