use eframe::egui;

use crate::state::AppState;
use crate::ui::{charts, map, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CarscopeApp {
    pub state: AppState,
}

impl CarscopeApp {
    pub fn new(state: AppState) -> Self {
        CarscopeApp { state }
    }
}

impl eframe::App for CarscopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and dataset status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: the scrollable dashboard ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui: &mut egui::Ui| {
                    // Geographic view: map year → per-state counts
                    ui.add_space(8.0);
                    ui.heading(
                        "Number of vehicle sales in different states by year of production",
                    );
                    ui.add_space(4.0);
                    panels::map_year_selector(ui, &mut self.state);
                    ui.add_space(8.0);
                    map::state_map(ui, &self.state.map_view);

                    ui.add_space(12.0);
                    ui.separator();

                    // Whole-dataset overview, computed once at startup
                    ui.columns(2, |columns: &mut [egui::Ui]| {
                        charts::best_sellers_chart(&mut columns[0], &self.state.best_sellers);
                        charts::price_histogram_chart(&mut columns[1], &self.state.price_hist);
                    });

                    ui.add_space(12.0);
                    ui.separator();

                    // Specific-search view
                    ui.heading("Specific search");
                    ui.add_space(4.0);
                    panels::search_controls(ui, &mut self.state);

                    ui.add_space(12.0);
                    ui.label(
                        egui::RichText::new(&self.state.search_view.headline)
                            .strong()
                            .size(18.0),
                    );
                    ui.add_space(4.0);
                    panels::summary_table(ui, &self.state.search_view.summary);

                    ui.add_space(12.0);
                    ui.strong("Filtered data plots");
                    ui.columns(2, |columns: &mut [egui::Ui]| {
                        charts::price_box_chart(
                            &mut columns[0],
                            self.state.search_view.price_spread.as_ref(),
                        );
                        charts::transmission_chart(
                            &mut columns[1],
                            &self.state.search_view.transmission_counts,
                        );
                    });
                    ui.add_space(8.0);
                    charts::count_bar_chart(
                        ui,
                        "best_selling_states",
                        "Best Selling States",
                        &self.state.search_view.state_counts,
                    );
                    ui.add_space(16.0);
                });
        });
    }
}
