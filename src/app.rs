use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct PubTrendApp {
    pub state: AppState,
}

impl eframe::App for PubTrendApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar, metric selection ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: year-range sliders ----
        egui::TopBottomPanel::bottom("year_range").show(ctx, |ui| {
            panels::range_panel(ui, &mut self.state);
        });

        // ---- Central panel: bar chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::publications_plot(ui, &self.state);
        });
    }
}
