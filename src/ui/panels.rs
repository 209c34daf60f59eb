use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::Metric;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar – menu, metric selection, dataset summary
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(RichText::new("PubMed").strong());
        for metric in Metric::ALL {
            ui.radio_value(&mut state.selection.metric, metric, metric.label());
        }

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} years loaded, {} publications in total",
                ds.len(),
                ds.total
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Bottom panel – year-range selection
// ---------------------------------------------------------------------------

/// Render the year-range sliders with bucket-aligned tick labels.
pub fn range_panel(ui: &mut Ui, state: &mut AppState) {
    let Some(buckets) = state.dataset.as_ref().map(|ds| ds.buckets) else {
        ui.label("No dataset loaded.");
        return;
    };

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Years");
        ui.add(
            egui::Slider::new(
                &mut state.selection.lower,
                buckets.year_min..=buckets.year_max,
            )
            .text("from"),
        );
        ui.add(
            egui::Slider::new(
                &mut state.selection.upper,
                buckets.year_min..=buckets.year_max,
            )
            .text("to"),
        );
    });

    // One label per bucket boundary, year_min through year_max.
    ui.horizontal(|ui: &mut Ui| {
        for tick in buckets.tick_marks() {
            ui.label(RichText::new(format!("{tick:.0}")).weak().small());
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open publications data")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        state.loading = true;
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows spanning {}..={}",
                    dataset.len(),
                    dataset.buckets.year_min,
                    dataset.buckets.year_max
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
                state.loading = false;
            }
        }
    }
}
