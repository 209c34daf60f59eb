use eframe::egui::Ui;
use egui_plot::{Bar, BarChart, Plot};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Publications bar chart (central panel)
// ---------------------------------------------------------------------------

/// Render the publications bar chart in the central panel.
pub fn publications_plot(ui: &mut Ui, state: &AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a publications file to view the chart  (File → Open…)");
        });
        return;
    }

    let color = state.colors.color_for(state.selection.metric);

    let bars: Vec<Bar> = state
        .current_view()
        .into_iter()
        .map(|(year, value)| {
            Bar::new(f64::from(year), value as f64)
                .width(0.8)
                .fill(color)
        })
        .collect();

    let chart = BarChart::new(bars)
        .name(state.selection.metric.label())
        .element_formatter(Box::new(|bar: &Bar, _chart: &BarChart| {
            format!("Year: {:.0}\nPublications: {:.0}", bar.argument, bar.value)
        }));

    Plot::new("publications_plot")
        .legend(egui_plot::Legend::default())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(chart);
        });
}
