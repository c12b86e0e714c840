use std::time::Duration;

use crate::controllers::engine::engine_state::EngineState;
use crate::core::dynamics::maps::kinds::MapKinds;

/// Read-only overlay with the current view, thresholds and sliders.
pub fn show_status_panel(
    ctx: &egui::Context,
    state: &EngineState,
    map: MapKinds,
    last_render: Option<Duration>,
    last_error: Option<&str>,
) {
    let camera = state.camera();
    let thresholds = state.thresholds();
    let params = state.params();

    egui::Window::new("Fatou explorer")
        .default_pos([10.0, 10.0])
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("f(z) = {}", map));
            ui.separator();
            ui.label(format!("centre: {}", camera.center()));
            ui.label(format!("zoom: {:.6}", camera.zoom()));
            ui.label(format!("max iterations: {}", thresholds.max_iterations()));
            ui.label(format!("infinity: {:.6}", thresholds.infinity()));
            ui.label(format!("zero: {:.6}", thresholds.zero()));
            ui.separator();

            for id in params.slider_ids() {
                if let Ok(value) = params.slider_value(id) {
                    let marker = if state.selected_slider() == Some(id) { "▶ " } else { "" };
                    ui.label(format!("{}{}: {:.4},{:.4}", marker, id, value.real, value.imag));
                }
            }

            ui.separator();
            match last_render {
                Some(duration) => ui.label(format!("frame: {:.1} ms", duration.as_secs_f64() * 1000.0)),
                None => ui.label("frame: -"),
            };
            if let Some(message) = last_error {
                ui.colored_label(egui::Color32::RED, message);
            }
        });
}
