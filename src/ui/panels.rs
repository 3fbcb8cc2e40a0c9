use eframe::egui::{self, Color32, RichText, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – dataset readout and view controls
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Dataset");
    ui.separator();

    match &state.file {
        Some(file) => {
            ui.label(RichText::new(file.display_name()).strong())
                .on_hover_text(file.path.display().to_string());
            ui.label(format!("{} points", file.cloud.len()));
            ui.label(format!("3 of {} columns used", file.columns));

            if let Some(bounds) = file.cloud.bounds() {
                ui.add_space(4.0);
                egui::Grid::new("bounds_grid")
                    .striped(true)
                    .show(ui, |ui: &mut Ui| {
                        ui.label("");
                        ui.strong("min");
                        ui.strong("max");
                        ui.end_row();
                        for (axis, lo, hi) in [
                            ("x", bounds.min.x, bounds.max.x),
                            ("y", bounds.min.y, bounds.max.y),
                            ("z", bounds.min.z, bounds.max.z),
                        ] {
                            ui.label(axis);
                            ui.label(format!("{lo:.4}"));
                            ui.label(format!("{hi:.4}"));
                            ui.end_row();
                        }
                    });
            }
        }
        None => {
            ui.label("No file loaded.");
        }
    }

    ui.add_space(12.0);
    ui.heading("View");
    ui.separator();

    let mut yaw = state.camera.yaw.to_degrees();
    if ui
        .add(egui::Slider::new(&mut yaw, -180.0..=180.0).text("Yaw").suffix("°"))
        .changed()
    {
        state.camera.set_yaw(yaw.to_radians());
    }

    let mut pitch = state.camera.pitch.to_degrees();
    if ui
        .add(egui::Slider::new(&mut pitch, -90.0..=90.0).text("Pitch").suffix("°"))
        .changed()
    {
        state.camera.set_pitch(pitch.to_radians());
    }

    ui.checkbox(&mut state.show_axes, "Show axes");

    if ui.button("Reset view").clicked() {
        state.reset_view();
    }

    ui.add_space(8.0);
    ui.small("Drag to rotate, scroll to pan, Ctrl+scroll to zoom, double-click to reset.");
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            let has_file = state.file.is_some();
            if ui.add_enabled(has_file, egui::Button::new("Reload")).clicked() {
                state.reload();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(file) = &state.file {
            ui.label(format!("{} points", file.cloud.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open point file")
        .add_filter("Point files", &["txt", "dat", "xyz"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.open(&path);
    }
}
