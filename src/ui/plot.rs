use eframe::egui::{Color32, PointerButton, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};
use glam::DVec3;

use crate::camera::OrbitCamera;
use crate::data::model::Bounds;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render the projected point cloud in the central panel.
///
/// Primary drag orbits the camera; scrolling and zooming are left to the plot.
pub fn scatter_plot(ui: &mut Ui, state: &mut AppState) {
    let file = match &state.file {
        Some(file) => file,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a point file to view it  (File → Open…)");
            });
            return;
        }
    };

    let camera = state.camera;
    let rotation = camera.rotation();
    let points: PlotPoints = file
        .cloud
        .points()
        .map(|p| camera.project_with(&rotation, p))
        .collect();

    let guides = match (state.show_axes, file.cloud.bounds()) {
        (true, Some(bounds)) => axis_guides(&camera, &bounds),
        _ => Vec::new(),
    };

    let mut plot = Plot::new("scatter_plot")
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_drag(false)
        .allow_boxed_zoom(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if std::mem::take(&mut state.reset_plot) {
        plot = plot.reset();
    }

    let response = plot
        .show(ui, |plot_ui| {
            plot_ui.points(Points::new(points));
            for (name, color, line) in guides {
                plot_ui.line(Line::new(line).name(name).color(color).width(1.5));
            }
        })
        .response;

    if response.dragged_by(PointerButton::Primary) {
        state.camera.orbit(response.drag_delta());
    }
    if response.double_clicked() {
        state.reset_view();
    }
}

/// X/Y/Z guide lines running from the bounds' min corner along each edge.
fn axis_guides(
    camera: &OrbitCamera,
    bounds: &Bounds,
) -> Vec<(&'static str, Color32, PlotPoints<'static>)> {
    let size = bounds.size();
    // Flat clouds still get a visible guide along the degenerate axis.
    let fallback = bounds.radius().max(1.0);

    [
        ("x", DVec3::X, size.x, Color32::RED),
        ("y", DVec3::Y, size.y, Color32::GREEN),
        ("z", DVec3::Z, size.z, Color32::from_rgb(80, 140, 255)),
    ]
    .into_iter()
    .map(|(name, dir, len, color)| {
        let len = if len > 0.0 { len } else { fallback };
        let line: PlotPoints<'static> = [bounds.min, bounds.min + dir * len]
            .into_iter()
            .map(|p| camera.project(p))
            .collect();
        (name, color, line)
    })
    .collect()
}
