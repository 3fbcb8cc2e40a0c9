use eframe::egui;

use crate::data::model::PointFile;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct PointViewerApp {
    pub state: AppState,
    title: String,
}

impl PointViewerApp {
    pub fn new(state: AppState) -> Self {
        let title = window_title(state.file.as_ref());
        Self { state, title }
    }
}

/// Window title for the file on screen.
pub fn window_title(file: Option<&PointFile>) -> String {
    match file {
        Some(file) => format!("Point Viewer – {}", file.display_name()),
        None => "Point Viewer".to_owned(),
    }
}

impl eframe::App for PointViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: dataset + view controls ----
        egui::SidePanel::left("view_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: scatter plot ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_plot(ui, &mut self.state);
        });

        // Files opened from the menu change the title.
        let title = window_title(self.state.file.as_ref());
        if title != self.title {
            ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
            self.title = title;
        }
    }
}
