use std::path::Path;

use glam::DVec3;

use crate::camera::OrbitCamera;
use crate::data::loader::load_point_file;
use crate::data::model::PointFile;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full viewer state, independent of rendering.
pub struct AppState {
    /// Points currently on screen (None only if no file was ever loaded).
    pub file: Option<PointFile>,

    /// View orientation and centre.
    pub camera: OrbitCamera,

    /// Draw X/Y/Z guides along the bounding box edges.
    pub show_axes: bool,

    /// Ask the plot to refit its bounds on the next frame.
    pub reset_plot: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            file: None,
            camera: OrbitCamera::default(),
            show_axes: true,
            reset_plot: false,
            status_message: None,
        }
    }
}

impl AppState {
    pub fn new(file: PointFile) -> Self {
        let mut state = Self::default();
        state.set_file(file);
        state
    }

    /// Show a newly loaded file and centre the view on it.
    pub fn set_file(&mut self, file: PointFile) {
        match file.cloud.bounds() {
            Some(bounds) => self.camera.look_at(&bounds),
            None => self.camera.target = DVec3::ZERO,
        }
        self.file = Some(file);
        self.reset_plot = true;
        self.status_message = None;
    }

    /// Load another file. On failure the current points stay on screen and
    /// the error is reported in the status line.
    pub fn open(&mut self, path: &Path) {
        match load_point_file(path) {
            Ok(file) => self.set_file(file),
            Err(e) => {
                log::error!("Failed to load {} ({:?}): {e}", path.display(), e.kind());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Re-read the current file from disk.
    pub fn reload(&mut self) {
        if let Some(path) = self.file.as_ref().map(|f| f.path.clone()) {
            self.open(&path);
        }
    }

    /// Default orientation and refit the plot.
    pub fn reset_view(&mut self) {
        log::debug!("Resetting view");
        self.camera.reset();
        self.reset_plot = true;
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn point_file(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_new_centres_camera() {
        let tmp = point_file("0 0 0\n2 4 6\n");
        let state = AppState::new(load_point_file(tmp.path()).unwrap());
        assert_eq!(state.camera.target, DVec3::new(1.0, 2.0, 3.0));
        assert!(state.reset_plot);
        assert!(state.status_message.is_none());
    }

    #[test]
    fn test_failed_open_keeps_current_points() {
        let tmp = point_file("1 2 3\n");
        let mut state = AppState::new(load_point_file(tmp.path()).unwrap());

        let bad = point_file("1 2\n");
        state.open(bad.path());

        assert_eq!(state.file.as_ref().unwrap().cloud.len(), 1);
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
    }

    #[test]
    fn test_reload_picks_up_changes() {
        let mut tmp = point_file("1 2 3\n");
        let mut state = AppState::new(load_point_file(tmp.path()).unwrap());

        writeln!(tmp, "4 5 6").unwrap();
        tmp.flush().unwrap();
        state.reload();

        assert_eq!(state.file.as_ref().unwrap().cloud.len(), 2);
    }

    #[test]
    fn test_file_without_points_centres_on_origin() {
        let mut state = AppState::default();
        state.camera.target = DVec3::splat(5.0);
        state.set_file(PointFile {
            path: "empty.txt".into(),
            columns: 3,
            cloud: Default::default(),
        });
        assert_eq!(state.camera.target, DVec3::ZERO);
    }

    #[test]
    fn test_reset_view() {
        let mut state = AppState::default();
        state.camera.orbit(eframe::egui::Vec2::new(30.0, 30.0));
        state.reset_view();
        assert_eq!(state.camera, OrbitCamera::default());
        assert!(state.reset_plot);
    }
}
