use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_6, PI, TAU};

use eframe::egui::Vec2;
use glam::{DMat3, DVec3};

use crate::data::model::Bounds;

const DEFAULT_YAW: f64 = -FRAC_PI_4;
const DEFAULT_PITCH: f64 = FRAC_PI_6;

/// Drag sensitivity, radians per screen point.
const RADIANS_PER_POINT: f64 = 0.01;

// ---------------------------------------------------------------------------
// Orbit camera
// ---------------------------------------------------------------------------

/// Orthographic camera orbiting a target point, Z up.
///
/// `yaw` spins the scene about the world Z axis, `pitch` tilts it towards a
/// top-down view. Projected coordinates keep world units, so the plot's own
/// zoom and pan work unchanged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f64,
    pub pitch: f64,
    pub target: DVec3,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            target: DVec3::ZERO,
        }
    }
}

impl OrbitCamera {
    /// Centre the camera on a cloud, keeping the current orientation.
    pub fn look_at(&mut self, bounds: &Bounds) {
        self.target = bounds.center();
    }

    /// Restore the default orientation, keeping the target.
    pub fn reset(&mut self) {
        *self = Self {
            target: self.target,
            ..Self::default()
        };
    }

    /// Turn a pointer drag into a rotation. Dragging right spins the scene
    /// right; dragging down tilts it towards a top-down view.
    pub fn orbit(&mut self, drag: Vec2) {
        self.set_yaw(self.yaw + drag.x as f64 * RADIANS_PER_POINT);
        self.set_pitch(self.pitch + drag.y as f64 * RADIANS_PER_POINT);
    }

    /// Yaw kept within `[-π, π]`; angles outside are wrapped.
    pub fn set_yaw(&mut self, yaw: f64) {
        self.yaw = if (-PI..=PI).contains(&yaw) {
            yaw
        } else {
            (yaw + PI).rem_euclid(TAU) - PI
        };
    }

    /// Pitch clamped to `[-π/2, π/2]`.
    pub fn set_pitch(&mut self, pitch: f64) {
        self.pitch = pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// World → view rotation. View axes: x right, y into the screen, z up.
    pub fn rotation(&self) -> DMat3 {
        DMat3::from_rotation_x(self.pitch) * DMat3::from_rotation_z(self.yaw)
    }

    /// Project a world point onto plot coordinates.
    pub fn project(&self, point: DVec3) -> [f64; 2] {
        self.project_with(&self.rotation(), point)
    }

    /// Same as [`project`](Self::project) with a precomputed rotation, for
    /// projecting many points per frame.
    pub fn project_with(&self, rotation: &DMat3, point: DVec3) -> [f64; 2] {
        let v = *rotation * (point - self.target);
        [v.x, v.z]
    }
}
