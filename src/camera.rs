//! Orbit camera producing the per-frame model-view-projection transform.

use crate::math::Matrix44;
use crate::params::{CameraRig, GridConfig, RenderConfig};

/// Camera that spins the terrain about its centre, one step per frame
#[derive(Debug, Clone)]
pub struct CameraSystem {
    rig: CameraRig,
    projection: Matrix44,
    view: Matrix44,
    fov_y: f32,
    near: f32,
    far: f32,
}

impl CameraSystem {
    /// Create new camera system; the projection uses `render`'s aspect ratio
    pub fn new(rig: CameraRig, render: &RenderConfig) -> Self {
        let mut camera = Self {
            rig,
            projection: Matrix44::IDENTITY,
            view: Matrix44::IDENTITY,
            fov_y: render.fov_degrees.to_radians(),
            near: render.near_plane,
            far: render.far_plane,
        };
        camera.set_aspect(render.aspect_ratio());
        camera
            .view
            .set_translation(0.0, -camera.rig.eye_height, -camera.rig.distance);
        camera
    }

    pub fn rig(&self) -> &CameraRig {
        &self.rig
    }

    pub fn projection(&self) -> &Matrix44 {
        &self.projection
    }

    /// Rebuild the projection for a new viewport shape
    pub fn set_aspect(&mut self, aspect: f32) {
        self.projection
            .set_project(self.fov_y, aspect, self.near, self.far);
    }

    /// Spin angle after `frame` frames (radians)
    pub fn angle_at(&self, frame: u64) -> f32 {
        // Wrap in f64 so long sessions keep sub-frame precision
        let angle = frame as f64 * self.rig.spin_radians_per_frame as f64;
        angle.rem_euclid(std::f64::consts::TAU) as f32
    }

    /// Model transform: centre the grid on the origin, scale, then spin about Y
    pub fn model_matrix(&self, frame: u64, grid: &GridConfig) -> Matrix44 {
        let [cx, cy, cz] = grid.center();

        let mut model = Matrix44::IDENTITY;
        model.set_translation(-cx, -cy, -cz);

        let mut step = Matrix44::IDENTITY;
        step.set_scale(self.rig.scale, self.rig.scale, self.rig.scale);
        model.pre_multiply(step);

        step.set_rotate_y(self.angle_at(frame));
        model.pre_multiply(step);
        model
    }

    /// Write `projection * view * model` for `frame` into `out`
    pub fn update_transform(&self, frame: u64, grid: &GridConfig, out: &mut Matrix44) {
        out.set_multiply(self.projection, self.view)
            .post_multiply(self.model_matrix(frame, grid));
    }

    /// `projection * view * model` for `frame`
    pub fn model_view_projection(&self, frame: u64, grid: &GridConfig) -> Matrix44 {
        let mut mvp = Matrix44::IDENTITY;
        self.update_transform(frame, grid, &mut mvp);
        mvp
    }
}
