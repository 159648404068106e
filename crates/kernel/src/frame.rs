use glam::{Mat4, Vec3};
use spincube_common::{CameraState, Rgb};
use std::f64::consts::PI;

use crate::projection::Projection;

/// Axis the cube spins about. Normalized before use.
pub const ROTATION_AXIS: Vec3 = Vec3::ONE;

/// Rotation angle in radians for an absolute elapsed time.
///
/// 23π radians per minute. Derived from the timestamp alone, so no error
/// accumulates across frames.
pub fn rotation_angle(elapsed_seconds: f64) -> f32 {
    (elapsed_seconds / 60.0 * 23.0 * PI) as f32
}

/// World matrix at `elapsed_seconds`: identity rotated about [`ROTATION_AXIS`].
pub fn world_matrix(elapsed_seconds: f64) -> Mat4 {
    Mat4::from_axis_angle(ROTATION_AXIS.normalize(), rotation_angle(elapsed_seconds))
}

/// Right-handed look-at from the camera position toward its target.
pub fn view_matrix(camera: &CameraState) -> Mat4 {
    Mat4::look_at_rh(camera.position, camera.target, CameraState::UP)
}

/// The two matrices recomputed every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMatrices {
    pub world: Mat4,
    pub view: Mat4,
}

/// Recompute world and view matrices. Pure in both arguments.
pub fn update(elapsed_seconds: f64, camera: &CameraState) -> FrameMatrices {
    FrameMatrices {
        world: world_matrix(elapsed_seconds),
        view: view_matrix(camera),
    }
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameCommands {
    pub elapsed_seconds: f64,
    pub world: Mat4,
    pub view: Mat4,
    pub projection: Mat4,
    pub camera: CameraState,
    pub clear_color: Rgb,
    pub index_count: u32,
}

/// Turns elapsed time and camera state into [`FrameCommands`].
///
/// Holds only the values that stay fixed between ticks. Camera state is
/// passed in on every call.
#[derive(Debug, Clone)]
pub struct FrameUpdater {
    projection: Projection,
    clear_color: Rgb,
    index_count: u32,
}

impl FrameUpdater {
    pub fn new(projection: Projection, clear_color: Rgb, index_count: u32) -> Self {
        Self {
            projection,
            clear_color,
            index_count,
        }
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// Replace the projection, e.g. after the surface is resized.
    pub fn set_projection(&mut self, projection: Projection) {
        tracing::debug!(aspect = projection.aspect(), "projection replaced");
        self.projection = projection;
    }

    /// Build the commands for one frame.
    pub fn tick(&self, elapsed_seconds: f64, camera: &CameraState) -> FrameCommands {
        let FrameMatrices { world, view } = update(elapsed_seconds, camera);
        FrameCommands {
            elapsed_seconds,
            world,
            view,
            projection: self.projection.matrix(),
            camera: *camera,
            clear_color: self.clear_color,
            index_count: self.index_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn view_matches_reference_look_at() {
        let camera = CameraState::new(Vec3::new(0.0, 0.0, -4.0), Vec3::ZERO);
        let view = update(0.0, &camera).view;
        // forward +Z, right -X, up +Y, origin 4 units in front
        let expected = Mat4::from_cols(
            Vec4::new(-1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, -1.0, 0.0),
            Vec4::new(0.0, 0.0, -4.0, 1.0),
        );
        assert!(view.abs_diff_eq(expected, 1e-6), "{view:?}");
        let origin = view.transform_point3(Vec3::ZERO);
        assert!(origin.abs_diff_eq(Vec3::new(0.0, 0.0, -4.0), 1e-6));
    }

    #[test]
    fn world_is_pure_in_elapsed_time() {
        let camera = CameraState::default();
        let a = update(12.345, &camera);
        let b = update(12.345, &camera);
        assert_eq!(a.world.to_cols_array(), b.world.to_cols_array());
        assert_eq!(a.view.to_cols_array(), b.view.to_cols_array());
    }

    #[test]
    fn world_starts_at_identity() {
        assert!(world_matrix(0.0).abs_diff_eq(Mat4::IDENTITY, 1e-7));
    }

    #[test]
    fn rotation_preserves_axis() {
        let world = world_matrix(7.5);
        let axis = world.transform_vector3(ROTATION_AXIS);
        assert!(axis.abs_diff_eq(ROTATION_AXIS, 1e-5));
        assert!(!world.abs_diff_eq(Mat4::IDENTITY, 1e-3));
    }

    #[test]
    fn angle_is_23_pi_per_minute() {
        let angle = rotation_angle(60.0);
        assert!((angle - 23.0 * std::f32::consts::PI).abs() < 1e-4);
        assert_eq!(rotation_angle(0.0), 0.0);
    }

    #[test]
    fn tick_bundles_fixed_and_per_frame_values() {
        let projection = Projection::new(45.0_f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0);
        let updater = FrameUpdater::new(projection, Rgb::new(0.2, 0.5, 0.8), 36);
        let camera = CameraState::default();
        let cmds = updater.tick(3.0, &camera);
        assert_eq!(cmds.index_count, 36);
        assert_eq!(cmds.projection, projection.matrix());
        assert_eq!(cmds.world, world_matrix(3.0));
        assert_eq!(cmds.view, view_matrix(&camera));
        assert_eq!(cmds.camera, camera);
        assert_eq!(cmds.clear_color, Rgb::new(0.2, 0.5, 0.8));
    }

    #[test]
    fn view_follows_camera_but_world_does_not() {
        let updater = FrameUpdater::new(Projection::default(), Rgb::RED, 36);
        let mut camera = CameraState::default();
        let before = updater.tick(1.0, &camera);
        camera.apply_delta(Vec3::new(0.5, 0.0, 0.0));
        let after = updater.tick(1.0, &camera);
        assert_eq!(before.world, after.world);
        assert_ne!(before.view, after.view);
        assert_eq!(before.projection, after.projection);
    }
}
