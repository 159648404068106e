use glam::Mat4;
use spincube_common::DemoConfig;

/// Perspective projection parameters. Computed once per surface size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    fov_y: f32,
    aspect: f32,
    near: f32,
    far: f32,
}

impl Default for Projection {
    fn default() -> Self {
        Self::from_config(&DemoConfig::default(), 1, 1)
    }
}

impl Projection {
    /// `fov_y` is in radians.
    pub fn new(fov_y: f32, aspect: f32, near: f32, far: f32) -> Self {
        Self {
            fov_y,
            aspect,
            near,
            far,
        }
    }

    /// Projection for a `width` x `height` surface. Zero height counts as 1.
    pub fn from_config(config: &DemoConfig, width: u32, height: u32) -> Self {
        let aspect = width as f32 / height.max(1) as f32;
        Self::new(config.fov_radians(), aspect, config.near, config.far)
    }

    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    pub fn near(&self) -> f32 {
        self.near
    }

    pub fn far(&self) -> f32 {
        self.far
    }

    /// Right-handed perspective with a `[0, 1]` depth range.
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, self.aspect, self.near, self.far)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn aspect_from_surface() {
        let p = Projection::from_config(&DemoConfig::default(), 1280, 720);
        assert!((p.aspect() - 1280.0 / 720.0).abs() < 1e-6);
        assert_eq!(p.near(), 0.1);
        assert_eq!(p.far(), 1000.0);
    }

    #[test]
    fn zero_height_does_not_divide_by_zero() {
        let p = Projection::from_config(&DemoConfig::default(), 800, 0);
        assert_eq!(p.aspect(), 800.0);
        assert!(p.matrix().is_finite());
    }

    #[test]
    fn near_and_far_map_to_depth_range() {
        let p = Projection::new(45.0_f32.to_radians(), 1.0, 0.1, 1000.0);
        let m = p.matrix();
        let near = m.project_point3(Vec3::new(0.0, 0.0, -0.1));
        let far = m.project_point3(Vec3::new(0.0, 0.0, -1000.0));
        assert!(near.z.abs() < 1e-5);
        assert!((far.z - 1.0).abs() < 1e-5);
    }
}
