use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::types::{CameraState, Rgb};

/// Errors from parsing configuration values supplied on the command line.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("expected three comma-separated components, got {0}")]
    ComponentCount(usize),
    #[error("invalid number {value:?}: {reason}")]
    InvalidNumber { value: String, reason: String },
}

/// Demo configuration: cube placement, camera, projection and window setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Cube center in world space.
    pub cube_position: Vec3,
    /// Uniform scale applied to the canonical ±1 cube.
    pub cube_scale: f32,
    /// Distance the camera moves per arrow key press.
    pub move_step: f32,
    /// Initial camera.
    pub camera: CameraState,
    /// Vertical field of view in degrees.
    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub clear_color: Rgb,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            cube_position: Vec3::ZERO,
            cube_scale: 0.35,
            move_step: 0.1,
            camera: CameraState::default(),
            fov_degrees: 45.0,
            near: 0.1,
            far: 1000.0,
            clear_color: Rgb::new(0.2, 0.5, 0.8),
            window_width: 1280,
            window_height: 720,
        }
    }
}

impl DemoConfig {
    pub fn fov_radians(&self) -> f32 {
        self.fov_degrees.to_radians()
    }
}

/// Parse `"x,y,z"` into a vector. Whitespace around components is ignored.
pub fn parse_vec3(s: &str) -> Result<Vec3, ConfigError> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(ConfigError::ComponentCount(parts.len()));
    }
    let mut out = [0.0_f32; 3];
    for (slot, part) in out.iter_mut().zip(&parts) {
        *slot = part.parse().map_err(|e: std::num::ParseFloatError| {
            ConfigError::InvalidNumber {
                value: (*part).to_string(),
                reason: e.to_string(),
            }
        })?;
    }
    Ok(Vec3::from_array(out))
}
