use glam::Vec3;
use serde::{Deserialize, Serialize};

/// RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub [f32; 3]);

impl Rgb {
    pub const RED: Self = Self::new(1.0, 0.0, 0.0);
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0);
    pub const CYAN: Self = Self::new(0.0, 1.0, 1.0);
    pub const MAGENTA: Self = Self::new(1.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self([r, g, b])
    }

    pub fn to_array(self) -> [f32; 3] {
        self.0
    }

    /// Opaque RGBA, as uploaded for clears.
    pub fn with_alpha(self, a: f32) -> [f32; 4] {
        [self.0[0], self.0[1], self.0[2], a]
    }
}

/// Camera position and the point it observes.
///
/// Input moves both vectors by the same delta, so the camera translates
/// rigidly and the view direction never changes. This is not an orbit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraState {
    pub position: Vec3,
    pub target: Vec3,
}

impl CameraState {
    /// Fixed up vector used for every look-at.
    pub const UP: Vec3 = Vec3::Y;

    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Shift position and target by the same delta.
    pub fn apply_delta(&mut self, delta: Vec3) {
        self.position += delta;
        self.target += delta;
    }

    /// Unit vector from position toward target (zero if they coincide).
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -4.0),
            target: Vec3::ZERO,
        }
    }
}
