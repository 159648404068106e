use glam::Vec3;
use spincube_common::CameraState;
use std::fmt;
use std::str::FromStr;

/// Errors from parsing key names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("unknown key {0:?} (expected up, down, left or right)")]
    UnknownKey(String),
}

/// One of the four directional keys that pan the camera.
///
/// Independent of any windowing crate; drivers map their own key codes
/// onto it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraKey {
    Up,
    Down,
    Left,
    Right,
}

impl CameraKey {
    pub const ALL: [CameraKey; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "ArrowUp",
            Self::Down => "ArrowDown",
            Self::Left => "ArrowLeft",
            Self::Right => "ArrowRight",
        }
    }

    /// Unit direction for this key. Up/down move along Z, left/right along X.
    pub fn direction(self) -> Vec3 {
        match self {
            Self::Up => Vec3::Z,
            Self::Down => Vec3::NEG_Z,
            Self::Left => Vec3::X,
            Self::Right => Vec3::NEG_X,
        }
    }
}

impl fmt::Display for CameraKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CameraKey {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let bare = lower.strip_prefix("arrow").unwrap_or(lower.as_str());
        match bare {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            _ => Err(InputError::UnknownKey(s.to_string())),
        }
    }
}

/// Parse a comma-separated key list such as `"up,up,left"`. Empty input
/// yields no keys.
pub fn parse_key_sequence(s: &str) -> Result<Vec<CameraKey>, InputError> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::parse::<CameraKey>)
        .collect()
}

/// A high-level camera action produced from a key press.
///
/// Input handling never touches camera state directly. It produces actions,
/// and the driver applies them between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Translate camera position and target by the same delta.
    Pan(Vec3),
}

impl Action {
    pub fn apply(self, camera: &mut CameraState) {
        match self {
            Action::Pan(delta) => {
                camera.apply_delta(delta);
                tracing::debug!(
                    position = ?camera.position,
                    target = ?camera.target,
                    "camera panned"
                );
            }
        }
    }
}

/// Maps directional keys to fixed-step pan actions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KeyMap {
    step: f32,
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::new(0.1)
    }
}

impl KeyMap {
    pub fn new(step: f32) -> Self {
        Self { step }
    }

    pub fn action(&self, key: CameraKey) -> Action {
        Action::Pan(key.direction() * self.step)
    }
}
