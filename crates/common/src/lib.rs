//! Shared types for the spincube workspace: camera state, colors, demo configuration.

mod config;
mod types;

pub use config::{ConfigError, DemoConfig, parse_vec3};
pub use types::{CameraState, Rgb};

pub fn crate_info() -> &'static str {
    "spincube-common v0.1.0"
}
