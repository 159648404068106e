//! wgpu render backend for the spinning cube.
//!
//! Uploads the cube's positions, colors and indices once, then per frame
//! writes the world/view/projection uniforms, clears and draws.
//!
//! # Invariants
//! - The renderer never mutates camera or timing state.
//! - Back faces are culled; front faces wind counter-clockwise.
//! - Setup failures surface as [`GpuError`] and are fatal to the caller.

mod context;
mod error;
mod gpu;
mod shaders;

pub use context::GpuContext;
pub use error::GpuError;
pub use gpu::CubeRenderer;
pub use shaders::CUBE_SHADER;
