//! Frame Updater: per-tick world and view matrices, fixed projection, frame clock.
//!
//! # Invariants
//! - The world matrix is a pure function of absolute elapsed time.
//! - The view matrix is a pure function of camera state.
//! - Projection changes only when the surface does.

mod clock;
mod frame;
mod projection;

pub use clock::{FrameClock, FrameTime};
pub use frame::{
    FrameCommands, FrameMatrices, FrameUpdater, ROTATION_AXIS, rotation_angle, update,
    view_matrix, world_matrix,
};
pub use projection::Projection;

pub fn crate_info() -> &'static str {
    "spincube-kernel v0.1.0"
}
