//! Rendering Adapter: renderer-agnostic interface.
//!
//! # Invariants
//! - Renderers read [`spincube_kernel::FrameCommands`] and never write camera state.
//! - Everything drawn derives from one tick's output.
//!
//! The GPU backend lives in `spincube-render-wgpu`; the debug text renderer
//! here serves headless runs and tests.

mod renderer;

pub use renderer::{DebugTextRenderer, Renderer};

pub fn crate_info() -> &'static str {
    "spincube-render v0.1.0"
}
