use glam::{Mat4, Vec3};
use spincube_kernel::FrameCommands;
use std::fmt::Write;

/// Renderer-agnostic interface. All renderers implement this trait.
///
/// A renderer consumes the commands produced by one tick and turns them into
/// output. It never mutates camera or timing state.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&mut self, frame: &FrameCommands) -> Self::Output;
}

/// Debug text renderer.
///
/// Produces a human-readable dump of one frame: camera, matrices and the
/// draw call. Useful for CLI output, logging, and testing without a GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer {
    frames: u64,
}

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of frames rendered so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

fn fmt_vec3(v: Vec3) -> String {
    format!("({:.2}, {:.2}, {:.2})", v.x, v.y, v.z)
}

fn write_matrix(out: &mut String, name: &str, m: &Mat4) {
    let _ = writeln!(out, "{name}:");
    for r in 0..4 {
        let row = m.row(r);
        let _ = writeln!(
            out,
            "  [{:>8.4} {:>8.4} {:>8.4} {:>8.4}]",
            row.x, row.y, row.z, row.w
        );
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&mut self, frame: &FrameCommands) -> String {
        let mut out = String::new();
        let [r, g, b] = frame.clear_color.to_array();
        let _ = writeln!(
            out,
            "=== Frame {} (t={:.3}s) ===",
            self.frames, frame.elapsed_seconds
        );
        let _ = writeln!(
            out,
            "Camera: eye={} target={}",
            fmt_vec3(frame.camera.position),
            fmt_vec3(frame.camera.target)
        );
        write_matrix(&mut out, "World", &frame.world);
        write_matrix(&mut out, "View", &frame.view);
        write_matrix(&mut out, "Projection", &frame.projection);
        let _ = writeln!(out, "Clear: ({r:.2}, {g:.2}, {b:.2}, 1.00)");
        let _ = writeln!(
            out,
            "Draw: {} indices ({} triangles)",
            frame.index_count,
            frame.index_count / 3
        );

        self.frames += 1;
        tracing::trace!(frame = self.frames, "debug frame rendered");
        out
    }
}
