use clap::{Parser, Subcommand};
use glam::Vec3;
use serde::Serialize;
use spincube_common::{CameraState, DemoConfig, parse_vec3};
use spincube_input::{CameraKey, KeyMap, parse_key_sequence};
use spincube_kernel::{FrameClock, FrameUpdater, Projection};
use spincube_mesh::{CubeMesh, Vertex, generate_cube};
use spincube_render::{DebugTextRenderer, Renderer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "spincube-cli", about = "Headless tool for the spincube demo")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Generate the cube mesh and print it
    Mesh {
        /// Cube half-extent
        #[arg(short, long, default_value_t = 0.35)]
        scale: f32,
        /// Cube center as x,y,z
        #[arg(short, long, value_parser = parse_vec3, allow_hyphen_values = true, default_value = "0,0,0")]
        position: Vec3,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Run the frame updater headlessly and print the last frame
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "60")]
        frames: u64,
        /// Simulated frames per second
        #[arg(long, default_value = "60")]
        fps: f64,
        /// Comma-separated keys to press, one per frame (up,down,left,right)
        #[arg(short, long)]
        keys: Option<String>,
    },
}

#[derive(Serialize)]
struct MeshReport {
    vertices: Vec<Vertex>,
    indices: Vec<u16>,
    triangles: usize,
}

impl MeshReport {
    fn new(mesh: &CubeMesh) -> Self {
        Self {
            vertices: mesh.vertices().collect(),
            indices: mesh.indices().to_vec(),
            triangles: mesh.triangle_count(),
        }
    }
}

fn print_mesh(mesh: &CubeMesh) {
    println!(
        "Cube: {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    );
    for (i, v) in mesh.vertices().enumerate() {
        let [r, g, b] = v.color.to_array();
        println!(
            "  {i}: pos=({:.3}, {:.3}, {:.3}) color=({r:.1}, {g:.1}, {b:.1})",
            v.position.x, v.position.y, v.position.z
        );
    }
    for (i, tri) in mesh.indices().chunks_exact(3).enumerate() {
        println!("  tri {i:>2}: {} {} {}", tri[0], tri[1], tri[2]);
    }
}

/// Outcome of a headless run.
struct Simulation {
    camera: CameraState,
    frames: u64,
    last_frame: String,
}

/// Run `frames` ticks at `fps`, pressing `keys[i]` before frame `i`. The run
/// extends to cover every key.
fn simulate(config: &DemoConfig, frames: u64, fps: f64, keys: &[CameraKey]) -> Simulation {
    let mesh = generate_cube(config.cube_position, config.cube_scale);
    let projection = Projection::from_config(config, config.window_width, config.window_height);
    let updater = FrameUpdater::new(projection, config.clear_color, mesh.indices().len() as u32);
    let keymap = KeyMap::new(config.move_step);
    let mut camera = config.camera;
    let mut clock = FrameClock::fixed(fps);
    let mut renderer = DebugTextRenderer::new();

    let total = frames.max(keys.len() as u64).max(1);
    let mut last_frame = String::new();
    for _ in 0..total {
        let time = clock.advance();
        if let Some(key) = keys.get(time.frame as usize) {
            keymap.action(*key).apply(&mut camera);
        }
        let commands = updater.tick(time.elapsed, &camera);
        tracing::debug!(frame = time.frame, elapsed = time.elapsed, "tick");
        last_frame = renderer.render(&commands);
    }

    Simulation {
        camera,
        frames: renderer.frames(),
        last_frame,
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("spincube-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("common: {}", spincube_common::crate_info());
            println!("mesh: {}", spincube_mesh::crate_info());
            println!("kernel: {}", spincube_kernel::crate_info());
            println!("input: {}", spincube_input::crate_info());
            println!("render: {}", spincube_render::crate_info());
        }
        Commands::Mesh {
            scale,
            position,
            json,
        } => {
            let mesh = generate_cube(position, scale);
            mesh.validate()?;
            if json {
                println!("{}", serde_json::to_string_pretty(&MeshReport::new(&mesh))?);
            } else {
                print_mesh(&mesh);
            }
        }
        Commands::Simulate { frames, fps, keys } => {
            let keys = parse_key_sequence(keys.as_deref().unwrap_or(""))?;
            let config = DemoConfig::default();
            let sim = simulate(&config, frames, fps, &keys);
            print!("{}", sim.last_frame);
            println!(
                "Simulated {} frames, {} key presses; camera eye=({:.2}, {:.2}, {:.2}) target=({:.2}, {:.2}, {:.2})",
                sim.frames,
                keys.len(),
                sim.camera.position.x,
                sim.camera.position.y,
                sim.camera.position.z,
                sim.camera.target.x,
                sim.camera.target.y,
                sim.camera.target.z
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn up_down_simulation_returns_camera_home() {
        let config = DemoConfig::default();
        let sim = simulate(&config, 2, 60.0, &[CameraKey::Up, CameraKey::Down]);
        assert_eq!(sim.camera, config.camera);
        assert_eq!(sim.frames, 2);
    }

    #[test]
    fn simulation_extends_to_cover_keys() {
        let config = DemoConfig::default();
        let keys = [CameraKey::Left; 3];
        let sim = simulate(&config, 1, 60.0, &keys);
        assert_eq!(sim.frames, 3);
        assert!(sim.camera.position.x > 0.29);
        assert!(sim.last_frame.contains("Frame 2"));
    }

    #[test]
    fn mesh_report_serializes() {
        let mesh = generate_cube(Vec3::ZERO, 0.35);
        let json = serde_json::to_value(MeshReport::new(&mesh)).unwrap();
        assert_eq!(json["vertices"].as_array().unwrap().len(), 8);
        assert_eq!(json["triangles"], 12);
    }

    #[test]
    fn cli_parses_simulate_flags() {
        let cli = Cli::parse_from(["spincube-cli", "simulate", "-f", "5", "--keys", "up,left"]);
        match cli.command {
            Commands::Simulate { frames, keys, .. } => {
                assert_eq!(frames, 5);
                assert_eq!(keys.as_deref(), Some("up,left"));
            }
            _ => panic!("expected simulate"),
        }
    }
}
