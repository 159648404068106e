use anyhow::Result;
use clap::Parser;
use glam::Vec3;
use spincube_common::{CameraState, DemoConfig, parse_vec3};
use spincube_input::{CameraKey, KeyMap};
use spincube_kernel::{FrameClock, FrameCommands, FrameUpdater, Projection};
use spincube_mesh::{CubeMesh, generate_cube};
use spincube_render_wgpu::{CubeRenderer, GpuContext};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

#[derive(Parser)]
#[command(name = "spincube-desktop", about = "Rotating vertex-colored cube")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Cube half-extent
    #[arg(long)]
    scale: Option<f32>,

    /// Cube center as x,y,z
    #[arg(long, value_parser = parse_vec3, allow_hyphen_values = true)]
    position: Option<Vec3>,

    /// Initial window width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Initial window height in pixels
    #[arg(long)]
    height: Option<u32>,
}

impl Cli {
    /// Defaults overridden by whatever flags were given.
    fn config(&self) -> DemoConfig {
        let defaults = DemoConfig::default();
        DemoConfig {
            cube_scale: self.scale.unwrap_or(defaults.cube_scale),
            cube_position: self.position.unwrap_or(defaults.cube_position),
            window_width: self.width.unwrap_or(defaults.window_width),
            window_height: self.height.unwrap_or(defaults.window_height),
            ..defaults
        }
    }
}

fn camera_key(code: KeyCode) -> Option<CameraKey> {
    match code {
        KeyCode::ArrowUp => Some(CameraKey::Up),
        KeyCode::ArrowDown => Some(CameraKey::Down),
        KeyCode::ArrowLeft => Some(CameraKey::Left),
        KeyCode::ArrowRight => Some(CameraKey::Right),
        _ => None,
    }
}

/// Application state. Everything here is GPU-free.
struct AppState {
    config: DemoConfig,
    mesh: CubeMesh,
    camera: CameraState,
    keys: KeyMap,
    updater: FrameUpdater,
    clock: FrameClock,
}

impl AppState {
    fn new(config: DemoConfig) -> Self {
        let mesh = generate_cube(config.cube_position, config.cube_scale);
        let projection = Projection::from_config(&config, config.window_width, config.window_height);
        let updater = FrameUpdater::new(projection, config.clear_color, mesh.indices().len() as u32);
        Self {
            camera: config.camera,
            keys: KeyMap::new(config.move_step),
            clock: FrameClock::wall(),
            mesh,
            updater,
            config,
        }
    }

    fn handle_key(&mut self, code: KeyCode) {
        if let Some(key) = camera_key(code) {
            self.keys.action(key).apply(&mut self.camera);
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.updater
            .set_projection(Projection::from_config(&self.config, width, height));
    }

    fn frame(&mut self) -> FrameCommands {
        let time = self.clock.advance();
        self.updater.tick(time.elapsed, &self.camera)
    }
}

struct GpuApp {
    state: AppState,
    window: Option<Arc<Window>>,
    gpu: Option<GpuContext>,
    renderer: Option<CubeRenderer>,
    failure: Option<anyhow::Error>,
}

impl GpuApp {
    fn new(config: DemoConfig) -> Self {
        Self {
            state: AppState::new(config),
            window: None,
            gpu: None,
            renderer: None,
            failure: None,
        }
    }

    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<()> {
        let attrs = Window::default_attributes()
            .with_title("spincube")
            .with_inner_size(PhysicalSize::new(
                self.state.config.window_width,
                self.state.config.window_height,
            ));
        let window = Arc::new(event_loop.create_window(attrs)?);

        let size = window.inner_size();
        let gpu = GpuContext::new(window.clone(), size.width, size.height)?;
        let renderer = CubeRenderer::new(
            gpu.device(),
            gpu.format(),
            size.width,
            size.height,
            &self.state.mesh,
        )?;
        self.state.resize(size.width, size.height);

        self.window = Some(window);
        self.gpu = Some(gpu);
        self.renderer = Some(renderer);
        Ok(())
    }

    fn redraw(&mut self) {
        let frame = self.state.frame();
        let (Some(gpu), Some(renderer)) = (&self.gpu, &self.renderer) else {
            return;
        };

        let output = match gpu.acquire() {
            Ok(Some(output)) => output,
            Ok(None) => return,
            Err(e) => {
                tracing::error!("surface error: {e}");
                return;
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        renderer.render(gpu.device(), gpu.queue(), &view, &frame);
        output.present();
    }
}

impl ApplicationHandler for GpuApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }
        if let Err(e) = self.init(event_loop) {
            tracing::error!("startup failed: {e:#}");
            self.failure = Some(e);
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let (Some(gpu), Some(renderer)) = (&mut self.gpu, &mut self.renderer) {
                    gpu.resize(new_size.width, new_size.height);
                    let (width, height) = gpu.size();
                    renderer.resize(gpu.device(), width, height);
                    self.state.resize(width, height);
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                self.state.handle_key(key);
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = cli.config();
    tracing::info!(
        scale = config.cube_scale,
        position = ?config.cube_position,
        "spincube-desktop starting"
    );

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = GpuApp::new(config);
    event_loop.run_app(&mut app)?;

    match app.failure.take() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arrow_keys_map_to_camera_keys() {
        assert_eq!(camera_key(KeyCode::ArrowUp), Some(CameraKey::Up));
        assert_eq!(camera_key(KeyCode::ArrowRight), Some(CameraKey::Right));
        assert_eq!(camera_key(KeyCode::KeyW), None);
    }

    #[test]
    fn flags_override_defaults() {
        let cli = Cli::parse_from(["spincube-desktop", "--scale", "0.5", "--position", "-1,0,2"]);
        let cfg = cli.config();
        assert_eq!(cfg.cube_scale, 0.5);
        assert_eq!(cfg.cube_position, Vec3::new(-1.0, 0.0, 2.0));
        assert_eq!(cfg.window_width, DemoConfig::default().window_width);
    }

    #[test]
    fn state_pans_camera_on_arrows_only() {
        let mut state = AppState::new(DemoConfig::default());
        state.handle_key(KeyCode::KeyA);
        assert_eq!(state.camera, CameraState::default());
        state.handle_key(KeyCode::ArrowUp);
        state.handle_key(KeyCode::ArrowDown);
        assert_eq!(state.camera, CameraState::default());
        state.handle_key(KeyCode::ArrowLeft);
        assert!(state.camera.position.x > 0.0);
    }

    #[test]
    fn frames_draw_the_whole_mesh() {
        let mut state = AppState::new(DemoConfig::default());
        let frame = state.frame();
        assert_eq!(frame.index_count, 36);
        assert_eq!(frame.camera, state.camera);
    }
}
