use spincube_mesh::MeshError;

/// Errors from setting up or driving the GPU context.
///
/// All of these are fatal at startup; the driver logs them and exits.
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter found")]
    NoAdapter,
    #[error("failed to create device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
    #[error("shader or pipeline rejected: {0}")]
    Pipeline(String),
    #[error("failed to acquire frame: {0}")]
    Frame(#[from] wgpu::SurfaceError),
    #[error("mesh rejected: {0}")]
    Mesh(#[from] MeshError),
}
