//! Error types for terrain configuration and the rendering boundary.

use thiserror::Error;

/// Invalid grid configuration, reported before any buffer is allocated
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerrainError {
    #[error("grid needs at least 2 vertex columns, got {0}")]
    TooFewColumns(usize),

    #[error("grid needs at least 2 vertex rows, got {0}")]
    TooFewRows(usize),

    #[error("grid width must be positive, got {0}")]
    InvalidWidth(f32),

    #[error("grid height must be positive, got {0}")]
    InvalidHeight(f32),

    #[error("{rows} x {cols} grid does not fit 32-bit indices")]
    TooManyVertices { rows: usize, cols: usize },
}

/// Failure to acquire GPU resources
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("failed to find a suitable GPU adapter")]
    NoAdapter,

    #[error("failed to request device: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("surface reports no supported formats")]
    NoSurfaceFormat,

    #[error("{0} indices exceed the 32-bit draw count")]
    TooManyIndices(usize),
}
