//! Parameter definitions with units and documented semantics.
//!
//! Defaults live here; the command line overrides them.

mod camera;
mod render;
mod terrain;

// Re-export all types
pub use camera::CameraRig;
pub use render::{DrawMode, RenderConfig};
pub use terrain::{ColorProfile, GridConfig, HeightProfile, TerrainParams};
