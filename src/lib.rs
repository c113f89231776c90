//! Terrascape - procedural noise terrain
//!
//! Seed -> xorshift random source -> gradient noise field -> grid mesh
//! buffers, plus the 4x4 transforms that place and project the mesh.

pub mod camera;
pub mod cli;
pub mod error;
pub mod heightmap;
pub mod math;
pub mod noise_field;
pub mod params;
pub mod random;
pub mod rendering;
pub mod scene;
pub mod terrain;
