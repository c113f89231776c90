//! Fixed-size vectors and the 4x4 transform used to place and project the mesh.
//!
//! Conventions (applied everywhere): column vectors (`v' = M * v`),
//! right-handed coordinates, column-major storage, clip depth in [0, 1].

mod matrix;
mod vector;

pub use matrix::Matrix44;
pub use vector::{Vector3, Vector4};
