//! Terrain mesh generation: grid layout, noise heights, index buffers.

mod mesh;

use noise::NoiseFn;

use crate::params::TerrainParams;

// Re-export public types
pub use mesh::TerrainGrid;

/// Generated geometry, immutable once produced
#[derive(Debug, Clone, PartialEq)]
pub struct MeshBuffers {
    /// 3 floats per vertex, row-major
    pub positions: Vec<f32>,

    /// 3 floats per vertex, parallel to `positions`
    pub colors: Vec<f32>,

    /// Triangle list, 6 indices per grid cell
    pub triangle_indices: Vec<u32>,

    /// Single connected line strip over every grid edge
    pub line_strip_indices: Vec<u32>,
}

impl MeshBuffers {
    pub fn num_vertices(&self) -> usize {
        self.positions.len() / 3
    }
}

impl TerrainGrid {
    /// Fill all four buffers in one pass over the grid.
    ///
    /// Heights come from `height_source`, colours from `color_source`; the
    /// two may be the same field.
    pub fn generate<H, C>(
        &self,
        height_source: &H,
        color_source: &C,
        params: &TerrainParams,
    ) -> MeshBuffers
    where
        H: NoiseFn<f64, 2> + ?Sized,
        C: NoiseFn<f64, 2> + ?Sized,
    {
        let buffers = MeshBuffers {
            positions: self.y_plane_vertex_buffer(height_source, &params.height),
            colors: self.color_buffer(color_source, &params.color),
            triangle_indices: self.triangle_index_buffer(),
            line_strip_indices: self.line_strip_index_buffer(),
        };

        log::debug!(
            "generated {}x{} terrain: {} vertices, {} triangle indices, {} strip indices",
            self.num_vertex_cols(),
            self.num_vertex_rows(),
            buffers.num_vertices(),
            buffers.triangle_indices.len(),
            buffers.line_strip_indices.len()
        );

        buffers
    }
}
