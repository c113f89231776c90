//! Terrain grid extents and noise sampling parameters.

use crate::error::TerrainError;

/// Grid mesh layout in world units.
///
/// Vertices span `[x, x + width]` along X and `[z, z + height]` along Z;
/// `y` is the base elevation that sampled heights are added to.
/// Validated by [`TerrainGrid::new`](crate::terrain::TerrainGrid::new).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    /// Vertex columns along X (at least 2)
    pub cols: usize,

    /// Vertex rows along Z (at least 2)
    pub rows: usize,

    /// Origin (world units)
    pub x: f32,
    pub y: f32,
    pub z: f32,

    /// Extent along X (world units, > 0)
    pub width: f32,

    /// Extent along Z (world units, > 0)
    pub height: f32,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cols: 128,
            rows: 128,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            width: 10.0,
            height: 10.0,
        }
    }
}

impl GridConfig {
    /// Check the layout before anything is allocated.
    ///
    /// Requires at least 2 columns and rows, positive extents (NaN is
    /// rejected), and vertex and index counts that fit 32-bit indices.
    pub fn validate(&self) -> Result<(), TerrainError> {
        if self.cols < 2 {
            return Err(TerrainError::TooFewColumns(self.cols));
        }
        if self.rows < 2 {
            return Err(TerrainError::TooFewRows(self.rows));
        }
        // Written as negations so NaN is rejected too
        if !(self.width > 0.0) {
            return Err(TerrainError::InvalidWidth(self.width));
        }
        if !(self.height > 0.0) {
            return Err(TerrainError::InvalidHeight(self.height));
        }

        // The triangle list (6 per cell) and line strip (2n - 1) are the
        // longest buffers; their lengths become u32 draw counts
        let rows = self.rows as u64;
        let cols = self.cols as u64;
        let fits = rows
            .checked_mul(cols)
            .and_then(|vertices| {
                let triangles = (rows - 1).checked_mul(cols - 1)?.checked_mul(6)?;
                let strip = vertices.checked_mul(2)? - 1;
                Some(vertices.max(triangles).max(strip))
            })
            .is_some_and(|longest| longest <= u32::MAX as u64);
        if !fits {
            return Err(TerrainError::TooManyVertices {
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(())
    }

    /// Centre of the grid's footprint at base elevation
    pub fn center(&self) -> [f32; 3] {
        [
            self.x + self.width * 0.5,
            self.y,
            self.z + self.height * 0.5,
        ]
    }
}

/// How vertex heights are derived from the noise source
#[derive(Debug, Clone, PartialEq)]
pub struct HeightProfile {
    /// Noise-space distance between neighbouring vertices
    /// (vertex (i, j) samples at `(j * noise_scale, i * noise_scale)`)
    pub noise_scale: f64,

    /// Noise-space offset added to every sample
    pub offset: [f64; 2],

    /// World-space height of a noise value of 1.0
    pub amplitude: f32,
}

impl Default for HeightProfile {
    fn default() -> Self {
        Self {
            noise_scale: 0.05,
            offset: [0.0, 0.0],
            amplitude: 2.0,
        }
    }
}

/// Per-vertex colour sampling: one noise lookup per RGB channel
#[derive(Debug, Clone, PartialEq)]
pub struct ColorProfile {
    /// Noise-space distance between neighbouring vertices
    pub noise_scale: f64,

    /// Independent noise-space offset for R, G and B
    pub channel_offsets: [[f64; 2]; 3],
}

impl Default for ColorProfile {
    fn default() -> Self {
        Self {
            noise_scale: 0.05,
            // Far apart so the channels decorrelate
            channel_offsets: [[17.3, 5.1], [61.7, 93.9], [131.1, 29.5]],
        }
    }
}

/// Everything the mesh generator needs besides the grid itself
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TerrainParams {
    pub height: HeightProfile,
    pub color: ColorProfile,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_grid_is_valid() {
        assert_eq!(GridConfig::default().validate(), Ok(()));
        let smallest = GridConfig {
            cols: 2,
            rows: 2,
            width: 1e-3,
            height: 1e-3,
            ..GridConfig::default()
        };
        assert_eq!(smallest.validate(), Ok(()));
    }

    #[test]
    fn test_validate_reports_first_problem() {
        let valid = GridConfig::default();
        assert_eq!(
            GridConfig { cols: 0, rows: 0, ..valid }.validate(),
            Err(TerrainError::TooFewColumns(0))
        );
        assert_eq!(
            GridConfig { rows: 1, ..valid }.validate(),
            Err(TerrainError::TooFewRows(1))
        );
        assert_eq!(
            GridConfig { width: -1.0, ..valid }.validate(),
            Err(TerrainError::InvalidWidth(-1.0))
        );
        assert!(matches!(
            GridConfig { height: f32::NAN, ..valid }.validate(),
            Err(TerrainError::InvalidHeight(_))
        ));
    }

    #[test]
    fn test_validate_caps_index_counts() {
        let valid = GridConfig::default();

        // Largest square grid whose triangle list still fits u32
        let fits = GridConfig { rows: 26_000, cols: 26_000, ..valid };
        assert_eq!(fits.validate(), Ok(()));

        let too_big = GridConfig { rows: 30_000, cols: 30_000, ..valid };
        assert_eq!(
            too_big.validate(),
            Err(TerrainError::TooManyVertices { rows: 30_000, cols: 30_000 })
        );

        let overflow = GridConfig { rows: usize::MAX, cols: 3, ..valid };
        assert!(matches!(overflow.validate(), Err(TerrainError::TooManyVertices { .. })));
    }
}
