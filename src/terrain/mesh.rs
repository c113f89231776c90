//! Height-displaced grid mesh with triangle and wireframe index buffers.

use noise::NoiseFn;

use crate::error::TerrainError;
use crate::params::{ColorProfile, GridConfig, HeightProfile};

/// Validated grid generator
///
/// Vertex `(i, j)` (row `i` along Z, column `j` along X) lives at flat
/// index `i * cols + j`; position buffers store it at `3 * (i * cols + j)`.
#[derive(Debug, Clone)]
pub struct TerrainGrid {
    config: GridConfig,
}

impl TerrainGrid {
    /// Validate `config` (see [`GridConfig::validate`]) and wrap it.
    pub fn new(config: GridConfig) -> Result<Self, TerrainError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    pub fn num_vertices(&self) -> usize {
        self.config.rows * self.config.cols
    }

    pub fn num_vertex_rows(&self) -> usize {
        self.config.rows
    }

    pub fn num_vertex_cols(&self) -> usize {
        self.config.cols
    }

    pub fn triangle_num_indices(&self) -> usize {
        (self.config.rows - 1) * (self.config.cols - 1) * 6
    }

    pub fn line_strip_num_indices(&self) -> usize {
        2 * self.num_vertices() - 1
    }

    /// Noise-space coordinate sampled for vertex `(i, j)`
    fn noise_coord(i: usize, j: usize, scale: f64, offset: [f64; 2]) -> [f64; 2] {
        [j as f64 * scale + offset[0], i as f64 * scale + offset[1]]
    }

    /// Positions (3 floats per vertex, row-major) with Y taken from `source`.
    ///
    /// X and Z interpolate linearly across the configured extents;
    /// `y = origin.y + amplitude * source(j * scale + ox, i * scale + oy)`.
    /// Pass `field.normalized()` for heights in `[0, amplitude]` or the field
    /// itself for `[-amplitude, amplitude]`.
    pub fn y_plane_vertex_buffer<S>(&self, source: &S, profile: &HeightProfile) -> Vec<f32>
    where
        S: NoiseFn<f64, 2> + ?Sized,
    {
        let GridConfig {
            cols,
            rows,
            x,
            y,
            z,
            width,
            height,
        } = self.config;

        let mut positions = Vec::with_capacity(self.num_vertices() * 3);
        for i in 0..rows {
            let z_pos = z + height * (i as f32 / (rows - 1) as f32);
            for j in 0..cols {
                let x_pos = x + width * (j as f32 / (cols - 1) as f32);
                let sample =
                    source.get(Self::noise_coord(i, j, profile.noise_scale, profile.offset));
                positions.extend_from_slice(&[x_pos, y + sample as f32 * profile.amplitude, z_pos]);
            }
        }

        debug_assert_eq!(positions.len(), self.num_vertices() * 3);
        positions
    }

    /// Colours (3 floats per vertex) parallel to the position buffer.
    ///
    /// Each channel samples `source` at the vertex's noise coordinate shifted
    /// by its own offset; values are clamped to [0, 1].
    pub fn color_buffer<S>(&self, source: &S, profile: &ColorProfile) -> Vec<f32>
    where
        S: NoiseFn<f64, 2> + ?Sized,
    {
        let mut colors = Vec::with_capacity(self.num_vertices() * 3);
        for i in 0..self.config.rows {
            for j in 0..self.config.cols {
                for offset in profile.channel_offsets {
                    let sample = source.get(Self::noise_coord(i, j, profile.noise_scale, offset));
                    colors.push((sample as f32).clamp(0.0, 1.0));
                }
            }
        }
        colors
    }

    /// Two triangles per cell, counter-clockwise seen from +Y.
    ///
    /// Cell `(i, j)` emits `(i,j) (i+1,j) (i,j+1)` and `(i,j+1) (i+1,j) (i+1,j+1)`.
    pub fn triangle_index_buffer(&self) -> Vec<u32> {
        let cols = self.config.cols;
        let mut indices = Vec::with_capacity(self.triangle_num_indices());

        for i in 0..self.config.rows - 1 {
            for j in 0..cols - 1 {
                let top_left = (i * cols + j) as u32;
                let top_right = top_left + 1;
                let bottom_left = ((i + 1) * cols + j) as u32;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }

        debug_assert_eq!(indices.len(), self.triangle_num_indices());
        indices
    }

    /// One connected path over every grid edge.
    ///
    /// First a boustrophedon along the rows (alternating direction, stepping
    /// down at the ends) covers all horizontal edges. From the final corner
    /// a second boustrophedon along the columns covers all vertical edges.
    /// Consecutive indices are always grid neighbours.
    pub fn line_strip_index_buffer(&self) -> Vec<u32> {
        let GridConfig { cols, rows, .. } = self.config;
        let index = |i: usize, j: usize| (i * cols + j) as u32;
        let mut strip = Vec::with_capacity(self.line_strip_num_indices());

        for i in 0..rows {
            if i % 2 == 0 {
                strip.extend((0..cols).map(|j| index(i, j)));
            } else {
                strip.extend((0..cols).rev().map(|j| index(i, j)));
            }
        }

        // Row pass ends in the last row, on the right for odd row counts
        let ends_right = rows % 2 == 1;
        for n in 0..cols {
            let j = if ends_right { cols - 1 - n } else { n };
            // Even passes climb from the last row, odd passes descend
            let climbing = n % 2 == 0;
            // The first vertex of the column pass is where the row pass ended
            let first = usize::from(n == 0);
            for k in first..rows {
                let i = if climbing { rows - 1 - k } else { k };
                strip.push(index(i, j));
            }
        }

        debug_assert_eq!(strip.len(), self.line_strip_num_indices());
        strip
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise_field::NoiseField;
    use noise::Constant;
    use std::collections::HashSet;

    fn grid(cols: usize, rows: usize) -> TerrainGrid {
        TerrainGrid::new(GridConfig {
            cols,
            rows,
            x: 0.0,
            y: 0.0,
            z: 0.0,
            width: 2.0,
            height: 2.0,
        })
        .expect("valid grid")
    }

    #[test]
    fn test_rejects_invalid_config() {
        let valid = GridConfig::default();

        let cases = [
            (GridConfig { cols: 1, ..valid }, TerrainError::TooFewColumns(1)),
            (GridConfig { rows: 0, ..valid }, TerrainError::TooFewRows(0)),
            (GridConfig { width: 0.0, ..valid }, TerrainError::InvalidWidth(0.0)),
            (GridConfig { height: -3.0, ..valid }, TerrainError::InvalidHeight(-3.0)),
        ];
        for (config, expected) in cases {
            assert_eq!(TerrainGrid::new(config).unwrap_err(), expected);
        }

        assert!(matches!(
            TerrainGrid::new(GridConfig { width: f32::NAN, ..valid }),
            Err(TerrainError::InvalidWidth(_))
        ));
        assert_eq!(
            TerrainGrid::new(GridConfig { rows: 70_000, cols: 70_000, ..valid }).unwrap_err(),
            TerrainError::TooManyVertices { rows: 70_000, cols: 70_000 }
        );
    }

    #[test]
    fn test_rejects_grid_whose_indices_overflow_u32() {
        // 1.6e9 vertices fit u32, but ~9.6e9 triangle indices do not
        let config = GridConfig {
            rows: 40_000,
            cols: 40_000,
            ..GridConfig::default()
        };
        assert!((config.rows * config.cols) as u64 <= u32::MAX as u64);
        assert_eq!(
            TerrainGrid::new(config).unwrap_err(),
            TerrainError::TooManyVertices { rows: 40_000, cols: 40_000 }
        );
    }

    #[test]
    fn test_mesh_sizing() {
        let grid = grid(5, 10);
        assert_eq!(grid.num_vertex_rows(), 10);
        assert_eq!(grid.num_vertex_cols(), 5);
        assert_eq!(grid.num_vertices(), 50);

        let triangles = grid.triangle_index_buffer();
        assert_eq!(triangles.len(), 9 * 4 * 6);
        assert_eq!(triangles.len(), grid.triangle_num_indices());
        assert!(triangles.iter().all(|&i| i < 50));

        let strip = grid.line_strip_index_buffer();
        assert_eq!(strip.len(), grid.line_strip_num_indices());
        assert!(strip.iter().all(|&i| i < 50));
    }

    #[test]
    fn test_positions_span_extents() {
        let grid = TerrainGrid::new(GridConfig {
            cols: 3,
            rows: 4,
            x: -1.0,
            y: 5.0,
            z: 10.0,
            width: 4.0,
            height: 6.0,
        })
        .expect("valid grid");

        let profile = HeightProfile {
            amplitude: 2.0,
            ..HeightProfile::default()
        };
        let positions = grid.y_plane_vertex_buffer(&Constant::new(0.5), &profile);
        assert_eq!(positions.len(), 12 * 3);

        // Vertex (i = 2, j = 1)
        let offset = 3 * (2 * 3 + 1);
        assert_eq!(&positions[offset..offset + 3], &[1.0, 6.0, 14.0]);

        // Corners
        assert_eq!(&positions[0..3], &[-1.0, 6.0, 10.0]);
        assert_eq!(&positions[positions.len() - 3..], &[3.0, 6.0, 16.0]);
    }

    #[test]
    fn test_heights_follow_noise_coordinates() {
        let field = NoiseField::with_seed(42);
        let grid = grid(6, 4);
        let profile = HeightProfile {
            noise_scale: 0.3,
            offset: [1.5, -2.25],
            amplitude: 3.0,
        };

        let positions = grid.y_plane_vertex_buffer(&field.normalized(), &profile);
        for i in 0..4 {
            for j in 0..6 {
                let expected =
                    field.noise01(j as f64 * 0.3 + 1.5, i as f64 * 0.3 - 2.25) as f32 * 3.0;
                assert_eq!(positions[3 * (i * 6 + j) + 1], expected);
            }
        }
    }

    #[test]
    fn test_color_buffer_channels() {
        let field = NoiseField::with_seed(42);
        let grid = grid(4, 4);
        let profile = ColorProfile::default();

        let colors = grid.color_buffer(&field.normalized(), &profile);
        assert_eq!(colors.len(), grid.num_vertices() * 3);
        assert!(colors.iter().all(|c| (0.0..=1.0).contains(c)));

        // Vertex (1, 2), green channel
        let [ox, oy] = profile.channel_offsets[1];
        let expected = field.noise01(2.0 * profile.noise_scale + ox, profile.noise_scale + oy);
        assert_eq!(colors[3 * (4 + 2) + 1], expected as f32);

        // Constant sources outside [0, 1] are clamped
        let clamped = grid.color_buffer(&Constant::new(4.0), &profile);
        assert!(clamped.iter().all(|&c| c == 1.0));
    }

    #[test]
    fn test_consistent_winding() {
        let field = NoiseField::with_seed(9);
        let configs = [
            (2, 2, 1.0, 1.0),
            (3, 3, 2.0, 2.0),
            (5, 10, 4.0, 9.0),
            (17, 4, 0.5, 30.0),
        ];

        for (cols, rows, width, height) in configs {
            let grid = TerrainGrid::new(GridConfig {
                cols,
                rows,
                x: -3.0,
                y: 1.0,
                z: 7.0,
                width,
                height,
            })
            .expect("valid grid");
            let positions = grid.y_plane_vertex_buffer(&field, &HeightProfile::default());
            let xz = |v: u32| (positions[3 * v as usize], positions[3 * v as usize + 2]);

            for tri in grid.triangle_index_buffer().chunks(3) {
                let (ax, az) = xz(tri[0]);
                let (bx, bz) = xz(tri[1]);
                let (cx, cz) = xz(tri[2]);
                // Y component of (b - a) x (c - a): positive means CCW seen from +Y
                let cross = (bz - az) * (cx - ax) - (bx - ax) * (cz - az);
                assert!(cross > 0.0, "triangle {:?} has orientation {}", tri, cross);
            }
        }
    }

    #[test]
    fn test_line_strip_covers_every_edge() {
        for (cols, rows) in [(2, 2), (3, 3), (4, 3), (3, 4), (5, 10), (7, 2)] {
            let grid = grid(cols, rows);
            let strip = grid.line_strip_index_buffer();

            let mut walked = HashSet::new();
            for pair in strip.windows(2) {
                let (a, b) = (pair[0].min(pair[1]) as usize, pair[0].max(pair[1]) as usize);
                let neighbours = (b == a + 1 && a / cols == b / cols) || b == a + cols;
                assert!(neighbours, "{} -> {} is not a grid edge", pair[0], pair[1]);
                walked.insert((a, b));
            }

            let horizontal = rows * (cols - 1);
            let vertical = (rows - 1) * cols;
            assert_eq!(walked.len(), horizontal + vertical, "{}x{}", cols, rows);
        }
    }

    #[test]
    fn test_line_strip_visits_every_vertex() {
        let grid = grid(4, 5);
        let visited: HashSet<u32> = grid.line_strip_index_buffer().into_iter().collect();
        assert_eq!(visited.len(), grid.num_vertices());
    }
}
