//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::params::{DrawMode, GridConfig, HeightProfile, RenderConfig, TerrainParams};
use crate::scene::Seed;

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "terrascape")]
#[command(about = "Procedural noise terrain viewer", long_about = None)]
pub struct Args {
    /// Noise seed (0 is replaced by a fixed non-zero seed)
    #[arg(long, default_value_t = 42, conflicts_with = "random_seed")]
    pub seed: u32,

    /// Seed from the clock instead (not reproducible)
    #[arg(long)]
    pub random_seed: bool,

    /// Vertex columns along X
    #[arg(long, default_value_t = 128)]
    pub cols: usize,

    /// Vertex rows along Z
    #[arg(long, default_value_t = 128)]
    pub rows: usize,

    /// Grid origin X
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub x: f32,

    /// Grid base elevation
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub y: f32,

    /// Grid origin Z
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub z: f32,

    /// Extent along X (world units)
    #[arg(long, default_value_t = 10.0)]
    pub width: f32,

    /// Extent along Z (world units)
    #[arg(long, default_value_t = 10.0)]
    pub height: f32,

    /// Height of a full-scale noise value (world units)
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    pub amplitude: f32,

    /// Noise-space step between neighbouring vertices
    #[arg(long, default_value_t = 0.05)]
    pub noise_scale: f64,

    /// Initial draw mode (W cycles at runtime)
    #[arg(long, value_enum, default_value_t = DrawMode::Both)]
    pub draw_mode: DrawMode,

    /// Write a grayscale heightmap PNG and exit
    #[arg(long, value_name = "PATH")]
    pub heightmap: Option<PathBuf>,

    /// Heightmap edge length (pixels)
    #[arg(long, value_name = "PIXELS", default_value_t = 512)]
    pub heightmap_size: u32,
}

impl Args {
    pub fn seed(&self) -> Seed {
        if self.random_seed {
            Seed::Random
        } else {
            Seed::Fixed(self.seed)
        }
    }

    /// Grid layout as given; validated when the scene is built
    pub fn grid_config(&self) -> GridConfig {
        GridConfig {
            cols: self.cols,
            rows: self.rows,
            x: self.x,
            y: self.y,
            z: self.z,
            width: self.width,
            height: self.height,
        }
    }

    pub fn terrain_params(&self) -> TerrainParams {
        let mut params = TerrainParams {
            height: HeightProfile {
                noise_scale: self.noise_scale,
                amplitude: self.amplitude,
                ..HeightProfile::default()
            },
            ..TerrainParams::default()
        };
        // Colours vary at the same rate as heights
        params.color.noise_scale = self.noise_scale;
        params
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            draw_mode: self.draw_mode,
            ..RenderConfig::default()
        }
    }
}
