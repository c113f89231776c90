//! Window and projection configuration.

use clap::ValueEnum;

/// Which index buffers get drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DrawMode {
    /// Shaded triangles
    Filled,
    /// Line strip only
    Wireframe,
    /// Triangles with the line strip on top
    #[default]
    Both,
}

impl DrawMode {
    /// Cycle Filled -> Wireframe -> Both -> Filled
    pub fn next(self) -> Self {
        match self {
            DrawMode::Filled => DrawMode::Wireframe,
            DrawMode::Wireframe => DrawMode::Both,
            DrawMode::Both => DrawMode::Filled,
        }
    }

    pub fn draws_triangles(self) -> bool {
        matches!(self, DrawMode::Filled | DrawMode::Both)
    }

    pub fn draws_lines(self) -> bool {
        matches!(self, DrawMode::Wireframe | DrawMode::Both)
    }
}

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (world units)
    pub near_plane: f32,

    /// Far clipping plane (world units)
    pub far_plane: f32,

    /// Background colour (linear RGB)
    pub clear_color: [f64; 3],

    pub draw_mode: DrawMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 1280,
            window_height: 720,
            fov_degrees: 60.0,
            near_plane: 0.1,
            far_plane: 100.0,
            clear_color: [0.02, 0.02, 0.05],
            draw_mode: DrawMode::default(),
        }
    }
}

impl RenderConfig {
    /// Width over height; a zero height (minimized window) counts as 1 pixel
    pub fn aspect_ratio(&self) -> f32 {
        self.window_width as f32 / self.window_height.max(1) as f32
    }
}
