//! Orbiting camera rig parameters.

/// Camera orbiting the terrain centre, advanced one step per frame
#[derive(Debug, Clone, PartialEq)]
pub struct CameraRig {
    /// Distance from the terrain centre along the view axis (world units)
    pub distance: f32,

    /// Eye height above the terrain base elevation (world units)
    pub eye_height: f32,

    /// Uniform model scale applied before rotation
    pub scale: f32,

    /// Y rotation per frame (radians)
    pub spin_radians_per_frame: f32,
}

impl Default for CameraRig {
    fn default() -> Self {
        Self {
            distance: 14.0,
            eye_height: 6.0,
            scale: 1.0,
            spin_radians_per_frame: 0.005, // ~21 s per revolution at 60 fps
        }
    }
}
