//! Grayscale heightmap export of the noise field.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::noise_field::NoiseField;

/// Render `noise01` over a `size` x `size` grid, sampling pixel `(px, py)` at
/// `(px * scale, py * scale)`.
pub fn heightmap_image(field: &NoiseField, size: u32, scale: f64) -> GrayImage {
    let mut img = GrayImage::new(size, size);
    for (px, py, pixel) in img.enumerate_pixels_mut() {
        let value = field.noise01(px as f64 * scale, py as f64 * scale);
        // noise01 is already in [0, 1]
        *pixel = Luma([(value * 255.0).round() as u8]);
    }
    img
}

/// Write the heightmap as PNG (format chosen from the extension).
pub fn save_heightmap(
    field: &NoiseField,
    size: u32,
    scale: f64,
    path: &Path,
) -> Result<(), image::ImageError> {
    let img = heightmap_image(field, size, scale);
    img.save(path)?;
    log::info!("heightmap written to {} ({}x{})", path.display(), size, size);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heightmap_matches_field() {
        let field = NoiseField::with_seed(42);
        let img = heightmap_image(&field, 32, 0.15);
        assert_eq!(img.dimensions(), (32, 32));

        // Origin is a lattice point: noise01 == 0.5
        assert_eq!(img.get_pixel(0, 0)[0], 128);

        let expected = (field.noise01(5.0 * 0.15, 9.0 * 0.15) * 255.0).round() as u8;
        assert_eq!(img.get_pixel(5, 9)[0], expected);
    }

    #[test]
    fn test_heightmap_is_deterministic() {
        let a = heightmap_image(&NoiseField::with_seed(3), 16, 0.2);
        let b = heightmap_image(&NoiseField::with_seed(3), 16, 0.2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_save_heightmap_writes_png() {
        let path = std::env::temp_dir()
            .join(format!("terrascape_heightmap_{}.png", std::process::id()));
        save_heightmap(&NoiseField::with_seed(1), 8, 0.3, &path).expect("png written");
        let loaded = image::open(&path).expect("png readable").to_luma8();
        assert_eq!(loaded, heightmap_image(&NoiseField::with_seed(1), 8, 0.3));
        let _ = std::fs::remove_file(&path);
    }
}
