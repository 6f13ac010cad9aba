use std::path::Path;

use crate::encode::ffmpeg::ensure_parent_dir;
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::foundation::math::flatten_straight_over_bg;

/// Decode any still format `image` understands.
pub fn load_image(path: &Path) -> GlyphResult<image::DynamicImage> {
    let reader = image::ImageReader::open(path).map_err(|e| {
        GlyphError::invalid_input(format!("failed to open image '{}': {e}", path.display()))
    })?;
    let reader = reader.with_guessed_format().map_err(|e| {
        GlyphError::invalid_input(format!("failed to read image '{}': {e}", path.display()))
    })?;
    reader.decode().map_err(|e| {
        GlyphError::invalid_input(format!("failed to decode image '{}': {e}", path.display()))
    })
}

/// Write `frame`, choosing the format from the file extension.
///
/// JPEG has no alpha channel, so frames are flattened over black first.
pub fn save_image(path: &Path, frame: &image::RgbaImage) -> GlyphResult<()> {
    let format = image::ImageFormat::from_path(path).map_err(|e| {
        GlyphError::invalid_config(format!(
            "unsupported output image format '{}': {e}",
            path.display()
        ))
    })?;
    ensure_parent_dir(path)?;

    let result = if format == image::ImageFormat::Jpeg {
        let mut flat = vec![0u8; frame.as_raw().len()];
        flatten_straight_over_bg(&mut flat, frame.as_raw(), [0, 0, 0, 255]);
        let flat = image::RgbaImage::from_raw(frame.width(), frame.height(), flat)
            .ok_or_else(|| GlyphError::render("flattened frame has unexpected byte length"))?;
        image::DynamicImage::ImageRgba8(flat)
            .to_rgb8()
            .save_with_format(path, format)
    } else {
        frame.save_with_format(path, format)
    };
    result.map_err(|e| {
        GlyphError::render_caused_by(format!("failed to write '{}'", path.display()), e)
    })
}
