use std::path::Path;
use std::sync::Arc;

use crate::foundation::error::{GlyphError, GlyphResult};
use crate::glyph::ramp::GlyphRamp;

/// Raw TrueType/OpenType font bytes owned by the caller.
///
/// The font is expected to be monospace; the block glyph's advance is used as the cell width.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FontSource {
    bytes: Arc<Vec<u8>>,
}

impl FontSource {
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Arc::new(bytes.into()),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> GlyphResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            GlyphError::font(format!("failed to read font '{}': {e}", path.display()))
        })?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Settings shared by every frame of one render sequence.
#[derive(Clone, Debug)]
pub struct RenderConfig {
    /// Glyphs from darkest to brightest.
    pub ramp: GlyphRamp,
    /// Font used to draw glyphs. Required by [`crate::FrameRenderer::new`].
    pub font: Option<FontSource>,
    /// Font size in points, rendered at 72 DPI so one point is one pixel.
    pub point_size: f32,
    /// Share of the remembered brightness kept when blending, in `[0, 1]`.
    ///
    /// `0` disables smoothing, `1` freezes each block at its first-frame brightness.
    pub interpolation_weight: f64,
    /// Fill the background with transparent black instead of opaque black.
    pub transparency: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            ramp: GlyphRamp::default(),
            font: None,
            point_size: 14.0,
            interpolation_weight: 0.4,
            transparency: false,
        }
    }
}

impl RenderConfig {
    pub fn with_font(mut self, font: FontSource) -> Self {
        self.font = Some(font);
        self
    }

    pub fn with_ramp(mut self, ramp: impl Into<GlyphRamp>) -> Self {
        self.ramp = ramp.into();
        self
    }

    /// Check every setting that does not need the font parsed.
    pub fn validate(&self) -> GlyphResult<()> {
        let w = self.interpolation_weight;
        if !(0.0..=1.0).contains(&w) {
            return Err(GlyphError::invalid_config(format!(
                "interpolation weight must be within [0, 1], got {w}"
            )));
        }
        if !self.point_size.is_finite() || self.point_size <= 0.0 {
            return Err(GlyphError::invalid_config(format!(
                "point size must be finite and > 0, got {}",
                self.point_size
            )));
        }
        Ok(())
    }

    /// Background fill for a fresh output frame.
    pub fn background(&self) -> crate::Rgba8 {
        if self.transparency {
            crate::Rgba8::TRANSPARENT
        } else {
            crate::Rgba8::BLACK
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/config.rs"]
mod tests;
