use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::foundation::error::{GlyphError, GlyphResult};
use crate::glyph::ramp::{GlyphRamp, RampPreset};
use crate::render::config::{FontSource, RenderConfig};
use crate::session::VideoConvertOpts;

/// JSON-facing conversion settings.
///
/// Every field is optional in the file; missing fields take the same defaults as
/// [`RenderConfig::default`] and [`VideoConvertOpts::default`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertSettings {
    pub ramp: RampPreset,
    /// Overrides `ramp` when set.
    pub custom_ramp: Option<String>,
    /// Font file; relative paths in a settings file resolve against that file's directory.
    pub font_path: Option<PathBuf>,
    pub point_size: f32,
    pub interpolation_weight: f64,
    pub interpolate: bool,
    pub transparency: bool,
    pub keep_audio: bool,
    pub overwrite: bool,
}

impl Default for ConvertSettings {
    fn default() -> Self {
        let render = RenderConfig::default();
        let video = VideoConvertOpts::default();
        Self {
            ramp: RampPreset::default(),
            custom_ramp: None,
            font_path: None,
            point_size: render.point_size,
            interpolation_weight: render.interpolation_weight,
            interpolate: video.interpolate,
            transparency: render.transparency,
            keep_audio: video.keep_audio,
            overwrite: video.overwrite,
        }
    }
}

impl ConvertSettings {
    /// Parse settings from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> GlyphResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| GlyphError::invalid_config(format!("parse settings JSON: {e}")))
    }

    /// Parse settings from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> GlyphResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            GlyphError::invalid_config(format!("open settings JSON '{}': {e}", path.display()))
        })?;
        let mut settings = Self::from_reader(BufReader::new(f))?;
        if let (Some(font), Some(dir)) = (settings.font_path.as_mut(), path.parent())
            && font.is_relative()
        {
            *font = dir.join(&*font);
        }
        Ok(settings)
    }

    pub fn glyph_ramp(&self) -> GlyphResult<GlyphRamp> {
        match self.custom_ramp.as_deref() {
            Some(glyphs) => GlyphRamp::new(glyphs),
            None => Ok(GlyphRamp::preset(self.ramp)),
        }
    }

    pub fn video_opts(&self) -> VideoConvertOpts {
        VideoConvertOpts {
            interpolate: self.interpolate,
            overwrite: self.overwrite,
            keep_audio: self.keep_audio,
        }
    }

    /// Load the font and build a validated [`RenderConfig`].
    pub fn into_render_config(self) -> GlyphResult<RenderConfig> {
        let ramp = self.glyph_ramp()?;
        let font = self
            .font_path
            .as_deref()
            .map(FontSource::from_path)
            .transpose()?;
        let config = RenderConfig {
            ramp,
            font,
            point_size: self.point_size,
            interpolation_weight: self.interpolation_weight,
            transparency: self.transparency,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "../tests/unit/settings.rs"]
mod tests;
