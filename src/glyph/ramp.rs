use std::sync::Arc;

use crate::foundation::error::{GlyphError, GlyphResult};

/// Brightness treated as the top of the ramp. Values at or above it resolve to the last glyph.
pub const RAMP_BRIGHTNESS_CEIL: f64 = 254.0;

/// Built-in character ramps, darkest glyph first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampPreset {
    /// Ten glyphs, coarse tonal steps.
    Limited,
    /// Sixty-nine glyphs, fine tonal steps.
    #[default]
    Extended,
    /// A single solid block: colour only, no tonal variation.
    Block,
}

impl RampPreset {
    pub const fn glyphs(self) -> &'static str {
        match self {
            Self::Limited => " .:-=+*#%@",
            Self::Extended => {
                r#".'`^",:;Il!i><~+_-?][}{1)(|\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$"#
            }
            Self::Block => "█",
        }
    }
}

/// Ordered, immutable sequence of glyphs from darkest to brightest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphRamp {
    glyphs: Arc<[char]>,
}

impl GlyphRamp {
    /// Build a custom ramp. Each Unicode scalar value is one glyph.
    pub fn new(glyphs: &str) -> GlyphResult<Self> {
        let glyphs: Arc<[char]> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return Err(GlyphError::invalid_config("glyph ramp must not be empty"));
        }
        Ok(Self { glyphs })
    }

    pub fn preset(preset: RampPreset) -> Self {
        Self {
            glyphs: preset.glyphs().chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// `false` for every constructed ramp.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    pub fn first(&self) -> char {
        self.glyphs[0]
    }

    pub fn last(&self) -> char {
        self.glyphs[self.glyphs.len() - 1]
    }

    /// Map brightness to a ramp index.
    ///
    /// Brightness is clamped to `[0, 254]` and scaled by `floor(b / 254 * len)`, then clamped to
    /// the last index. NaN maps to the darkest glyph.
    pub fn index_for(&self, brightness: f64) -> usize {
        let len = self.glyphs.len();
        if len == 1 || brightness.is_nan() {
            return 0;
        }
        let b = brightness.clamp(0.0, RAMP_BRIGHTNESS_CEIL);
        let idx = (b / RAMP_BRIGHTNESS_CEIL * len as f64).floor() as usize;
        idx.min(len - 1)
    }

    pub fn resolve(&self, brightness: f64) -> char {
        self.glyphs[self.index_for(brightness)]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::preset(RampPreset::default())
    }
}

impl From<RampPreset> for GlyphRamp {
    fn from(preset: RampPreset) -> Self {
        Self::preset(preset)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/glyph/ramp.rs"]
mod tests;
