use crate::foundation::error::{GlyphError, GlyphResult};

/// Straight-alpha RGBA8 colour.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8 {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::new(0, 0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Weighted luma of the colour channels, alpha ignored.
    ///
    /// The weights sum to exactly 1.0, so the result stays within `[0, 255]` up to
    /// floating-point rounding.
    pub fn luma(self) -> f64 {
        0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<image::Rgba<u8>> for Rgba8 {
    fn from(px: image::Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

impl From<Rgba8> for image::Rgba<u8> {
    fn from(c: Rgba8) -> Self {
        image::Rgba(c.to_array())
    }
}

/// Anchor position of a sampled block in image space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PixelCoord {
    pub x: u32,
    pub y: u32,
}

impl PixelCoord {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Pack into a single key: `x` in the high 32 bits, `y` in the low 32 bits.
    pub const fn pack(self) -> u64 {
        ((self.x as u64) << 32) | (self.y as u64)
    }

    pub const fn unpack(key: u64) -> Self {
        Self {
            x: (key >> 32) as u32,
            y: key as u32,
        }
    }
}

/// Sampling stride in pixels, one glyph cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockSize {
    pub width: u32,
    pub height: u32,
}

impl BlockSize {
    pub fn new(width: u32, height: u32) -> GlyphResult<Self> {
        if width == 0 || height == 0 {
            return Err(GlyphError::font(format!(
                "glyph block size must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32,
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> GlyphResult<Self> {
        if den == 0 {
            return Err(GlyphError::invalid_config("fps den must be > 0"));
        }
        if num == 0 {
            return Err(GlyphError::invalid_config("fps num must be > 0"));
        }
        Ok(Self { num, den })
    }

    /// Parse an `ffprobe` style rate such as `30000/1001` or a bare integer such as `25`.
    pub fn parse_ratio(s: &str) -> GlyphResult<Self> {
        let s = s.trim();
        let (num, den) = match s.split_once('/') {
            Some((n, d)) => (n.trim(), d.trim()),
            None => (s, "1"),
        };
        let parse = |v: &str| {
            v.parse::<u32>()
                .map_err(|e| GlyphError::media(format!("invalid frame rate '{s}': {e}")))
        };
        Self::new(parse(num)?, parse(den)?)
            .map_err(|_| GlyphError::media(format!("invalid frame rate '{s}'")))
    }

    /// Convert to floating-point FPS.
    pub fn as_f64(self) -> f64 {
        f64::from(self.num) / f64::from(self.den)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
