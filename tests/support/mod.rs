#![allow(dead_code)]

use glyphcast::{BlockSize, FontSource, GlyphError, GlyphPainter, GlyphResult, PixelCoord, Rgba8};

/// Monospace fonts commonly present on Linux/macOS CI images.
pub const SYSTEM_MONO_FONTS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/System/Library/Fonts/Menlo.ttc",
];

pub fn system_mono_font_path() -> Option<&'static str> {
    SYSTEM_MONO_FONTS
        .iter()
        .copied()
        .find(|p| std::path::Path::new(p).is_file())
}

pub fn system_mono_font() -> Option<FontSource> {
    system_mono_font_path().and_then(|p| FontSource::from_path(p).ok())
}

/// Painter that records glyph choices and fills each drawn cell with the glyph colour.
pub struct RecordingPainter {
    block: BlockSize,
    canvas: Option<image::RgbaImage>,
    /// Glyphs of every frame, in draw order.
    pub frames: Vec<Vec<(char, Rgba8, PixelCoord)>>,
    /// Fail the draw with this index within a frame.
    pub fail_at: Option<usize>,
}

impl RecordingPainter {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            block: BlockSize { width, height },
            canvas: None,
            frames: Vec::new(),
            fail_at: None,
        }
    }

    pub fn last_frame(&self) -> &[(char, Rgba8, PixelCoord)] {
        self.frames.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl GlyphPainter for RecordingPainter {
    fn block_size(&self) -> BlockSize {
        self.block
    }

    fn begin_frame(&mut self, width: u32, height: u32, background: Rgba8) -> GlyphResult<()> {
        self.canvas = Some(image::RgbaImage::from_pixel(width, height, background.into()));
        self.frames.push(Vec::new());
        Ok(())
    }

    fn draw_glyph(&mut self, glyph: char, color: Rgba8, anchor: PixelCoord) -> GlyphResult<()> {
        if self.fail_at == Some(self.last_frame().len()) {
            return Err(GlyphError::font("glyph missing"));
        }
        let canvas = self
            .canvas
            .as_mut()
            .ok_or_else(|| GlyphError::render("draw outside frame"))?;
        if !glyph.is_whitespace() {
            let x1 = (anchor.x + self.block.width).min(canvas.width());
            let y1 = (anchor.y + self.block.height).min(canvas.height());
            for y in anchor.y..y1 {
                for x in anchor.x..x1 {
                    canvas.put_pixel(x, y, color.into());
                }
            }
        }
        if let Some(frame) = self.frames.last_mut() {
            frame.push((glyph, color, anchor));
        }
        Ok(())
    }

    fn finish_frame(&mut self) -> GlyphResult<image::RgbaImage> {
        self.canvas
            .take()
            .ok_or_else(|| GlyphError::render("finish without begin"))
    }
}
