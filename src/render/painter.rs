use crate::foundation::core::{BlockSize, PixelCoord, Rgba8};
use crate::foundation::error::GlyphResult;

/// Glyph metrics provider and raster sink used by [`crate::FrameRenderer`].
///
/// Call order per frame: `begin_frame`, any number of `draw_glyph`, then `finish_frame`.
/// `begin_frame` discards whatever an aborted previous frame left behind.
pub trait GlyphPainter {
    /// Cell size used as the sampling stride.
    fn block_size(&self) -> BlockSize;

    /// Start a `width` x `height` frame filled with `background`.
    fn begin_frame(&mut self, width: u32, height: u32, background: Rgba8) -> GlyphResult<()>;

    /// Draw `glyph` in `color` into the cell whose top-left corner is `anchor`.
    fn draw_glyph(&mut self, glyph: char, color: Rgba8, anchor: PixelCoord) -> GlyphResult<()>;

    /// Rasterize the frame and hand it back as straight-alpha RGBA8.
    fn finish_frame(&mut self) -> GlyphResult<image::RgbaImage>;
}

impl<P: GlyphPainter + ?Sized> GlyphPainter for Box<P> {
    fn block_size(&self) -> BlockSize {
        (**self).block_size()
    }

    fn begin_frame(&mut self, width: u32, height: u32, background: Rgba8) -> GlyphResult<()> {
        (**self).begin_frame(width, height, background)
    }

    fn draw_glyph(&mut self, glyph: char, color: Rgba8, anchor: PixelCoord) -> GlyphResult<()> {
        (**self).draw_glyph(glyph, color, anchor)
    }

    fn finish_frame(&mut self) -> GlyphResult<image::RgbaImage> {
        (**self).finish_frame()
    }
}
