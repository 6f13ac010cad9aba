use crate::foundation::core::{BlockSize, PixelCoord};
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::glyph::memory::InterpolationMemory;
use crate::render::config::RenderConfig;
use crate::render::painter::GlyphPainter;
use crate::render::source::ColorSource;
use crate::render::text::TextPainter;

/// Turns one source frame into one glyph-art frame.
///
/// The renderer keeps no state between calls beyond painter scratch buffers; temporal behaviour
/// comes only from the [`InterpolationMemory`] passed to [`FrameRenderer::render`].
pub struct FrameRenderer<P = TextPainter> {
    config: RenderConfig,
    painter: P,
    block: BlockSize,
}

impl FrameRenderer<TextPainter> {
    /// Validate `config` and build the font-backed painter from `config.font`.
    pub fn new(config: RenderConfig) -> GlyphResult<Self> {
        config.validate()?;
        let font = config
            .font
            .as_ref()
            .ok_or_else(|| GlyphError::invalid_config("no font specified"))?;
        let painter = TextPainter::new(font, config.point_size)?;
        Self::with_painter(config, painter)
    }
}

impl<P: GlyphPainter> FrameRenderer<P> {
    /// Validate `config` and render through a caller-supplied painter.
    pub fn with_painter(config: RenderConfig, painter: P) -> GlyphResult<Self> {
        config.validate()?;
        let block = painter.block_size();
        if block.width == 0 || block.height == 0 {
            return Err(GlyphError::font(format!(
                "painter reported an empty glyph block ({}x{})",
                block.width, block.height
            )));
        }
        Ok(Self {
            config,
            painter,
            block,
        })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn block_size(&self) -> BlockSize {
        self.block
    }

    pub fn painter(&self) -> &P {
        &self.painter
    }

    /// Sampled block anchors for a `width` x `height` frame, row-major.
    pub fn anchors(&self, width: u32, height: u32) -> impl Iterator<Item = PixelCoord> + use<P> {
        let block = self.block;
        (0..height)
            .step_by(block.height as usize)
            .flat_map(move |y| {
                (0..width)
                    .step_by(block.width as usize)
                    .map(move |x| PixelCoord::new(x, y))
            })
    }

    /// Render `source` as glyphs.
    ///
    /// With `memory`, each block's brightness is blended with the value remembered for its anchor
    /// before glyph selection. A drawing failure aborts the frame; no partial image is returned.
    pub fn render<S>(
        &mut self,
        source: &S,
        mut memory: Option<&mut InterpolationMemory>,
    ) -> GlyphResult<image::RgbaImage>
    where
        S: ColorSource + ?Sized,
    {
        let (width, height) = source.dimensions();
        if width == 0 || height == 0 {
            return Err(GlyphError::invalid_input(format!(
                "source image is empty ({width}x{height})"
            )));
        }

        let weight = self.config.interpolation_weight;
        self.painter
            .begin_frame(width, height, self.config.background())?;

        for anchor in self.anchors(width, height) {
            let color = source.color_at(anchor.x, anchor.y);
            let raw = color.luma();
            let brightness = match memory.as_deref_mut() {
                Some(mem) => mem.blend(anchor, raw, weight),
                None => raw,
            };
            let glyph = self.config.ramp.resolve(brightness);

            self.painter
                .draw_glyph(glyph, color, anchor)
                .map_err(|e| {
                    GlyphError::render_caused_by(
                        format!("failed to draw '{glyph}' at ({}, {})", anchor.x, anchor.y),
                        e,
                    )
                })?;
        }

        self.painter.finish_frame()
    }
}
