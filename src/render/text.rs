use std::borrow::Cow;
use std::collections::HashMap;

use crate::foundation::core::{BlockSize, PixelCoord, Rgba8};
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::render::config::FontSource;
use crate::render::painter::GlyphPainter;

/// Character whose metrics define the cell size.
pub const REFERENCE_GLYPH: char = '█';

#[derive(Clone, Copy, Debug)]
struct ShapedGlyph {
    id: u32,
    x: f32,
    advance: f32,
    ascent: f32,
}

/// Shapes single characters against one registered font family.
struct GlyphShaper {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<Rgba8>,
    family_name: String,
    size_px: f32,
}

impl GlyphShaper {
    fn new(font_bytes: &[u8], size_px: f32) -> GlyphResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font_bytes.to_vec()), None);
        let family_id = families
            .first()
            .map(|(id, _)| *id)
            .ok_or_else(|| GlyphError::font("no font families registered from font bytes"))?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| GlyphError::font("registered font family has no name"))?
            .to_string();

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            size_px,
        })
    }

    /// `None` when the layout produced no glyph run (whitespace-only shaping).
    fn shape(&mut self, ch: char) -> Option<ShapedGlyph> {
        let mut buf = [0u8; 4];
        let text: &str = ch.encode_utf8(&mut buf);

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(self.size_px));
        let mut layout: parley::Layout<Rgba8> = builder.build(text);
        layout.break_all_lines(None);

        for line in layout.lines() {
            let m = line.metrics();
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                if let Some(g) = run.glyphs().next() {
                    return Some(ShapedGlyph {
                        id: g.id,
                        x: g.x,
                        advance: m.advance,
                        ascent: m.ascent,
                    });
                }
            }
        }
        None
    }
}

/// Production [`GlyphPainter`]: `parley` shaping, `vello_cpu` rasterization.
///
/// Points map 1:1 to pixels (72 DPI). The cell width is the advance of [`REFERENCE_GLYPH`] and
/// the cell height is the font ascent, both rounded to whole pixels.
pub struct TextPainter {
    shaper: GlyphShaper,
    font: vello_cpu::peniko::FontData,
    block: BlockSize,
    ascent: f32,
    glyphs: HashMap<char, Option<ShapedGlyph>>,
    ctx: Option<vello_cpu::RenderContext>,
    frame_started: bool,
}

impl TextPainter {
    pub fn new(font: &FontSource, point_size: f32) -> GlyphResult<Self> {
        if !point_size.is_finite() || point_size <= 0.0 {
            return Err(GlyphError::invalid_config(format!(
                "point size must be finite and > 0, got {point_size}"
            )));
        }

        let mut shaper = GlyphShaper::new(font.bytes(), point_size)?;
        let reference = shaper
            .shape(REFERENCE_GLYPH)
            .filter(|g| g.id != 0)
            .ok_or_else(|| {
                GlyphError::font(format!(
                    "font has no glyph for reference character '{REFERENCE_GLYPH}'"
                ))
            })?;

        let block = BlockSize::new(
            reference.advance.round().max(1.0) as u32,
            reference.ascent.round().max(1.0) as u32,
        )?;

        let mut glyphs = HashMap::new();
        glyphs.insert(REFERENCE_GLYPH, Some(reference));

        Ok(Self {
            shaper,
            font: vello_cpu::peniko::FontData::new(
                vello_cpu::peniko::Blob::from(font.bytes().to_vec()),
                0,
            ),
            block,
            ascent: reference.ascent,
            glyphs,
            ctx: None,
            frame_started: false,
        })
    }

    fn glyph_for(&mut self, ch: char) -> Option<ShapedGlyph> {
        if let Some(g) = self.glyphs.get(&ch) {
            return *g;
        }
        let shaped = self.shaper.shape(ch);
        self.glyphs.insert(ch, shaped);
        shaped
    }

    fn ctx_mut(&mut self) -> GlyphResult<&mut vello_cpu::RenderContext> {
        if !self.frame_started {
            return Err(GlyphError::render("draw called outside of a frame"));
        }
        self.ctx
            .as_mut()
            .ok_or_else(|| GlyphError::render("render context missing"))
    }
}

impl GlyphPainter for TextPainter {
    fn block_size(&self) -> BlockSize {
        self.block
    }

    fn begin_frame(&mut self, width: u32, height: u32, background: Rgba8) -> GlyphResult<()> {
        let w: u16 = width
            .try_into()
            .map_err(|_| GlyphError::render(format!("frame width {width} exceeds u16")))?;
        let h: u16 = height
            .try_into()
            .map_err(|_| GlyphError::render(format!("frame height {height} exceeds u16")))?;

        let mut ctx = match self.ctx.take() {
            Some(ctx) if ctx.width() == w && ctx.height() == h => ctx,
            _ => vello_cpu::RenderContext::new(w, h),
        };
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        if background.a != 0 {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                background.r,
                background.g,
                background.b,
                background.a,
            ));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(width),
                f64::from(height),
            ));
        }

        self.ctx = Some(ctx);
        self.frame_started = true;
        Ok(())
    }

    fn draw_glyph(&mut self, glyph: char, color: Rgba8, anchor: PixelCoord) -> GlyphResult<()> {
        let shaped = match self.glyph_for(glyph) {
            Some(g) if g.id != 0 => g,
            _ if glyph.is_whitespace() => return Ok(()),
            _ => {
                return Err(GlyphError::font(format!(
                    "font has no glyph for character '{glyph}'"
                )));
            }
        };

        let size_px = self.shaper.size_px;
        let baseline = anchor.y as f32 + self.ascent;
        let x = anchor.x as f32 + shaped.x;
        let font = self.font.clone();
        let ctx = self.ctx_mut()?;
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, color.a,
        ));
        ctx.glyph_run(&font)
            .font_size(size_px)
            .fill_glyphs(std::iter::once(vello_cpu::Glyph {
                id: shaped.id,
                x,
                y: baseline,
            }));
        Ok(())
    }

    fn finish_frame(&mut self) -> GlyphResult<image::RgbaImage> {
        let ctx = self.ctx_mut()?;
        let (w, h) = (ctx.width(), ctx.height());
        let mut pixmap = vello_cpu::Pixmap::new(w, h);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        self.frame_started = false;

        let mut data = pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut data);
        image::RgbaImage::from_raw(u32::from(w), u32::from(h), data)
            .ok_or_else(|| GlyphError::render("rasterized frame has unexpected byte length"))
    }
}
