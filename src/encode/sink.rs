use crate::foundation::core::Fps;
use crate::foundation::error::{GlyphError, GlyphResult};

/// Configuration provided to a [`FrameSink`] before the first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frames-per-second.
    pub fps: Fps,
}

/// Consumer of rendered frames.
///
/// Ordering contract: `push_frame` is called with strictly increasing indices, starting after a
/// single `begin` and followed by a single `end`, or by `abort` when the sequence failed.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> GlyphResult<()>;
    /// Push one straight-alpha RGBA8 frame.
    fn push_frame(&mut self, index: u64, frame: &image::RgbaImage) -> GlyphResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> GlyphResult<()>;
    /// Discard everything pushed since `begin`. No output may remain afterwards.
    fn abort(&mut self) {}
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(u64, image::RgbaImage)>,
    ended: bool,
    aborted: bool,
}

impl InMemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg
    }

    /// Frames in push order.
    pub fn frames(&self) -> &[(u64, image::RgbaImage)] {
        &self.frames
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn is_aborted(&self) -> bool {
        self.aborted
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> GlyphResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        self.aborted = false;
        Ok(())
    }

    fn push_frame(&mut self, index: u64, frame: &image::RgbaImage) -> GlyphResult<()> {
        if let Some((last, _)) = self.frames.last()
            && index <= *last
        {
            return Err(GlyphError::invalid_input(
                "sink received out-of-order frame index",
            ));
        }
        self.frames.push((index, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> GlyphResult<()> {
        self.ended = true;
        Ok(())
    }

    fn abort(&mut self) {
        self.frames.clear();
        self.aborted = true;
    }
}
