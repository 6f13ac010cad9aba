//! Glyphcast renders images and video as coloured glyph art.
//!
//! Each block of the source is sampled at its top-left pixel, reduced to luma, mapped through a
//! [`GlyphRamp`] and drawn in the sampled colour. For video, an [`InterpolationMemory`] carries
//! per-block brightness from frame to frame so glyphs change smoothly instead of flickering.
//!
//! - Build a [`RenderConfig`] with an explicit [`FontSource`]
//! - Create a [`FrameRenderer`]
//! - Render frames directly, or drive whole files through [`convert_image`] / [`convert_video`]
#![forbid(unsafe_code)]

mod foundation;

/// Frame sinks.
pub mod encode;
/// Glyph ramps and interpolation memory.
pub mod glyph;
/// Decoding of stills and video frames.
pub mod media;
/// Frame rendering.
pub mod render;
/// Multi-frame drivers.
pub mod session;
/// File-based settings.
pub mod settings;

pub use crate::foundation::core::{BlockSize, Fps, PixelCoord, Rgba8};
pub use crate::foundation::error::{GlyphError, GlyphResult, RenderCause};

pub use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::glyph::memory::InterpolationMemory;
pub use crate::glyph::ramp::{GlyphRamp, RampPreset};
pub use crate::media::probe::{VideoSourceInfo, probe_video};
pub use crate::render::config::{FontSource, RenderConfig};
pub use crate::render::frame::FrameRenderer;
pub use crate::render::painter::GlyphPainter;
pub use crate::render::source::{BoardSource, ColorSource};
pub use crate::render::text::TextPainter;
pub use crate::session::{
    SequenceStats, VideoConvertOpts, convert_image, convert_video, render_sequence,
};
pub use crate::settings::ConvertSettings;
