use std::path::Path;

use crate::encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts};
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::Fps;
use crate::foundation::error::{GlyphError, GlyphResult};
use crate::glyph::memory::InterpolationMemory;
use crate::media::decode::VideoFrameReader;
use crate::media::probe::probe_video;
use crate::media::still::{load_image, save_image};
use crate::render::frame::FrameRenderer;
use crate::render::painter::GlyphPainter;
use crate::render::source::ColorSource;

/// Counters for one rendered sequence.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceStats {
    /// Frames rendered and pushed to the sink.
    pub frames: u64,
}

/// Options for [`convert_video`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VideoConvertOpts {
    /// Blend brightness across frames through an [`InterpolationMemory`].
    pub interpolate: bool,
    /// Replace an existing output file.
    pub overwrite: bool,
    /// Carry the source's first audio stream into the output.
    pub keep_audio: bool,
}

impl Default for VideoConvertOpts {
    fn default() -> Self {
        Self {
            interpolate: true,
            overwrite: false,
            keep_audio: true,
        }
    }
}

/// Render `frames` in order and push every result into `sink`.
///
/// The sink is started with the first frame's dimensions. With `interpolate`, one fresh
/// [`InterpolationMemory`] spans the whole sequence. The first error ends the sequence and is
/// returned as is; a started sink is then aborted, so no partial output remains.
#[tracing::instrument(skip(renderer, frames, sink))]
pub fn render_sequence<P, S, I>(
    renderer: &mut FrameRenderer<P>,
    frames: I,
    fps: Fps,
    sink: &mut dyn FrameSink,
    interpolate: bool,
) -> GlyphResult<SequenceStats>
where
    P: GlyphPainter,
    S: ColorSource,
    I: IntoIterator<Item = GlyphResult<S>>,
{
    let mut started = false;
    let result = push_sequence(renderer, frames, fps, sink, interpolate, &mut started);
    match result {
        Ok(stats) => {
            tracing::info!(frames = stats.frames, "sequence rendered");
            Ok(stats)
        }
        Err(e) => {
            if started {
                tracing::debug!(error = %e, "aborting sink");
                sink.abort();
            }
            Err(e)
        }
    }
}

fn push_sequence<P, S, I>(
    renderer: &mut FrameRenderer<P>,
    frames: I,
    fps: Fps,
    sink: &mut dyn FrameSink,
    interpolate: bool,
    started: &mut bool,
) -> GlyphResult<SequenceStats>
where
    P: GlyphPainter,
    S: ColorSource,
    I: IntoIterator<Item = GlyphResult<S>>,
{
    let mut memory = interpolate.then(InterpolationMemory::new);
    let mut stats = SequenceStats::default();
    let mut sink_cfg: Option<SinkConfig> = None;

    for (index, source) in frames.into_iter().enumerate() {
        let source = source?;
        let index = index as u64;
        let (width, height) = source.dimensions();

        let cfg = match sink_cfg {
            Some(cfg) => cfg,
            None => {
                let cfg = SinkConfig { width, height, fps };
                sink.begin(cfg)?;
                *started = true;
                tracing::debug!(width, height, "sink started");
                sink_cfg = Some(cfg);
                cfg
            }
        };
        if (width, height) != (cfg.width, cfg.height) {
            return Err(GlyphError::invalid_input(format!(
                "frame {index} is {width}x{height}, sequence started at {}x{}",
                cfg.width, cfg.height
            )));
        }

        let out = renderer.render(&source, memory.as_mut())?;
        sink.push_frame(index, &out)?;
        stats.frames += 1;
    }

    if sink_cfg.is_none() {
        return Err(GlyphError::invalid_input("sequence contains no frames"));
    }
    sink.end()?;
    Ok(stats)
}

/// Render one still image file into another.
#[tracing::instrument(skip(renderer))]
pub fn convert_image<P: GlyphPainter>(
    renderer: &mut FrameRenderer<P>,
    input: &Path,
    output: &Path,
) -> GlyphResult<()> {
    let source = load_image(input)?;
    tracing::debug!(width = source.width(), height = source.height(), "image decoded");
    let out = renderer.render(&source, None)?;
    save_image(output, &out)?;
    tracing::info!("image written");
    Ok(())
}

/// Render every frame of a video file into an MP4.
///
/// Frames are streamed: one decoded frame and one rendered frame are alive at a time. A decoder
/// failure anywhere in the stream fails the conversion and leaves no output file.
#[tracing::instrument(skip(renderer))]
pub fn convert_video<P: GlyphPainter>(
    renderer: &mut FrameRenderer<P>,
    input: &Path,
    output: &Path,
    opts: VideoConvertOpts,
) -> GlyphResult<SequenceStats> {
    if !opts.overwrite && output.exists() {
        return Err(GlyphError::invalid_config(format!(
            "output file '{}' already exists",
            output.display()
        )));
    }

    let info = probe_video(input)?;
    tracing::info!(
        width = info.width,
        height = info.height,
        fps = info.fps.as_f64(),
        has_audio = info.has_audio,
        "video probed"
    );

    let mut sink_opts = FfmpegSinkOpts::new(output);
    sink_opts.overwrite = opts.overwrite;
    sink_opts.bg_rgba = renderer.config().background().to_array();
    if opts.keep_audio && info.has_audio {
        sink_opts = sink_opts.with_audio_from(input);
    }
    let mut sink = FfmpegSink::new(sink_opts);

    let mut reader = VideoFrameReader::open(&info)?;
    let frames = std::iter::from_fn(|| reader.next_frame().transpose())
        .map(|frame| frame.map(crop_to_even));
    let stats = render_sequence(renderer, frames, info.fps, &mut sink, opts.interpolate)?;
    reader.finish()?;
    Ok(stats)
}

/// yuv420p output needs even dimensions; drop a trailing odd row/column.
fn crop_to_even(frame: image::RgbaImage) -> image::RgbaImage {
    let (w, h) = frame.dimensions();
    let (ew, eh) = (w & !1, h & !1);
    if (ew, eh) == (w, h) || ew == 0 || eh == 0 {
        return frame;
    }
    image::imageops::crop_imm(&frame, 0, 0, ew, eh).to_image()
}
