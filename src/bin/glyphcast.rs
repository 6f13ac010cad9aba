use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand, ValueEnum};

use glyphcast::{ConvertSettings, FrameRenderer, RampPreset};

#[derive(Parser, Debug)]
#[command(name = "glyphcast", version, about = "Render images and video as coloured glyph art")]
struct Cli {
    /// Log progress at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a still image (output format follows the file extension).
    Image(ImageArgs),
    /// Convert a video to MP4 (requires `ffmpeg` and `ffprobe` on PATH).
    Video(VideoArgs),
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RampArg {
    Limited,
    Extended,
    Block,
}

impl From<RampArg> for RampPreset {
    fn from(r: RampArg) -> Self {
        match r {
            RampArg::Limited => Self::Limited,
            RampArg::Extended => Self::Extended,
            RampArg::Block => Self::Block,
        }
    }
}

/// Flags shared by both subcommands; each overrides the settings file.
#[derive(Args, Debug)]
struct StyleArgs {
    /// JSON settings file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Built-in glyph ramp.
    #[arg(long, value_enum)]
    ramp: Option<RampArg>,

    /// Custom glyph ramp, darkest first. Overrides `--ramp`.
    #[arg(long)]
    custom_ramp: Option<String>,

    /// Monospace TTF/OTF font file.
    #[arg(long)]
    font: Option<PathBuf>,

    /// Font size in points (one point is one pixel).
    #[arg(long)]
    size: Option<f32>,

    /// Interpolation weight in [0, 1].
    #[arg(long)]
    weight: Option<f64>,

    /// Transparent background instead of black.
    #[arg(long)]
    transparent: bool,
}

#[derive(Args, Debug)]
struct ImageArgs {
    /// Input image.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    style: StyleArgs,
}

#[derive(Args, Debug)]
struct VideoArgs {
    /// Input video.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output MP4.
    #[arg(long)]
    out: PathBuf,

    #[command(flatten)]
    style: StyleArgs,

    /// Render every frame independently.
    #[arg(long)]
    no_interpolate: bool,

    /// Do not copy the source audio track.
    #[arg(long)]
    no_audio: bool,

    /// Overwrite output if it already exists.
    #[arg(long)]
    overwrite: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match cli.cmd {
        Command::Image(args) => cmd_image(args),
        Command::Video(args) => cmd_video(args),
    }
}

fn resolve_settings(style: &StyleArgs) -> anyhow::Result<ConvertSettings> {
    let mut settings = match style.config.as_deref() {
        Some(path) => ConvertSettings::from_path(path)?,
        None => ConvertSettings::default(),
    };
    if let Some(ramp) = style.ramp {
        settings.ramp = ramp.into();
        settings.custom_ramp = None;
    }
    if let Some(custom) = style.custom_ramp.clone() {
        settings.custom_ramp = Some(custom);
    }
    if let Some(font) = style.font.clone() {
        settings.font_path = Some(font);
    }
    if let Some(size) = style.size {
        settings.point_size = size;
    }
    if let Some(weight) = style.weight {
        settings.interpolation_weight = weight;
    }
    if style.transparent {
        settings.transparency = true;
    }
    if settings.font_path.is_none() {
        anyhow::bail!("no font given: pass --font or set font_path in --config");
    }
    Ok(settings)
}

fn ensure_input(path: &Path) -> anyhow::Result<()> {
    std::fs::metadata(path)
        .with_context(|| format!("input '{}' is not readable", path.display()))?;
    Ok(())
}

fn cmd_image(args: ImageArgs) -> anyhow::Result<()> {
    ensure_input(&args.in_path)?;
    let settings = resolve_settings(&args.style)?;
    let mut renderer = FrameRenderer::new(settings.into_render_config()?)?;
    glyphcast::convert_image(&mut renderer, &args.in_path, &args.out)?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_video(args: VideoArgs) -> anyhow::Result<()> {
    ensure_input(&args.in_path)?;
    let mut settings = resolve_settings(&args.style)?;
    if args.no_interpolate {
        settings.interpolate = false;
    }
    if args.no_audio {
        settings.keep_audio = false;
    }
    if args.overwrite {
        settings.overwrite = true;
    }

    let opts = settings.video_opts();
    let mut renderer = FrameRenderer::new(settings.into_render_config()?)?;
    let stats = glyphcast::convert_video(&mut renderer, &args.in_path, &args.out, opts)?;
    eprintln!("wrote {} ({} frames)", args.out.display(), stats.frames);
    Ok(())
}
