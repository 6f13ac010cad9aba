use std::path::{Path, PathBuf};

use crate::foundation::core::Fps;
use crate::foundation::error::{GlyphError, GlyphResult};

/// Stream facts needed to re-encode a video as glyph art.
#[derive(Clone, Debug, PartialEq)]
pub struct VideoSourceInfo {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
    /// Nominal frame rate from the stream's `r_frame_rate`.
    pub fps: Fps,
    pub has_audio: bool,
}

#[derive(serde::Deserialize)]
struct ProbeStream {
    codec_type: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    r_frame_rate: Option<String>,
}

#[derive(serde::Deserialize)]
struct ProbeOut {
    #[serde(default)]
    streams: Vec<ProbeStream>,
}

/// Probe `source_path` with `ffprobe`.
pub fn probe_video(source_path: &Path) -> GlyphResult<VideoSourceInfo> {
    let out = std::process::Command::new("ffprobe")
        .args(["-v", "error", "-print_format", "json", "-show_streams"])
        .arg(source_path)
        .output()
        .map_err(|e| GlyphError::media(format!("failed to run ffprobe: {e}")))?;
    if !out.status.success() {
        return Err(GlyphError::media(format!(
            "ffprobe failed for '{}': {}",
            source_path.display(),
            String::from_utf8_lossy(&out.stderr).trim()
        )));
    }
    parse_probe_json(source_path, &out.stdout)
}

pub(crate) fn parse_probe_json(source_path: &Path, json: &[u8]) -> GlyphResult<VideoSourceInfo> {
    let parsed: ProbeOut = serde_json::from_slice(json)
        .map_err(|e| GlyphError::media(format!("ffprobe json parse failed: {e}")))?;

    let video = parsed
        .streams
        .iter()
        .find(|s| s.codec_type.as_deref() == Some("video"))
        .ok_or_else(|| {
            GlyphError::invalid_input(format!(
                "no video stream found in '{}'",
                source_path.display()
            ))
        })?;
    let width = video
        .width
        .ok_or_else(|| GlyphError::media("missing video width from ffprobe"))?;
    let height = video
        .height
        .ok_or_else(|| GlyphError::media("missing video height from ffprobe"))?;
    let fps = Fps::parse_ratio(video.r_frame_rate.as_deref().unwrap_or("0/1"))?;
    let has_audio = parsed
        .streams
        .iter()
        .any(|s| s.codec_type.as_deref() == Some("audio"));

    Ok(VideoSourceInfo {
        path: source_path.to_path_buf(),
        width,
        height,
        fps,
        has_audio,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/media/probe.rs"]
mod tests;
