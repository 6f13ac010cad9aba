use std::io::Read;
use std::process::{Child, ChildStdout, Command, Stdio};

use crate::foundation::error::{GlyphError, GlyphResult};
use crate::media::probe::VideoSourceInfo;

/// Decodes a video into straight-alpha RGBA8 frames, one at a time.
///
/// A single `ffmpeg` child writes raw frames to its stdout; nothing beyond the current frame is
/// buffered. The child's exit status is checked as soon as its output ends, so a decoder that
/// dies mid-stream surfaces as an error from [`VideoFrameReader::next_frame`].
pub struct VideoFrameReader {
    width: u32,
    height: u32,
    child: Child,
    stdout: Option<ChildStdout>,
    stderr_drain: Option<std::thread::JoinHandle<std::io::Result<Vec<u8>>>>,
    frames_read: u64,
    exhausted: bool,
    reaped: bool,
}

impl VideoFrameReader {
    /// Spawn `ffmpeg` decoding `source` at its native size and rate.
    pub fn open(source: &VideoSourceInfo) -> GlyphResult<Self> {
        if source.width == 0 || source.height == 0 {
            return Err(GlyphError::invalid_input(format!(
                "video '{}' has empty dimensions",
                source.path.display()
            )));
        }

        let mut cmd = Command::new("ffmpeg");
        cmd.args(["-v", "error", "-nostdin"])
            .arg("-i")
            .arg(&source.path)
            .args(["-map", "0:v:0", "-f", "rawvideo", "-pix_fmt", "rgba", "pipe:1"]);
        Self::spawn(cmd, source.width, source.height)
    }

    /// Run `cmd` as the decoder; it must write `width` x `height` RGBA frames to stdout.
    pub(crate) fn spawn(mut cmd: Command, width: u32, height: u32) -> GlyphResult<Self> {
        let mut child = cmd
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                GlyphError::media(format!("failed to run ffmpeg for video decode: {e}"))
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| GlyphError::media("failed to open ffmpeg stdout (unexpected)"))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| GlyphError::media("failed to open ffmpeg stderr (unexpected)"))?;
        let stderr_drain = std::thread::spawn(move || {
            let mut bytes = Vec::new();
            stderr.read_to_end(&mut bytes)?;
            Ok(bytes)
        });

        Ok(Self {
            width,
            height,
            child,
            stdout: Some(stdout),
            stderr_drain: Some(stderr_drain),
            frames_read: 0,
            exhausted: false,
            reaped: false,
        })
    }

    pub fn frames_read(&self) -> u64 {
        self.frames_read
    }

    /// Next decoded frame, or `None` once the decoder finished successfully.
    ///
    /// A non-zero decoder exit is reported here, at end of stream, as a `Media` error.
    pub fn next_frame(&mut self) -> GlyphResult<Option<image::RgbaImage>> {
        if self.exhausted {
            return Ok(None);
        }
        let Some(stdout) = self.stdout.as_mut() else {
            return Ok(None);
        };
        match read_rgba_frame(stdout, self.width, self.height)? {
            Some(img) => {
                self.frames_read += 1;
                Ok(Some(img))
            }
            None => {
                self.exhausted = true;
                self.stdout = None;
                self.check_exit()?;
                Ok(None)
            }
        }
    }

    /// Stop decoding and return the number of frames read.
    ///
    /// Stopping before end of stream kills the decoder; that is not an error.
    pub fn finish(mut self) -> GlyphResult<u64> {
        if !self.exhausted {
            self.kill();
        }
        Ok(self.frames_read)
    }

    fn check_exit(&mut self) -> GlyphResult<()> {
        let status = self
            .child
            .wait()
            .map_err(|e| GlyphError::media(format!("failed to wait for ffmpeg decode: {e}")))?;
        self.reaped = true;
        let stderr = self.join_stderr()?;
        if !status.success() {
            return Err(GlyphError::media(format!(
                "ffmpeg video decode failed after {} frames with status {}: {}",
                self.frames_read,
                status,
                String::from_utf8_lossy(&stderr).trim()
            )));
        }
        Ok(())
    }

    fn join_stderr(&mut self) -> GlyphResult<Vec<u8>> {
        match self.stderr_drain.take() {
            Some(handle) => handle
                .join()
                .map_err(|_| GlyphError::media("ffmpeg stderr drain thread panicked"))?
                .map_err(|e| GlyphError::media(format!("ffmpeg stderr read failed: {e}"))),
            None => Ok(Vec::new()),
        }
    }

    fn kill(&mut self) {
        drop(self.stdout.take());
        if !self.reaped {
            let _ = self.child.kill();
            let _ = self.child.wait();
            self.reaped = true;
        }
        let _ = self.join_stderr();
    }
}

impl Drop for VideoFrameReader {
    fn drop(&mut self) {
        self.kill();
    }
}

/// Read exactly one `width` x `height` RGBA frame.
///
/// Clean EOF before the first byte yields `None`; EOF inside a frame is an error.
pub(crate) fn read_rgba_frame<R: Read>(
    reader: &mut R,
    width: u32,
    height: u32,
) -> GlyphResult<Option<image::RgbaImage>> {
    let expected = width as usize * height as usize * 4;
    let mut buf = vec![0u8; expected];
    let mut filled = 0;
    while filled < expected {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(GlyphError::media(format!(
                    "failed to read decoded frame: {e}"
                )));
            }
        }
    }

    if filled == 0 {
        return Ok(None);
    }
    if filled < expected {
        return Err(GlyphError::media(format!(
            "decoded video frame truncated: got {filled} bytes, expected {expected}"
        )));
    }
    image::RgbaImage::from_raw(width, height, buf)
        .map(Some)
        .ok_or_else(|| GlyphError::media("decoded frame buffer has wrong length"))
}
