//! Source decoding: still images through `image`, video through the system `ffmpeg` tools.

/// Streaming video frame decoding.
pub mod decode;
/// `ffprobe` metadata.
pub mod probe;
/// Still image load/save.
pub mod still;
