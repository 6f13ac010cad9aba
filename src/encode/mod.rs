//! Encoding sinks.
//!
//! Sinks consume rendered frames in sequence order and are driven by
//! [`crate::session::render_sequence`].

/// `ffmpeg`-based sinks (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
