//! Brightness-to-glyph mapping and temporal brightness memory.

/// Per-block brightness memory for frame sequences.
pub mod memory;
/// Character ramps.
pub mod ramp;
