//! Block sampling, glyph resolution and glyph drawing.

/// Render sequence configuration.
pub mod config;
/// The frame render loop.
pub mod frame;
/// Glyph drawing capability.
pub mod painter;
/// Colour lookup capability.
pub mod source;
/// Font-backed glyph painter.
pub mod text;
