use std::error::Error as _;

use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        GlyphError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        GlyphError::invalid_config("x")
            .to_string()
            .contains("invalid config:")
    );
    assert!(GlyphError::font("x").to_string().contains("font error:"));
    assert!(GlyphError::render("x").to_string().contains("render error:"));
    assert!(GlyphError::media("x").to_string().contains("media error:"));
}

#[test]
fn render_keeps_underlying_cause() {
    let err = GlyphError::render_caused_by("glyph 'a' at (0, 0)", std::io::Error::other("boom"));
    let source = err.source().expect("render error should expose its cause");
    assert_eq!(source.to_string(), "boom");

    assert!(GlyphError::render("plain").source().is_none());
}

#[test]
fn render_can_wrap_another_glyph_error() {
    let inner = GlyphError::font("missing glyph");
    let err = GlyphError::render_caused_by("draw failed", inner);
    assert!(
        err.source()
            .unwrap()
            .to_string()
            .contains("font error: missing glyph")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = GlyphError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
