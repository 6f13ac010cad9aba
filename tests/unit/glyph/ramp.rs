use super::*;

fn presets() -> [RampPreset; 3] {
    [RampPreset::Limited, RampPreset::Extended, RampPreset::Block]
}

#[test]
fn preset_lengths() {
    assert_eq!(GlyphRamp::preset(RampPreset::Limited).len(), 10);
    assert_eq!(GlyphRamp::preset(RampPreset::Extended).len(), 69);
    assert_eq!(GlyphRamp::preset(RampPreset::Block).len(), 1);
}

#[test]
fn empty_custom_ramp_is_config_error() {
    assert!(matches!(
        GlyphRamp::new(""),
        Err(GlyphError::InvalidConfig(_))
    ));
}

#[test]
fn multibyte_glyphs_index_as_single_entries() {
    let ramp = GlyphRamp::new("░▒▓█").unwrap();
    assert_eq!(ramp.len(), 4);
    assert_eq!(ramp.first(), '░');
    assert_eq!(ramp.last(), '█');
}

#[test]
fn resolve_is_monotonic() {
    for preset in presets() {
        let ramp = GlyphRamp::preset(preset);
        let mut prev = 0usize;
        let mut b = -10.0;
        while b <= 270.0 {
            let idx = ramp.index_for(b);
            assert!(idx >= prev, "{preset:?}: index dropped at brightness {b}");
            assert!(idx < ramp.len());
            prev = idx;
            b += 0.25;
        }
    }
}

#[test]
fn resolve_boundaries_on_tonal_presets() {
    for preset in [RampPreset::Limited, RampPreset::Extended] {
        let ramp = GlyphRamp::preset(preset);
        assert_eq!(ramp.resolve(0.0), ramp.first());
        assert_eq!(ramp.resolve(254.0), ramp.last());
        assert_eq!(ramp.resolve(255.0), ramp.last());
        assert_eq!(ramp.resolve(1000.0), ramp.last());
        assert_eq!(ramp.resolve(-5.0), ramp.first());
    }
    assert_eq!(GlyphRamp::preset(RampPreset::Limited).first(), ' ');
    assert_eq!(GlyphRamp::preset(RampPreset::Limited).last(), '@');
}

#[test]
fn limited_ramp_scales_by_254() {
    let ramp = GlyphRamp::preset(RampPreset::Limited);
    assert_eq!(ramp.index_for(25.3), 0);
    assert_eq!(ramp.index_for(25.5), 1);
    assert_eq!(ramp.index_for(127.0), 5);
    assert_eq!(ramp.index_for(253.9), 9);
}

#[test]
fn block_ramp_ignores_brightness() {
    let ramp = GlyphRamp::preset(RampPreset::Block);
    for b in 0..=255 {
        assert_eq!(ramp.resolve(f64::from(b)), '█');
    }
}

#[test]
fn nan_resolves_to_darkest() {
    let ramp = GlyphRamp::preset(RampPreset::Extended);
    assert_eq!(ramp.resolve(f64::NAN), ramp.first());
}

#[test]
fn preset_deserializes_from_lowercase_name() {
    let p: RampPreset = serde_json::from_str("\"block\"").unwrap();
    assert_eq!(p, RampPreset::Block);
    assert!(serde_json::from_str::<RampPreset>("\"Block\"").is_err());
}
