use super::*;

fn parse(json: &str) -> GlyphResult<ConvertSettings> {
    ConvertSettings::from_reader(json.as_bytes())
}

#[test]
fn empty_object_yields_defaults() {
    let s = parse("{}").unwrap();
    assert_eq!(s, ConvertSettings::default());
    assert_eq!(s.ramp, RampPreset::Extended);
    assert_eq!(s.point_size, 14.0);
    assert_eq!(s.interpolation_weight, 0.4);
    assert!(s.interpolate && s.keep_audio);
    assert!(!s.transparency && !s.overwrite);
}

#[test]
fn unknown_field_is_rejected() {
    assert!(matches!(
        parse(r#"{"charset":"limited"}"#),
        Err(GlyphError::InvalidConfig(_))
    ));
}

#[test]
fn custom_ramp_overrides_preset() {
    let s = parse(r#"{"ramp":"block","custom_ramp":" #"}"#).unwrap();
    assert_eq!(s.glyph_ramp().unwrap().glyphs(), &[' ', '#']);

    let s = parse(r#"{"ramp":"limited"}"#).unwrap();
    assert_eq!(s.glyph_ramp().unwrap().len(), 10);
}

#[test]
fn empty_custom_ramp_is_config_error() {
    let s = parse(r#"{"custom_ramp":""}"#).unwrap();
    assert!(matches!(
        s.into_render_config(),
        Err(GlyphError::InvalidConfig(_))
    ));
}

#[test]
fn out_of_range_weight_is_config_error() {
    let s = parse(r#"{"interpolation_weight":1.5}"#).unwrap();
    assert!(matches!(
        s.into_render_config(),
        Err(GlyphError::InvalidConfig(_))
    ));
}

#[test]
fn missing_font_file_is_font_error() {
    let s = parse(r#"{"font_path":"/nonexistent/glyphcast/font.ttf"}"#).unwrap();
    assert!(matches!(s.into_render_config(), Err(GlyphError::Font(_))));
}

#[test]
fn render_config_without_font_carries_settings() {
    let s = parse(r#"{"ramp":"limited","point_size":10,"transparency":true}"#).unwrap();
    let cfg = s.into_render_config().unwrap();
    assert!(cfg.font.is_none());
    assert_eq!(cfg.point_size, 10.0);
    assert!(cfg.transparency);
    assert_eq!(cfg.ramp.len(), 10);
}

#[test]
fn relative_font_path_resolves_against_settings_dir() {
    let dir = std::env::temp_dir().join(format!("glyphcast_settings_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("settings.json");
    std::fs::write(&path, r#"{"font_path":"fonts/mono.ttf","interpolate":false}"#).unwrap();

    let s = ConvertSettings::from_path(&path).unwrap();
    assert_eq!(s.font_path, Some(dir.join("fonts/mono.ttf")));
    assert!(!s.video_opts().interpolate);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn missing_settings_file_is_config_error() {
    assert!(matches!(
        ConvertSettings::from_path("/nonexistent/glyphcast/settings.json"),
        Err(GlyphError::InvalidConfig(_))
    ));
}
