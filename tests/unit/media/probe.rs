use super::*;

fn parse(json: &str) -> GlyphResult<VideoSourceInfo> {
    parse_probe_json(Path::new("clip.mp4"), json.as_bytes())
}

#[test]
fn picks_video_stream_and_detects_audio() {
    let info = parse(
        r#"{"streams":[
            {"codec_type":"audio"},
            {"codec_type":"video","width":640,"height":360,"r_frame_rate":"30000/1001"}
        ]}"#,
    )
    .unwrap();
    assert_eq!((info.width, info.height), (640, 360));
    assert_eq!(info.fps, Fps { num: 30000, den: 1001 });
    assert!(info.has_audio);
    assert_eq!(info.path, PathBuf::from("clip.mp4"));
}

#[test]
fn silent_video_has_no_audio() {
    let info = parse(
        r#"{"streams":[{"codec_type":"video","width":2,"height":2,"r_frame_rate":"25/1"}]}"#,
    )
    .unwrap();
    assert!(!info.has_audio);
    assert_eq!(info.fps.as_f64(), 25.0);
}

#[test]
fn missing_video_stream_is_invalid_input() {
    assert!(matches!(
        parse(r#"{"streams":[{"codec_type":"audio"}]}"#),
        Err(GlyphError::InvalidInput(_))
    ));
}

#[test]
fn zero_frame_rate_is_media_error() {
    assert!(matches!(
        parse(r#"{"streams":[{"codec_type":"video","width":2,"height":2,"r_frame_rate":"0/0"}]}"#),
        Err(GlyphError::Media(_))
    ));
}

#[test]
fn garbage_json_is_media_error() {
    assert!(matches!(parse("not json"), Err(GlyphError::Media(_))));
}
