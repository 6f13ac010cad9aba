use super::*;

#[test]
fn luma_uses_standard_weights() {
    assert_eq!(Rgba8::BLACK.luma(), 0.0);
    assert!((Rgba8::WHITE.luma() - 255.0).abs() < 1e-9);
    assert!((Rgba8::new(255, 0, 0, 255).luma() - 76.245).abs() < 1e-9);
    assert!((Rgba8::new(0, 255, 0, 255).luma() - 149.685).abs() < 1e-9);
    assert!((Rgba8::new(0, 0, 255, 255).luma() - 29.07).abs() < 1e-9);
}

#[test]
fn luma_ignores_alpha() {
    assert_eq!(
        Rgba8::new(10, 20, 30, 0).luma(),
        Rgba8::new(10, 20, 30, 255).luma()
    );
}

#[test]
fn pixel_coord_pack_is_unique_per_axis() {
    let a = PixelCoord::new(1, 0).pack();
    let b = PixelCoord::new(0, 1).pack();
    assert_ne!(a, b);

    let c = PixelCoord::new(u32::MAX, 7);
    assert_eq!(PixelCoord::unpack(c.pack()), c);
}

#[test]
fn block_size_rejects_zero() {
    assert!(BlockSize::new(0, 8).is_err());
    assert!(BlockSize::new(8, 0).is_err());
    assert_eq!(
        BlockSize::new(7, 9).unwrap(),
        BlockSize {
            width: 7,
            height: 9
        }
    );
}

#[test]
fn fps_parse_ratio_accepts_ffprobe_forms() {
    assert_eq!(
        Fps::parse_ratio("30000/1001").unwrap(),
        Fps {
            num: 30000,
            den: 1001
        }
    );
    assert_eq!(Fps::parse_ratio("25\n").unwrap(), Fps { num: 25, den: 1 });
    assert!((Fps::parse_ratio("30000/1001").unwrap().as_f64() - 29.97).abs() < 0.01);
}

#[test]
fn fps_parse_ratio_rejects_garbage() {
    assert!(Fps::parse_ratio("0/0").is_err());
    assert!(Fps::parse_ratio("abc").is_err());
    assert!(Fps::parse_ratio("30/").is_err());
    assert!(matches!(
        Fps::parse_ratio("0/1"),
        Err(GlyphError::Media(_))
    ));
}

#[test]
fn rgba8_converts_to_and_from_image_pixels() {
    let c = Rgba8::new(1, 2, 3, 4);
    let px: image::Rgba<u8> = c.into();
    assert_eq!(px.0, [1, 2, 3, 4]);
    assert_eq!(Rgba8::from(px), c);
}
