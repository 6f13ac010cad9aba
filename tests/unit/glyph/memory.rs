use super::*;

const C: PixelCoord = PixelCoord::new(3, 4);

#[test]
fn first_touch_stores_and_returns_current() {
    let mut mem = InterpolationMemory::new();
    assert_eq!(mem.blend(C, 100.0, 0.4), 100.0);
    assert_eq!(mem.get(C), Some(100.0));
    assert_eq!(mem.len(), 1);
}

#[test]
fn second_touch_blends_with_previous() {
    let mut mem = InterpolationMemory::new();
    mem.blend(C, 100.0, 0.4);
    let out = mem.blend(C, 200.0, 0.4);
    assert!((out - 160.0).abs() < 1e-9);
    assert!((mem.get(C).unwrap() - 160.0).abs() < 1e-9);
}

#[test]
fn weight_zero_tracks_current() {
    let mut mem = InterpolationMemory::new();
    mem.blend(C, 10.0, 0.0);
    assert_eq!(mem.blend(C, 250.0, 0.0), 250.0);
    assert_eq!(mem.get(C), Some(250.0));
}

#[test]
fn weight_one_freezes_first_value() {
    let mut mem = InterpolationMemory::new();
    mem.blend(C, 10.0, 1.0);
    for current in [0.0, 128.0, 255.0] {
        assert_eq!(mem.blend(C, current, 1.0), 10.0);
    }
    assert_eq!(mem.get(C), Some(10.0));
}

#[test]
fn coordinates_are_independent() {
    let mut mem = InterpolationMemory::new();
    let other = PixelCoord::new(4, 3);
    mem.blend(C, 0.0, 0.5);
    assert_eq!(mem.blend(other, 200.0, 0.5), 200.0);
    assert_eq!(mem.blend(C, 100.0, 0.5), 50.0);
}

#[test]
fn reset_clears_entries() {
    let mut mem = InterpolationMemory::with_capacity(4);
    mem.blend(C, 42.0, 0.5);
    assert!(!mem.is_empty());
    mem.reset();
    assert!(mem.is_empty());
    assert_eq!(mem.get(C), None);
    assert_eq!(mem.blend(C, 7.0, 0.5), 7.0);
}
