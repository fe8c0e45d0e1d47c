use super::*;

#[test]
fn frame_range_rejects_reversed_bounds() {
    assert!(FrameRange::new(FrameIndex(3), FrameIndex(2)).is_err());
    let r = FrameRange::new(FrameIndex(2), FrameIndex(5)).unwrap();
    assert_eq!(r.len_frames(), 3);
    assert_eq!(
        FrameRange::new(FrameIndex(4), FrameIndex(4))
            .unwrap()
            .len_frames(),
        0
    );
}

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(30, 0).is_err());
    let fps = Fps::new(50, 1).unwrap();
    assert_eq!((fps.num, fps.den), (50, 1));
}

#[test]
fn pixel_rect_truncates_toward_zero() {
    let r = PixelRect::truncate(Rect::new(52.5, 52.9, 147.5, -0.5));
    assert_eq!(
        r,
        PixelRect {
            x1: 52,
            y1: 52,
            x2: 147,
            y2: 0
        }
    );
}
