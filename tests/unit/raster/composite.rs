use super::*;

#[test]
fn overlay_replaces_region_exactly() {
    let mut bg = RasterFrame::new_rgb(6, 5, [0, 0, 0]);
    let ov = RasterFrame::new_rgb(2, 3, [200, 100, 50]);
    composite_in_place(&mut bg, &ov, Placement::new(3, 1)).unwrap();

    for y in 0..5 {
        for x in 0..6 {
            let inside = (3..5).contains(&x) && (1..4).contains(&y);
            let want = if inside { [200, 100, 50] } else { [0, 0, 0] };
            assert_eq!(bg.pixel(x, y), Some(want), "pixel ({x},{y})");
        }
    }
}

#[test]
fn flush_with_edges_is_allowed() {
    let mut bg = RasterFrame::new_rgb(150, 150, [0, 0, 0]);
    let ov = RasterFrame::new_rgb(100, 100, [1, 1, 1]);
    composite_in_place(&mut bg, &ov, Placement::new(50, 50)).unwrap();
    assert_eq!(bg.pixel(149, 149), Some([1, 1, 1]));
    assert_eq!(bg.pixel(49, 49), Some([0, 0, 0]));
}

#[test]
fn overlay_past_background_edge_is_out_of_bounds() {
    let bg = RasterFrame::new_rgb(149, 200, [7, 7, 7]);
    let ov = RasterFrame::new_rgb(100, 100, [1, 1, 1]);
    let err = composite(&bg, &ov, Placement::new(50, 50)).unwrap_err();
    assert!(matches!(err, ArscanError::OutOfBounds(_)));

    let bg = RasterFrame::new_rgb(200, 149, [7, 7, 7]);
    let err = composite(&bg, &ov, Placement::new(50, 50)).unwrap_err();
    assert!(matches!(err, ArscanError::OutOfBounds(_)));
}

#[test]
fn failed_composite_leaves_destination_untouched() {
    let mut bg = RasterFrame::new_rgb(10, 10, [7, 7, 7]);
    let before = bg.clone();
    let ov = RasterFrame::new_rgb(5, 5, [1, 1, 1]);
    assert!(composite_in_place(&mut bg, &ov, Placement::new(6, 0)).is_err());
    assert_eq!(bg, before);
}

#[test]
fn channel_mismatch_is_invalid_format() {
    let bg = RasterFrame::new_rgb(10, 10, [0, 0, 0]);
    let ov = RasterFrame::from_raw(2, 2, 4, vec![0; 16]).unwrap();
    let err = composite(&bg, &ov, Placement::new(0, 0)).unwrap_err();
    assert!(matches!(err, ArscanError::InvalidFormat(_)));

    let bg = RasterFrame::from_raw(2, 2, 1, vec![0; 4]).unwrap();
    let ov = RasterFrame::new_rgb(1, 1, [0, 0, 0]);
    let err = composite(&bg, &ov, Placement::new(0, 0)).unwrap_err();
    assert!(matches!(err, ArscanError::InvalidFormat(_)));
}

#[test]
fn composite_does_not_touch_callers_background() {
    let bg = RasterFrame::new_rgb(4, 4, [3, 3, 3]);
    let ov = RasterFrame::new_rgb(2, 2, [9, 9, 9]);
    let out = composite(&bg, &ov, Placement::new(1, 1)).unwrap();
    assert_eq!(bg.pixel(1, 1), Some([3, 3, 3]));
    assert_eq!(out.pixel(1, 1), Some([9, 9, 9]));
}

#[test]
fn resize_hits_requested_footprint() {
    let src = RasterFrame::new_rgb(37, 21, [40, 80, 120]);
    let out = resize(&src, 100, 100).unwrap();
    assert_eq!((out.width, out.height, out.channels), (100, 100, 3));
    assert_eq!(out.pixel(50, 50), Some([40, 80, 120]));
    assert!(resize(&src, 0, 10).is_err());
}
