use super::*;

const G: Rgb8 = [0, 255, 0];
const BLACK: Rgb8 = [0, 0, 0];

fn rect(x1: i64, y1: i64, x2: i64, y2: i64) -> PixelRect {
    PixelRect { x1, y1, x2, y2 }
}

#[test]
fn one_pixel_outline_lights_inclusive_corners_only() {
    let mut f = RasterFrame::new_rgb(10, 10, BLACK);
    stroke_rect(&mut f, rect(2, 3, 6, 7), G, 1);

    assert_eq!(f.pixel(2, 3), Some(G));
    assert_eq!(f.pixel(6, 7), Some(G));
    assert_eq!(f.pixel(4, 3), Some(G));
    assert_eq!(f.pixel(2, 5), Some(G));
    assert_eq!(f.pixel(4, 5), Some(BLACK), "interior stays unfilled");
    assert_eq!(f.pixel(7, 7), Some(BLACK));
    assert_eq!(f.pixel(1, 3), Some(BLACK));
}

#[test]
fn off_frame_rect_is_clipped_silently() {
    let mut f = RasterFrame::new_rgb(8, 8, BLACK);
    stroke_rect(&mut f, rect(-5, -5, 20, 3), G, 1);
    // Only the bottom edge (y = 3) lands inside the frame.
    for x in 0..8 {
        assert_eq!(f.pixel(x, 3), Some(G));
    }
    assert_eq!(f.pixel(0, 0), Some(BLACK));
    assert_eq!(f.pixel(4, 4), Some(BLACK));

    let mut g = RasterFrame::new_rgb(8, 8, BLACK);
    let before = g.clone();
    stroke_rect(&mut g, rect(100, 100, 200, 200), G, 3);
    assert_eq!(g, before);
}

#[test]
fn thick_stroke_straddles_the_edge() {
    let mut f = RasterFrame::new_rgb(20, 20, BLACK);
    stroke_rect(&mut f, rect(5, 5, 14, 14), G, 3);
    assert_eq!(f.pixel(4, 10), Some(G));
    assert_eq!(f.pixel(5, 10), Some(G));
    assert_eq!(f.pixel(6, 10), Some(G));
    assert_eq!(f.pixel(3, 10), Some(BLACK));
    assert_eq!(f.pixel(7, 10), Some(BLACK));
}

#[test]
fn huge_stroke_only_visits_rings_inside_the_frame() {
    let mut f = RasterFrame::new_rgb(10, 10, BLACK);
    stroke_rect(&mut f, rect(2, 2, 7, 7), G, u32::MAX);
    // Rings cover every pixel inside the outermost ring, and the rings outside are clipped.
    assert!(f.data.chunks_exact(3).all(|px| px == G));

    let mut g = RasterFrame::new_rgb(10, 10, BLACK);
    let before = g.clone();
    let far = -4_000_000_000;
    stroke_rect(&mut g, rect(far, far, far + 1_000, far + 1_000), G, u32::MAX);
    assert_eq!(g, before);
}

#[test]
fn wide_stroke_partly_off_frame_matches_ring_layout() {
    let mut f = RasterFrame::new_rgb(12, 12, BLACK);
    // Stroke 5 straddles the edge by 2 pixels on each side.
    stroke_rect(&mut f, rect(-1, 3, 8, 20), G, 5);
    for y in 1..12 {
        assert_eq!(f.pixel(0, y), Some(G), "left band at y={y}");
        assert_eq!(f.pixel(1, y), Some(G), "left band at y={y}");
    }
    for x in 6..11 {
        assert_eq!(f.pixel(x, 8), Some(G), "right band at x={x}");
    }
    for x in 0..11 {
        assert_eq!(f.pixel(x, 1), Some(G), "top band at x={x}");
        assert_eq!(f.pixel(x, 5), Some(G), "top band at x={x}");
    }
    assert_eq!(f.pixel(3, 8), Some(BLACK));
    assert_eq!(f.pixel(11, 8), Some(BLACK));
    assert_eq!(f.pixel(3, 0), Some(BLACK));
}
