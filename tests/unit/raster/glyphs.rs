use super::*;

const BLUE: Rgb8 = [0, 0, 255];
const BLACK: Rgb8 = [0, 0, 0];

fn lit(frame: &RasterFrame) -> Vec<(u32, u32)> {
    let mut out = Vec::new();
    for y in 0..frame.height {
        for x in 0..frame.width {
            if frame.pixel(x, y) != Some(BLACK) {
                out.push((x, y));
            }
        }
    }
    out
}

#[test]
fn text_sits_above_the_anchor_row() {
    let mut f = RasterFrame::new_rgb(40, 40, BLACK);
    draw_text(&mut f, "B", (10, 30), BLUE, 2);
    let px = lit(&f);
    assert!(!px.is_empty());
    for (x, y) in px {
        assert!((10..20).contains(&x), "x={x}");
        assert!((16..30).contains(&y), "y={y}");
    }
}

#[test]
fn advance_matches_measure() {
    let mut f = RasterFrame::new_rgb(80, 20, BLACK);
    assert_eq!(draw_text(&mut f, "Box", (0, 15), BLUE, 1), measure_text("Box", 1));
    assert_eq!(measure_text("Box", 2), 36);
    assert_eq!(measure_text("", 3), 0);
}

#[test]
fn longer_prefix_lights_more_pixels() {
    let mut a = RasterFrame::new_rgb(80, 20, BLACK);
    let mut b = RasterFrame::new_rgb(80, 20, BLACK);
    draw_text(&mut a, "B", (2, 18), BLUE, 2);
    draw_text(&mut b, "Bo", (2, 18), BLUE, 2);
    assert!(lit(&b).len() > lit(&a).len());
}

#[test]
fn text_above_the_frame_is_clipped() {
    let mut f = RasterFrame::new_rgb(20, 20, BLACK);
    let before = f.clone();
    draw_text(&mut f, "apple", (0, -10), BLUE, 2);
    assert_eq!(f, before);

    let mut g = RasterFrame::new_rgb(20, 20, BLACK);
    draw_text(&mut g, "apple", (-3, 4), BLUE, 2);
    assert!(!lit(&g).is_empty());
}

#[test]
fn lowercase_and_uppercase_share_glyphs() {
    let mut a = RasterFrame::new_rgb(20, 10, BLACK);
    let mut b = RasterFrame::new_rgb(20, 10, BLACK);
    draw_text(&mut a, "cup", (0, 8), BLUE, 1);
    draw_text(&mut b, "CUP", (0, 8), BLUE, 1);
    assert_eq!(a, b);
}

#[test]
fn measure_saturates_instead_of_overflowing() {
    assert_eq!(measure_text("Box", 1_000_000_000), u32::MAX);
    assert_eq!(measure_text("Box", u32::MAX), u32::MAX);
}

#[test]
fn huge_scale_is_clipped_to_the_frame() {
    let mut f = RasterFrame::new_rgb(16, 16, BLACK);
    let advance = draw_text(&mut f, "Box", (0, 16), BLUE, u32::MAX);
    assert_eq!(advance, u32::MAX);
    // The top glyph row of "B" starts far above the frame; its bottom-left pixel block
    // (row 6, column 0) covers the whole visible frame.
    assert!(f.data.chunks_exact(3).all(|px| px == BLUE));
}
