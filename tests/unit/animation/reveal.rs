use super::*;

#[test]
fn first_frame_shows_one_character() {
    assert_eq!(reveal("Box", FrameIndex(0), 10), "B");
    assert_eq!(reveal("banana", FrameIndex(0), 240), "b");
}

#[test]
fn last_frame_shows_everything() {
    assert_eq!(reveal("Box", FrameIndex(9), 10), "Box");
    for label in ["a", "cup", "wine glass", "broccoli"] {
        assert_eq!(reveal(label, FrameIndex(239), 240), label);
    }
}

#[test]
fn reveal_never_exceeds_the_label() {
    assert_eq!(reveal("Box", FrameIndex(10), 10), "Box");
    assert_eq!(reveal("Box", FrameIndex(1_000), 10), "Box");
    assert_eq!(reveal_len(3, FrameIndex(u64::MAX), 7), 3);
}

#[test]
fn empty_label_reveals_nothing() {
    assert_eq!(reveal("", FrameIndex(0), 10), "");
    assert_eq!(reveal("", FrameIndex(9), 10), "");
}

#[test]
fn matches_floor_formula_across_the_run() {
    let label = "orange";
    let total = 240u64;
    let mut prev = 0;
    for f in 0..total {
        let expect = ((1.0 + 6.0 * f as f64 / total as f64).floor() as usize).min(6);
        let got = reveal_len(6, FrameIndex(f), total);
        assert_eq!(got, expect, "frame {f}");
        assert!(got >= prev);
        prev = got;
        assert_eq!(reveal(label, FrameIndex(f), total).len(), got);
    }
}

#[test]
fn multibyte_labels_split_on_char_boundaries() {
    assert_eq!(reveal("çà", FrameIndex(0), 4), "ç");
    assert_eq!(reveal("çà", FrameIndex(3), 4), "çà");
}

#[test]
fn draw_label_skips_empty_text() {
    let mut f = RasterFrame::new_rgb(30, 30, [0, 0, 0]);
    let before = f.clone();
    draw_label(&mut f, "", FrameIndex(0), 10, (2, 20), LabelStyle::default());
    assert_eq!(f, before);
    draw_label(&mut f, "Box", FrameIndex(0), 10, (2, 20), LabelStyle::default());
    assert_ne!(f, before);
}
