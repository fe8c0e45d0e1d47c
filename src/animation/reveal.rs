use crate::foundation::core::{FrameIndex, Rgb8};
use crate::raster::buffer::RasterFrame;
use crate::raster::glyphs::draw_text;

/// Number of leading characters of a `len`-character label visible at `frame`.
///
/// `floor(1 + len * frame / total)`, clamped to `[0, len]`. Computed in integers so the
/// result is exact for any frame count.
pub fn reveal_len(len: usize, frame: FrameIndex, total_frames: u64) -> usize {
    if total_frames == 0 {
        return len;
    }
    let len_u = len as u128;
    let n = (u128::from(total_frames) + len_u * u128::from(frame.0)) / u128::from(total_frames);
    n.min(len_u) as usize
}

/// Leading substring of `label` visible at `frame`. Never splits a character.
pub fn reveal(label: &str, frame: FrameIndex, total_frames: u64) -> &str {
    let n = reveal_len(label.chars().count(), frame, total_frames);
    match label.char_indices().nth(n) {
        Some((byte, _)) => &label[..byte],
        None => label,
    }
}

/// Where and how revealed labels are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LabelStyle {
    /// Pixels between the text baseline and the top edge of the original box.
    pub offset: u32,
    /// Text colour.
    pub color: Rgb8,
    /// Integer glyph scale.
    pub scale: u32,
}

impl Default for LabelStyle {
    fn default() -> Self {
        Self {
            offset: 10,
            color: [0, 0, 255],
            scale: 2,
        }
    }
}

/// Draw the revealed part of `label` with its bottom-left corner at `anchor`.
pub fn draw_label(
    frame_buf: &mut RasterFrame,
    label: &str,
    frame: FrameIndex,
    total_frames: u64,
    anchor: (i64, i64),
    style: LabelStyle,
) {
    let shown = reveal(label, frame, total_frames);
    if shown.is_empty() {
        return;
    }
    draw_text(frame_buf, shown, anchor, style.color, style.scale);
}

#[cfg(test)]
#[path = "../../tests/unit/animation/reveal.rs"]
mod tests;
