use kurbo::Rect;

use crate::animation::progress::{box_scale, progress_ratio};
use crate::detect::model::BoundingBox;
use crate::foundation::core::{FrameIndex, PixelRect, Rgb8};
use crate::raster::buffer::RasterFrame;
use crate::raster::draw::stroke_rect;

/// Outline appearance for animated boxes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoxStyle {
    /// Stroke colour.
    pub color: Rgb8,
    /// Stroke width in pixels.
    pub stroke: u32,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            color: [0, 255, 0],
            stroke: 1,
        }
    }
}

/// Geometry of `bbox` at `frame`: scaled about its centroid by [`box_scale`], then truncated
/// to integer pixels.
pub fn animated_rect(bbox: &BoundingBox, frame: FrameIndex, total_frames: u64) -> PixelRect {
    let s = box_scale(progress_ratio(frame, total_frames));
    let r = bbox.to_rect();
    let c = r.center();
    let half_w = r.width() * s / 2.0;
    let half_h = r.height() * s / 2.0;
    PixelRect::truncate(Rect::new(
        c.x - half_w,
        c.y - half_h,
        c.x + half_w,
        c.y + half_h,
    ))
}

/// Draw the animated outline of `bbox` onto `frame_buf` in place.
///
/// The rectangle is not clamped to the frame; whatever falls outside is clipped by the
/// drawing primitive.
pub fn animate_box(
    frame_buf: &mut RasterFrame,
    frame: FrameIndex,
    bbox: &BoundingBox,
    total_frames: u64,
    style: BoxStyle,
) {
    let rect = animated_rect(bbox, frame, total_frames);
    stroke_rect(frame_buf, rect, style.color, style.stroke);
}

#[cfg(test)]
#[path = "../../tests/unit/animation/boxes.rs"]
mod tests;
