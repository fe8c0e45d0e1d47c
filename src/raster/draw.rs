use crate::foundation::core::{PixelRect, Rgb8};
use crate::raster::buffer::RasterFrame;

/// Draw an unfilled rectangle outline with inclusive corners.
///
/// Strokes wider than one pixel grow around the nominal edge, split as evenly as possible
/// between inside and outside. Any part of the outline that falls off the frame is clipped;
/// this never fails, whatever the coordinates.
pub fn stroke_rect(frame: &mut RasterFrame, rect: PixelRect, color: Rgb8, stroke: u32) {
    let PixelRect { x1, y1, x2, y2 } = normalized(rect);
    let stroke = i64::from(stroke.max(1));
    let outward = (stroke - 1) / 2;
    let (w, h) = (i64::from(frame.width), i64::from(frame.height));

    // Ring k puts its edges at x1 + k, x2 - k, y1 + k and y2 - k. Only rings with at least
    // one edge line inside the frame are visited.
    let mut spans = [
        (x1.saturating_neg(), (w - 1).saturating_sub(x1)),
        (x2.saturating_sub(w - 1), x2),
        (y1.saturating_neg(), (h - 1).saturating_sub(y1)),
        (y2.saturating_sub(h - 1), y2),
    ]
    .map(|(lo, hi)| (lo.max(-outward), hi.min(stroke - outward - 1)));
    spans.sort_unstable();

    let mut next = i64::MIN;
    for (lo, hi) in spans {
        for k in lo.max(next)..=hi {
            // k > 0 shrinks the ring inward; a ring that has collapsed draws nothing.
            let (ax, ay, bx, by) = (x1 + k, y1 + k, x2 - k, y2 - k);
            if ax > bx || ay > by {
                continue;
            }
            hline(frame, ax, bx, ay, color);
            hline(frame, ax, bx, by, color);
            vline(frame, ax, ay, by, color);
            vline(frame, bx, ay, by, color);
        }
        next = next.max(hi.saturating_add(1));
    }
}

fn hline(frame: &mut RasterFrame, xa: i64, xb: i64, y: i64, color: Rgb8) {
    if y < 0 || y >= i64::from(frame.height) {
        return;
    }
    for x in xa.max(0)..=xb.min(i64::from(frame.width) - 1) {
        frame.put_pixel_clipped(x, y, color);
    }
}

fn vline(frame: &mut RasterFrame, x: i64, ya: i64, yb: i64, color: Rgb8) {
    if x < 0 || x >= i64::from(frame.width) {
        return;
    }
    for y in ya.max(0)..=yb.min(i64::from(frame.height) - 1) {
        frame.put_pixel_clipped(x, y, color);
    }
}

fn normalized(r: PixelRect) -> PixelRect {
    PixelRect {
        x1: r.x1.min(r.x2),
        y1: r.y1.min(r.y2),
        x2: r.x1.max(r.x2),
        y2: r.y1.max(r.y2),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/draw.rs"]
mod tests;
