use crate::foundation::error::{ArscanError, ArscanResult};

use kurbo::Rect;

/// Absolute 0-based tick index in animation timeline space.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Half-open frame range `[start, end)` in timeline space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FrameRange {
    /// Inclusive range start.
    pub start: FrameIndex,
    /// Exclusive range end.
    pub end: FrameIndex, // exclusive
}

impl FrameRange {
    /// Create a validated range with `start <= end`.
    pub fn new(start: FrameIndex, end: FrameIndex) -> ArscanResult<Self> {
        if start.0 > end.0 {
            return Err(ArscanError::validation("FrameRange start must be <= end"));
        }
        Ok(Self { start, end })
    }

    /// Number of frames contained in the range.
    pub fn len_frames(self) -> u64 {
        self.end.0.saturating_sub(self.start.0)
    }
}

/// Frames-per-second represented as a rational `num/den`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Fps {
    /// Numerator (frames).
    pub num: u32,
    /// Denominator (seconds), must be non-zero.
    pub den: u32, // must be > 0
}

impl Fps {
    /// Create a validated FPS value.
    pub fn new(num: u32, den: u32) -> ArscanResult<Self> {
        if den == 0 {
            return Err(ArscanError::validation("Fps den must be > 0"));
        }
        if num == 0 {
            return Err(ArscanError::validation("Fps num must be > 0"));
        }
        Ok(Self { num, den })
    }
}

/// Straight 8-bit RGB colour, in the channel order used by every buffer in the crate.
pub type Rgb8 = [u8; 3];

/// Top-left anchor of a placement inside a target buffer, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Placement {
    /// Column of the top-left pixel.
    pub x: u32,
    /// Row of the top-left pixel.
    pub y: u32,
}

impl Placement {
    /// Create a placement at `(x, y)`.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }
}

/// Integer pixel rectangle with inclusive corners, as handed to the drawing primitives.
///
/// Coordinates may lie outside any particular frame; drawing clips them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    /// Left column.
    pub x1: i64,
    /// Top row.
    pub y1: i64,
    /// Right column (inclusive).
    pub x2: i64,
    /// Bottom row (inclusive).
    pub y2: i64,
}

impl PixelRect {
    /// Truncate a floating-point rectangle toward zero on every edge.
    pub fn truncate(r: Rect) -> Self {
        Self {
            x1: r.x0.trunc() as i64,
            y1: r.y0.trunc() as i64,
            x2: r.x1.trunc() as i64,
            y2: r.y1.trunc() as i64,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
