use kurbo::Rect;

use crate::foundation::error::{ArscanError, ArscanResult};

/// Axis-aligned box in pixel coordinates with `x1 < x2` and `y1 < y2`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct BoundingBox {
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
}

impl BoundingBox {
    /// Create a validated box.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> ArscanResult<Self> {
        if x1 >= x2 || y1 >= y2 {
            return Err(ArscanError::validation(format!(
                "bounding box ({x1}, {y1}, {x2}, {y2}) must satisfy x1 < x2 and y1 < y2"
            )));
        }
        Ok(Self { x1, y1, x2, y2 })
    }

    /// Left edge.
    pub fn x1(&self) -> i32 {
        self.x1
    }

    /// Top edge.
    pub fn y1(&self) -> i32 {
        self.y1
    }

    /// Right edge.
    pub fn x2(&self) -> i32 {
        self.x2
    }

    /// Bottom edge.
    pub fn y2(&self) -> i32 {
        self.y2
    }

    /// The box as a floating-point rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(
            f64::from(self.x1),
            f64::from(self.y1),
            f64::from(self.x2),
            f64::from(self.y2),
        )
    }
}

/// One labelled box produced by an external recognizer.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Detection {
    /// Human-readable class label.
    pub label: String,
    /// Box in source-image pixel coordinates.
    pub bbox: BoundingBox,
}

impl Detection {
    /// Create a detection.
    pub fn new(label: impl Into<String>, bbox: BoundingBox) -> Self {
        Self {
            label: label.into(),
            bbox,
        }
    }
}

/// Ordered, immutable detection list for one image.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DetectionSet {
    items: Vec<Detection>,
}

impl DetectionSet {
    /// Freeze a list of detections, keeping their order.
    pub fn new(items: Vec<Detection>) -> Self {
        Self { items }
    }

    /// Number of detections.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Return `true` when nothing was detected.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in list order.
    pub fn iter(&self) -> std::slice::Iter<'_, Detection> {
        self.items.iter()
    }

    /// Borrow as a slice.
    pub fn as_slice(&self) -> &[Detection] {
        &self.items
    }
}

impl FromIterator<Detection> for DetectionSet {
    fn from_iter<I: IntoIterator<Item = Detection>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DetectionSet {
    type Item = &'a Detection;
    type IntoIter = std::slice::Iter<'a, Detection>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
