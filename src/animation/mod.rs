/// Growing bounding-box outlines.
pub mod boxes;
/// Progress ratio and box scale curve.
pub mod progress;
/// Progressive label reveal.
pub mod reveal;
