use crate::foundation::core::FrameIndex;

/// Normalized animation progress `clamp(frame / total, 0, 1)`.
///
/// `total == 0` is treated as a finished animation and yields `1.0`.
pub fn progress_ratio(frame: FrameIndex, total_frames: u64) -> f64 {
    if total_frames == 0 {
        return 1.0;
    }
    (frame.0 as f64 / total_frames as f64).clamp(0.0, 1.0)
}

/// Box scale factor at a given progress: half size at the start, full size at the end.
pub fn box_scale(progress: f64) -> f64 {
    0.5 + 0.5 * progress.clamp(0.0, 1.0)
}
