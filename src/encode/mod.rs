//! Presentation sinks.
//!
//! Sinks consume composited frames in tick order and are driven by `AnimationDriver::run`.

/// `ffmpeg`-based sink (MP4 output via system `ffmpeg`).
pub mod ffmpeg;
/// PNG frame-sequence sink.
pub mod png_seq;
/// Generic frame sink trait and the in-memory sink.
pub mod sink;
