use crate::foundation::core::{Fps, FrameIndex};
use crate::foundation::error::{ArscanError, ArscanResult};
use crate::raster::buffer::RasterFrame;

/// Configuration provided to a [`FrameSink`] at the start of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Number of frames the run will push.
    pub total_frames: u64,
    /// Presentation rate hint.
    pub fps: Fps,
}

/// Presentation sink for composited frames.
///
/// Ordering contract: `push_frame` is called once per tick, synchronously, in strictly
/// increasing `FrameIndex` order. The driver blocks on each call, so pacing belongs here.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> ArscanResult<()>;
    /// Push one frame in strictly increasing timeline order.
    fn push_frame(&mut self, idx: FrameIndex, frame: &RasterFrame) -> ArscanResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> ArscanResult<()>;
}

impl<S: FrameSink + ?Sized> FrameSink for &mut S {
    fn begin(&mut self, cfg: SinkConfig) -> ArscanResult<()> {
        (**self).begin(cfg)
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &RasterFrame) -> ArscanResult<()> {
        (**self).push_frame(idx, frame)
    }

    fn end(&mut self) -> ArscanResult<()> {
        (**self).end()
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, RasterFrame)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<&SinkConfig> {
        self.cfg.as_ref()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, RasterFrame)] {
        &self.frames
    }

    /// Return `true` once `end` has been called.
    pub fn is_finished(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> ArscanResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &RasterFrame) -> ArscanResult<()> {
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> ArscanResult<()> {
        self.ended = true;
        Ok(())
    }
}

/// Shared ordering/shape checks for file-backed sinks.
#[derive(Debug, Default)]
pub(crate) struct FrameGate {
    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
}

impl FrameGate {
    pub(crate) fn open(&mut self, cfg: SinkConfig) -> ArscanResult<()> {
        if cfg.width == 0 || cfg.height == 0 {
            return Err(ArscanError::validation("sink width/height must be non-zero"));
        }
        self.cfg = Some(cfg);
        self.last_idx = None;
        Ok(())
    }

    pub(crate) fn check(&mut self, idx: FrameIndex, frame: &RasterFrame) -> ArscanResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| ArscanError::validation("sink not started"))?;
        if let Some(last) = self.last_idx
            && idx.0 <= last.0
        {
            return Err(ArscanError::validation(
                "sink received out-of-order frame index",
            ));
        }
        if frame.width != cfg.width || frame.height != cfg.height {
            return Err(ArscanError::invalid_format(format!(
                "frame size mismatch: got {}x{}, expected {}x{}",
                frame.width, frame.height, cfg.width, cfg.height
            )));
        }
        frame.expect_rgb("sink")?;
        self.last_idx = Some(idx);
        Ok(())
    }

    pub(crate) fn close(&mut self) -> ArscanResult<SinkConfig> {
        self.cfg
            .take()
            .ok_or_else(|| ArscanError::validation("sink not started"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
