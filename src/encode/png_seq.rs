use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameGate, FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::ArscanResult;
use crate::raster::buffer::RasterFrame;

/// Sink that writes each frame as `frame_NNNNN.png` into a directory.
#[derive(Debug)]
pub struct PngSequenceSink {
    dir: PathBuf,
    gate: FrameGate,
    written: u64,
}

impl PngSequenceSink {
    /// Write frames into `dir` (created on `begin`).
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            gate: FrameGate::default(),
            written: 0,
        }
    }

    /// Path a given frame index is written to.
    pub fn frame_path(&self, idx: FrameIndex) -> PathBuf {
        frame_path(&self.dir, idx)
    }

    /// Frames written so far.
    pub fn written(&self) -> u64 {
        self.written
    }
}

fn frame_path(dir: &Path, idx: FrameIndex) -> PathBuf {
    dir.join(format!("frame_{:05}.png", idx.0))
}

impl FrameSink for PngSequenceSink {
    fn begin(&mut self, cfg: SinkConfig) -> ArscanResult<()> {
        self.gate.open(cfg)?;
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("create output dir '{}'", self.dir.display()))?;
        self.written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &RasterFrame) -> ArscanResult<()> {
        self.gate.check(idx, frame)?;
        let path = frame_path(&self.dir, idx);
        image::save_buffer_with_format(
            &path,
            &frame.data,
            frame.width,
            frame.height,
            image::ColorType::Rgb8,
            image::ImageFormat::Png,
        )
        .with_context(|| format!("write png '{}'", path.display()))?;
        self.written += 1;
        Ok(())
    }

    fn end(&mut self) -> ArscanResult<()> {
        let cfg = self.gate.close()?;
        tracing::info!(
            dir = %self.dir.display(),
            frames = self.written,
            expected = cfg.total_frames,
            "png sequence written"
        );
        Ok(())
    }
}
