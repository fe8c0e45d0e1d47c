use std::path::Path;

use anyhow::Context as _;

use crate::assets::decode::decode_frames;
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{ArscanError, ArscanResult};
use crate::raster::buffer::RasterFrame;
use crate::raster::composite::resize;

/// Ordered frames of the scanning overlay animation.
///
/// May be shorter than the animation it decorates; ticks past the end simply get no overlay.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverlaySequence {
    frames: Vec<RasterFrame>,
}

impl OverlaySequence {
    /// A sequence with no frames (no scanning effect).
    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap already-decoded frames.
    pub fn new(frames: Vec<RasterFrame>) -> Self {
        Self { frames }
    }

    /// Decode an overlay from memory (GIF animation or still image).
    pub fn decode(bytes: &[u8]) -> ArscanResult<Self> {
        let frames = decode_frames(bytes)?;
        if frames.is_empty() {
            return Err(ArscanError::validation("overlay image has no frames"));
        }
        Ok(Self { frames })
    }

    /// Read and decode an overlay file.
    pub fn load(path: &Path) -> ArscanResult<Self> {
        let bytes =
            std::fs::read(path).with_context(|| format!("read overlay '{}'", path.display()))?;
        let seq = Self::decode(&bytes)?;
        tracing::debug!(path = %path.display(), frames = seq.len(), "loaded overlay");
        Ok(seq)
    }

    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Return `true` when there are no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame shown at tick `idx`, if the sequence is that long.
    pub fn get(&self, idx: FrameIndex) -> Option<&RasterFrame> {
        usize::try_from(idx.0).ok().and_then(|i| self.frames.get(i))
    }

    /// Every frame resampled to `width x height`.
    pub fn resized(&self, width: u32, height: u32) -> ArscanResult<Self> {
        let frames = self
            .frames
            .iter()
            .map(|f| resize(f, width, height))
            .collect::<ArscanResult<Vec<_>>>()?;
        Ok(Self { frames })
    }
}
