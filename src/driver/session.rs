use rayon::prelude::*;

use crate::animation::boxes::animate_box;
use crate::animation::reveal::draw_label;
use crate::assets::overlay::OverlaySequence;
use crate::detect::model::DetectionSet;
use crate::driver::config::AnimationConfig;
use crate::driver::threading::RenderThreading;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::{FrameIndex, FrameRange};
use crate::foundation::error::{ArscanError, ArscanResult};
use crate::raster::buffer::RasterFrame;
use crate::raster::composite::composite_in_place;

/// Where the driver is in its single forward pass.
///
/// The `Init` state has no variant: it is [`AnimationDriver::new`], which loads and checks the
/// inputs and yields a driver in `Running(FrameIndex(0))`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// The next tick to render.
    Running(FrameIndex),
    /// Every tick has been rendered.
    Done,
}

/// Non-fatal conditions noticed while setting up a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DriverWarning {
    /// The detection list is empty; only the scanning overlay will be animated.
    #[error("no objects detected; animating the scanning overlay only")]
    NoDetections,
}

/// Outcome of a completed run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Frames handed to the sink during this call.
    pub frames_emitted: u64,
    /// Warnings raised at setup.
    pub warnings: Vec<DriverWarning>,
}

/// Drives one animation run: holds the read-only inputs and the frame counter.
///
/// Construction is the `Init` state: inputs are captured once and never change afterwards.
/// Every tick starts from a private clone of the base image, so ticks never observe each
/// other's drawing.
#[derive(Debug)]
pub struct AnimationDriver {
    base: RasterFrame,
    overlay: OverlaySequence,
    detections: DetectionSet,
    config: AnimationConfig,
    state: DriverState,
    warnings: Vec<DriverWarning>,
}

impl AnimationDriver {
    /// Capture the inputs of a run.
    ///
    /// Overlay frames are resized to `config.overlay_size` here, once. An empty detection list
    /// is not an error: it is recorded as [`DriverWarning::NoDetections`].
    #[tracing::instrument(
        skip_all,
        fields(
            width = base.width,
            height = base.height,
            detections = detections.len(),
            overlay_frames = overlay.len()
        )
    )]
    pub fn new(
        base: RasterFrame,
        overlay: OverlaySequence,
        detections: DetectionSet,
        config: AnimationConfig,
    ) -> ArscanResult<Self> {
        config.validate()?;
        base.expect_rgb("base image")?;
        let [ow, oh] = config.overlay_size;
        let overlay = overlay.resized(ow, oh)?;

        let mut warnings = Vec::new();
        if detections.is_empty() {
            tracing::warn!("{}", DriverWarning::NoDetections);
            warnings.push(DriverWarning::NoDetections);
        }

        Ok(Self {
            base,
            overlay,
            detections,
            config,
            state: DriverState::Running(FrameIndex(0)),
            warnings,
        })
    }

    /// Current state.
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Warnings raised at setup.
    pub fn warnings(&self) -> &[DriverWarning] {
        &self.warnings
    }

    /// The pristine base image.
    pub fn base(&self) -> &RasterFrame {
        &self.base
    }

    /// Detections captured for this run.
    pub fn detections(&self) -> &DetectionSet {
        &self.detections
    }

    /// Configuration of this run.
    pub fn config(&self) -> &AnimationConfig {
        &self.config
    }

    /// Ticks in the run.
    pub fn total_frames(&self) -> u64 {
        self.config.total_frames
    }

    /// Sink configuration matching this run's output frames.
    pub fn sink_config(&self) -> ArscanResult<SinkConfig> {
        Ok(SinkConfig {
            width: self.base.width,
            height: self.base.height,
            total_frames: self.config.total_frames,
            fps: self.config.fps()?,
        })
    }

    /// Render tick `frame` into a new buffer. Does not change driver state.
    ///
    /// Order: pristine copy of the base, scanning overlay (while the sequence lasts), then for
    /// each detection in list order its animated box followed by its revealed label.
    pub fn render_tick(&self, frame: FrameIndex) -> ArscanResult<RasterFrame> {
        let total = self.config.total_frames;
        if frame.0 >= total {
            return Err(ArscanError::validation(format!(
                "tick {} is outside the animation (total_frames = {total})",
                frame.0
            )));
        }

        let mut canvas = self.base.clone();

        if let Some(overlay) = self.overlay.get(frame) {
            composite_in_place(&mut canvas, overlay, self.config.overlay_placement())?;
        }

        let box_style = self.config.box_style();
        let label_style = self.config.label_style();
        for det in &self.detections {
            animate_box(&mut canvas, frame, &det.bbox, total, box_style);
            let anchor = (
                i64::from(det.bbox.x1()),
                i64::from(det.bbox.y1()) - i64::from(label_style.offset),
            );
            draw_label(&mut canvas, &det.label, frame, total, anchor, label_style);
        }

        Ok(canvas)
    }

    /// Render the current tick and advance.
    ///
    /// Returns `Ok(None)` once the run is done. On error the counter stays put, so the failing
    /// tick is reported again on the next call.
    pub fn tick(&mut self) -> ArscanResult<Option<(FrameIndex, RasterFrame)>> {
        let DriverState::Running(frame) = self.state else {
            return Ok(None);
        };
        let out = self.render_tick(frame)?;
        tracing::debug!(frame = frame.0, "rendered tick");
        self.advance(frame);
        Ok(Some((frame, out)))
    }

    /// Run every remaining tick sequentially, pushing each frame into `sink`.
    pub fn run<S: FrameSink + ?Sized>(&mut self, sink: &mut S) -> ArscanResult<RunReport> {
        self.run_with_threading(sink, &RenderThreading::default())
    }

    /// Run every remaining tick, optionally generating pixels in parallel.
    ///
    /// Frames reach the sink strictly in tick order either way. The first failing tick aborts
    /// the run; frames before it have already been pushed.
    #[tracing::instrument(skip_all, fields(parallel = threading.parallel))]
    pub fn run_with_threading<S: FrameSink + ?Sized>(
        &mut self,
        sink: &mut S,
        threading: &RenderThreading,
    ) -> ArscanResult<RunReport> {
        let DriverState::Running(start) = self.state else {
            return Ok(RunReport {
                frames_emitted: 0,
                warnings: self.warnings.clone(),
            });
        };
        let remaining = FrameRange::new(start, FrameIndex(self.config.total_frames))?;
        tracing::info!(
            start = start.0,
            frames = remaining.len_frames(),
            total_frames = self.config.total_frames,
            detections = self.detections.len(),
            "animation run started"
        );

        sink.begin(self.sink_config()?)?;
        let mut emitted = 0u64;

        if threading.parallel {
            let pool = threading.build_pool()?;
            let chunk_size = threading.normalized_chunk_size();
            let mut chunk_start = remaining.start.0;
            while chunk_start < remaining.end.0 {
                let chunk_end = (chunk_start + chunk_size).min(remaining.end.0);
                let rendered = pool.install(|| {
                    (chunk_start..chunk_end)
                        .into_par_iter()
                        .map(|f| self.render_tick(FrameIndex(f)))
                        .collect::<Vec<_>>()
                });
                for (f, frame) in (chunk_start..chunk_end).zip(rendered) {
                    let frame = frame?;
                    sink.push_frame(FrameIndex(f), &frame)?;
                    self.advance(FrameIndex(f));
                    emitted += 1;
                }
                chunk_start = chunk_end;
            }
        } else {
            while let Some((idx, frame)) = self.tick()? {
                sink.push_frame(idx, &frame)?;
                emitted += 1;
            }
        }

        sink.end()?;
        tracing::info!(frames = emitted, "animation run finished");
        Ok(RunReport {
            frames_emitted: emitted,
            warnings: self.warnings.clone(),
        })
    }

    fn advance(&mut self, rendered: FrameIndex) {
        let next = rendered.0 + 1;
        self.state = if next >= self.config.total_frames {
            DriverState::Done
        } else {
            DriverState::Running(FrameIndex(next))
        };
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/session.rs"]
mod tests;
