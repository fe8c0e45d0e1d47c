//! arscan renders a scan-and-reveal animation of object detections over a still image.
//!
//! A scanning overlay plays over the image, then every detected object's bounding box grows
//! from half size to full size while its label is typed out above it.
//!
//! # Pipeline overview
//!
//! 1. **Init**: load the base image, the overlay frames and the detector output once
//!    ([`load_base_image`], [`OverlaySequence::load`], [`DetectionReader`]).
//! 2. **Tick**: for each frame index, clone the base, composite the overlay frame, draw each
//!    animated box and revealed label ([`AnimationDriver::render_tick`]).
//! 3. **Present**: push every frame, in order, into a [`FrameSink`] (PNG sequence, MP4 through
//!    the system `ffmpeg`, or memory).
//!
//! Ticks are pure functions of the frame index: the base image and the detections are
//! read-only for the whole run, and each tick owns its working buffer.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod assets;
mod detect;
mod driver;
mod encode;
mod foundation;
mod raster;

pub use animation::boxes::{BoxStyle, animate_box, animated_rect};
pub use animation::progress::{box_scale, progress_ratio};
pub use animation::reveal::{LabelStyle, draw_label, reveal, reveal_len};
pub use assets::decode::{decode_frames, decode_image, load_base_image};
pub use assets::overlay::OverlaySequence;
pub use detect::ingest::{CategoryTable, DetectionReader};
pub use detect::model::{BoundingBox, Detection, DetectionSet};
pub use driver::config::{AnimationConfig, MAX_BOX_STROKE, MAX_LABEL_SCALE};
pub use driver::session::{AnimationDriver, DriverState, DriverWarning, RunReport};
pub use driver::threading::RenderThreading;
pub use encode::ffmpeg::{FfmpegSink, FfmpegSinkOpts, ensure_parent_dir, is_ffmpeg_on_path};
pub use encode::png_seq::PngSequenceSink;
pub use encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use foundation::core::{Fps, FrameIndex, FrameRange, PixelRect, Placement, Rgb8};
pub use foundation::error::{ArscanError, ArscanResult};
pub use raster::buffer::{RGB_CHANNELS, RasterFrame};
pub use raster::composite::{composite, composite_in_place, resize};
pub use raster::draw::stroke_rect;
pub use raster::glyphs::{draw_text, measure_text};
