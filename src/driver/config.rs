use std::path::Path;

use anyhow::Context as _;

use crate::animation::boxes::BoxStyle;
use crate::animation::reveal::LabelStyle;
use crate::foundation::core::{Fps, Placement, Rgb8};
use crate::foundation::error::{ArscanError, ArscanResult};

/// Largest accepted `box_stroke`.
pub const MAX_BOX_STROKE: u32 = 256;
/// Largest accepted `label_scale`.
pub const MAX_LABEL_SCALE: u32 = 64;

/// Caller-tunable constants of one animation run.
///
/// Everything else (interpolation, reveal formula, per-tick ordering) is fixed. Every field has
/// a default, so a JSON file only needs the keys it changes.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnimationConfig {
    /// Ticks per run.
    pub total_frames: u64,
    /// Presentation rate handed to sinks.
    pub fps: u32,
    /// Top-left corner of the scanning overlay, `[x, y]`.
    pub overlay_anchor: [u32; 2],
    /// Footprint every overlay frame is resized to, `[width, height]`.
    pub overlay_size: [u32; 2],
    /// Box outline colour (RGB).
    pub box_color: Rgb8,
    /// Box outline width in pixels.
    pub box_stroke: u32,
    /// Gap between a label's baseline and the top of its original box.
    pub label_offset: u32,
    /// Label colour (RGB).
    pub label_color: Rgb8,
    /// Integer glyph scale for labels.
    pub label_scale: u32,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            total_frames: 240,
            fps: 60,
            overlay_anchor: [50, 50],
            overlay_size: [100, 100],
            box_color: BoxStyle::default().color,
            box_stroke: BoxStyle::default().stroke,
            label_offset: LabelStyle::default().offset,
            label_color: LabelStyle::default().color,
            label_scale: LabelStyle::default().scale,
        }
    }
}

impl AnimationConfig {
    /// Parse a config from JSON text and validate it.
    pub fn from_json_str(json: &str) -> ArscanResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| ArscanError::serde(format!("animation config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_path(path: &Path) -> ArscanResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Reject values the pipeline cannot run with.
    pub fn validate(&self) -> ArscanResult<()> {
        if self.total_frames == 0 {
            return Err(ArscanError::validation("total_frames must be > 0"));
        }
        if self.fps == 0 {
            return Err(ArscanError::validation("fps must be > 0"));
        }
        if self.overlay_size[0] == 0 || self.overlay_size[1] == 0 {
            return Err(ArscanError::validation("overlay_size must be non-zero"));
        }
        if !(1..=MAX_BOX_STROKE).contains(&self.box_stroke) {
            return Err(ArscanError::validation(format!(
                "box_stroke must be in 1..={MAX_BOX_STROKE}"
            )));
        }
        if !(1..=MAX_LABEL_SCALE).contains(&self.label_scale) {
            return Err(ArscanError::validation(format!(
                "label_scale must be in 1..={MAX_LABEL_SCALE}"
            )));
        }
        Ok(())
    }

    /// Overlay anchor as a placement.
    pub fn overlay_placement(&self) -> Placement {
        Placement::new(self.overlay_anchor[0], self.overlay_anchor[1])
    }

    /// Presentation rate as a validated [`Fps`].
    pub fn fps(&self) -> ArscanResult<Fps> {
        Fps::new(self.fps, 1)
    }

    /// Box outline style.
    pub fn box_style(&self) -> BoxStyle {
        BoxStyle {
            color: self.box_color,
            stroke: self.box_stroke,
        }
    }

    /// Label style.
    pub fn label_style(&self) -> LabelStyle {
        LabelStyle {
            offset: self.label_offset,
            color: self.label_color,
            scale: self.label_scale,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/driver/config.rs"]
mod tests;
