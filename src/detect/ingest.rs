use std::collections::BTreeSet;
use std::path::Path;

use anyhow::Context as _;

use crate::detect::model::{BoundingBox, Detection, DetectionSet};
use crate::foundation::error::{ArscanError, ArscanResult};

/// Class-id to name table, as shipped next to the detector.
///
/// JSON shape: `{"COCO_INSTANCE_CATEGORY_NAMES": [...], "filtered_list": [...]}`.
/// `filtered_list` is optional; when present it becomes the default allow-list.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize)]
pub struct CategoryTable {
    /// Names indexed by class id.
    #[serde(rename = "COCO_INSTANCE_CATEGORY_NAMES", alias = "categories")]
    pub names: Vec<String>,
    /// Labels worth animating; everything else is dropped.
    #[serde(default, rename = "filtered_list", alias = "allowed")]
    pub allowed: Option<Vec<String>>,
}

impl CategoryTable {
    /// Parse a table from JSON text.
    pub fn from_json_str(json: &str) -> ArscanResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| ArscanError::serde(format!("category table: {e}")))
    }

    /// Read and parse a table from a JSON file.
    pub fn from_json_path(path: &Path) -> ArscanResult<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read category table '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Name for `id`, if the table has one.
    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawLabel {
    Name(String),
    ClassId(usize),
}

#[derive(serde::Deserialize)]
struct RawRow {
    label: RawLabel,
    #[serde(alias = "box")]
    bbox: [f64; 4],
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawDetections {
    Columnar {
        labels: Vec<RawLabel>,
        #[serde(alias = "boxes")]
        bbox: Vec<[f64; 4]>,
    },
    Rows(Vec<RawRow>),
}

/// Turns detector output into a validated [`DetectionSet`].
///
/// Accepts the columnar shape the detector emits (`{"labels": [...], "bbox": [[x1,y1,x2,y2]]}`)
/// and a row-wise list (`[{"label": ..., "bbox": [...]}]`). Labels may be names or class ids;
/// ids need a [`CategoryTable`]. Fractional coordinates are truncated toward zero.
#[derive(Clone, Debug, Default)]
pub struct DetectionReader {
    categories: Option<CategoryTable>,
    allow: Option<BTreeSet<String>>,
}

impl DetectionReader {
    /// Reader with no category table and no filtering.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve class ids through `table`. Its `filtered_list`, if any, becomes the allow-list
    /// unless one was set explicitly.
    pub fn with_categories(mut self, table: CategoryTable) -> Self {
        if self.allow.is_none()
            && let Some(allowed) = table.allowed.as_ref()
        {
            self.allow = Some(allowed.iter().cloned().collect());
        }
        self.categories = Some(table);
        self
    }

    /// Keep only detections whose label is in `labels`.
    pub fn with_allow_list<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Parse detector output from JSON text.
    pub fn parse_str(&self, json: &str) -> ArscanResult<DetectionSet> {
        let raw: RawDetections = serde_json::from_str(json)
            .map_err(|e| ArscanError::serde(format!("detections: {e}")))?;

        let rows: Vec<(RawLabel, [f64; 4])> = match raw {
            RawDetections::Columnar { labels, bbox } => {
                if labels.len() != bbox.len() {
                    return Err(ArscanError::validation(format!(
                        "detections have {} labels but {} boxes",
                        labels.len(),
                        bbox.len()
                    )));
                }
                labels.into_iter().zip(bbox).collect()
            }
            RawDetections::Rows(rows) => rows.into_iter().map(|r| (r.label, r.bbox)).collect(),
        };

        let mut out = Vec::with_capacity(rows.len());
        for (i, (label, coords)) in rows.into_iter().enumerate() {
            let label = self.resolve_label(i, label)?;
            let bbox = to_bbox(i, coords)?;
            if let Some(allow) = self.allow.as_ref()
                && !allow.contains(&label)
            {
                tracing::debug!(index = i, %label, "dropping detection not in allow-list");
                continue;
            }
            out.push(Detection::new(label, bbox));
        }
        Ok(DetectionSet::new(out))
    }

    /// Read and parse detector output from a JSON file.
    pub fn read_path(&self, path: &Path) -> ArscanResult<DetectionSet> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read detections '{}'", path.display()))?;
        let set = self.parse_str(&text)?;
        tracing::debug!(path = %path.display(), count = set.len(), "loaded detections");
        Ok(set)
    }

    fn resolve_label(&self, index: usize, label: RawLabel) -> ArscanResult<String> {
        match label {
            RawLabel::Name(name) => Ok(name),
            RawLabel::ClassId(id) => {
                let table = self.categories.as_ref().ok_or_else(|| {
                    ArscanError::validation(format!(
                        "detection {index} uses class id {id} but no category table was given"
                    ))
                })?;
                table.name(id).map(str::to_owned).ok_or_else(|| {
                    ArscanError::validation(format!(
                        "detection {index}: class id {id} is outside the category table ({} names)",
                        table.names.len()
                    ))
                })
            }
        }
    }
}

fn to_bbox(index: usize, c: [f64; 4]) -> ArscanResult<BoundingBox> {
    if c.iter().any(|v| !v.is_finite() || v.abs() > f64::from(i32::MAX)) {
        return Err(ArscanError::validation(format!(
            "detection {index}: box coordinates must be finite 32-bit values"
        )));
    }
    BoundingBox::new(c[0] as i32, c[1] as i32, c[2] as i32, c[3] as i32)
        .map_err(|e| match e {
            ArscanError::Validation(msg) => {
                ArscanError::validation(format!("detection {index}: {msg}"))
            }
            other => other,
        })
}

#[cfg(test)]
#[path = "../../tests/unit/detect/ingest.rs"]
mod tests;
