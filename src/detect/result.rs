use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Box location normalized to 0..1 relative to image dimensions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// One object-detection prediction from the vision service.
///
/// Field names follow the SDK objects (`tag_name`, `bounding_box`); the REST
/// payload's camelCase names are accepted as aliases.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    #[serde(alias = "tagName")]
    pub tag_name: String,
    pub probability: f64,
    #[serde(alias = "boundingBox")]
    pub bounding_box: BoundingBox,
}

impl Detection {
    pub fn new(tag_name: impl Into<String>, probability: f64, bounding_box: BoundingBox) -> Self {
        Self {
            tag_name: tag_name.into(),
            probability,
            bounding_box,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DetectionPayload {
    Bare(Vec<Detection>),
    Wrapped { predictions: Vec<Detection> },
}

/// Parse detections from a JSON array or a `{"predictions": [...]}` response body.
pub fn parse_detections(json: &str) -> Result<Vec<Detection>> {
    let payload: DetectionPayload =
        serde_json::from_str(json).context("parse detection payload")?;
    Ok(match payload {
        DetectionPayload::Bare(detections) => detections,
        DetectionPayload::Wrapped { predictions } => predictions,
    })
}
