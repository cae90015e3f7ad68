use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// One camera's detection stream, as produced by the detector image.
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotationFile {
    pub cam_name: String,
    pub frames: Vec<Frame>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Frame {
    pub frame_num: u32,
    /// Nanoseconds since stream origin.
    pub timestamp: u64,
    pub frame_width: u32,
    pub frame_height: u32,
    pub detections: Vec<Detection>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Detection {
    pub class: ObjectClass,
    pub bbox: BBox,
}

/// Fractional bounding box relative to the frame dimensions.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct BBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Detector classes the rules care about. Anything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectClass {
    Car,
    Person,
    Truck,
    #[serde(other)]
    Other,
}

/// Read and parse an annotation file.
pub fn load(path: &Path) -> Result<AnnotationFile, AnalysisError> {
    let raw = std::fs::read_to_string(path).map_err(|source| AnalysisError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| AnalysisError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
