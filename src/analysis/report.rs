use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// Summary written next to the detector's own artifacts in the output
/// directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventReport {
    pub cam_name: String,
    pub rule: String,
    pub summary: Summary,
    pub events: Vec<EventRecord>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Summary {
    pub frames: usize,
    pub positives: usize,
    pub notified: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventRecord {
    pub frame_num: u32,
    pub timestamp: u64,
    pub roi: usize,
    pub notified: bool,
}

/// Serialize the report as pretty JSON into the given file.
pub fn write(path: &Path, report: &EventReport) -> Result<(), AnalysisError> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json).map_err(|source| AnalysisError::WriteReport {
        path: path.to_path_buf(),
        source,
    })
}
