use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::AnalysisError;

/// Locate the annotation stream under `root`: the well-known name first,
/// then a bounded walk for JSON files that look like detection streams.
pub fn find_annotations(root: &Path, max_depth: usize) -> Result<PathBuf, AnalysisError> {
    let well_known = root.join("annotations.json");
    if well_known.is_file() {
        return Ok(well_known);
    }

    let mut matches = Vec::new();
    let walker = WalkDir::new(root)
        .max_depth(max_depth)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !should_skip(e));

    for entry in walker.filter_map(Result::ok) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if is_json(path) && is_annotation_stream(path) {
            matches.push(path.to_path_buf());
        }
    }

    matches.sort();
    matches
        .into_iter()
        .next()
        .ok_or_else(|| AnalysisError::NoAnnotations {
            root: root.to_path_buf(),
        })
}

fn is_json(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("json" | "JSON")
    )
}

/// Sniff the file content: a detection stream is a JSON object carrying
/// `cam_name` and `frames`.
fn is_annotation_stream(path: &Path) -> bool {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(_) => return false,
    };
    let doc: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(_) => return false,
    };
    match doc {
        serde_json::Value::Object(map) => map.contains_key("cam_name") && map.contains_key("frames"),
        _ => false,
    }
}

fn should_skip(entry: &walkdir::DirEntry) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return false;
    }
    matches!(
        entry.file_name().to_str().unwrap_or_default(),
        ".git" | "out" | "target" | "node_modules"
    )
}
