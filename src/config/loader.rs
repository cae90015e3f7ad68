use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::types::{Config, Roi};

const CONFIG_FILE: &str = ".protexai.yml";

/// Optional overrides read from [`CONFIG_FILE`]. Every field the file leaves
/// out keeps its default.
#[derive(Debug, Deserialize, Default)]
struct RawConfig {
    runtime: Option<String>,
    image: Option<String>,
    env_file: Option<String>,
    out_dir: Option<String>,
    container_out: Option<String>,
    rois: Option<Vec<Roi>>,
    min_frame_gap: Option<u32>,
    search_depth: Option<usize>,
}

/// Load config from a `.protexai.yml` file in the given directory. A missing
/// file yields pure defaults; a malformed file is an error.
pub fn load(dir: &Path) -> Result<Config> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(Config::default());
    }
    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let raw: RawConfig = serde_yaml::from_str(&contents)
        .with_context(|| format!("invalid config in {}", path.display()))?;

    let mut cfg = Config::default();
    if let Some(runtime) = raw.runtime {
        cfg.runtime = runtime;
    }
    if let Some(image) = raw.image {
        cfg.image = image;
    }
    if let Some(env_file) = raw.env_file {
        cfg.env_file = env_file;
    }
    if let Some(out_dir) = raw.out_dir {
        cfg.out_dir = out_dir;
    }
    if let Some(container_out) = raw.container_out {
        cfg.container_out = container_out;
    }
    if let Some(rois) = raw.rois {
        cfg.rois = rois;
    }
    if let Some(min_frame_gap) = raw.min_frame_gap {
        cfg.min_frame_gap = min_frame_gap;
    }
    if let Some(search_depth) = raw.search_depth {
        cfg.search_depth = search_depth;
    }
    Ok(cfg)
}
