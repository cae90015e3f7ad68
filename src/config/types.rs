use serde::{Deserialize, Serialize};

/// A region of interest: pixel-space polygon vertices.
pub type Roi = Vec<[f64; 2]>;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Container runtime invocation, e.g. `docker` or `podman --remote`.
    pub runtime: String,
    /// Detector image reference.
    pub image: String,
    /// Env file handed to the container, relative to the base directory.
    pub env_file: String,
    /// Host output directory, relative to the base directory.
    pub out_dir: String,
    /// Mount destination inside the container.
    pub container_out: String,
    /// Regions of interest the packaged detector was calibrated with.
    pub rois: Vec<Roi>,
    /// Minimum number of frames between two notifications.
    pub min_frame_gap: u32,
    /// Directory depth searched for annotation files.
    pub search_depth: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            runtime: "docker".to_string(),
            image: "kryptoblack/protexai:latest".to_string(),
            env_file: ".env1".to_string(),
            out_dir: "out".to_string(),
            container_out: "/app/out".to_string(),
            rois: default_rois(),
            min_frame_gap: 1,
            search_depth: 4,
        }
    }
}

fn default_rois() -> Vec<Roi> {
    vec![
        vec![[885.0, 85.0], [834.0, 246.0], [1228.0, 260.0], [1139.0, 77.0]],
        vec![[181.0, 288.0], [165.0, 522.0], [612.0, 510.0], [544.0, 246.0]],
    ]
}
