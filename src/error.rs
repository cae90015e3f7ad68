use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures while preparing or launching the detector container.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("missing {}: copy .env1.example to {} and fill in the values", path.display(), path.display())]
    MissingEnvFile { path: PathBuf },

    #[error("failed to create output directory {}: {source}", path.display())]
    CreateOutDir { path: PathBuf, source: io::Error },

    #[error("failed to resolve absolute path for {}: {source}", path.display())]
    Resolve { path: PathBuf, source: io::Error },

    #[error("failed to invoke `{runtime}` (is it installed and on PATH?): {source}")]
    Spawn { runtime: String, source: io::Error },
}

/// Failures while analyzing an annotation stream.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no annotation file found under {}", root.display())]
    NoAnnotations { root: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode report: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write report {}: {source}", path.display())]
    WriteReport { path: PathBuf, source: io::Error },

    #[error("SLACK_CHANNEL must be set when SLACK_TOKEN is present")]
    MissingChannel,

    #[error("slack request failed: {0}")]
    Slack(#[from] reqwest::Error),

    #[error("slack rejected the message: {0}")]
    SlackApi(String),
}
