use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::error::LaunchError;

/// Resolved filesystem preconditions for a launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preflight {
    /// Absolute path of the env file handed to the runtime.
    pub env_file: PathBuf,
    /// Absolute path of the host output directory.
    pub out_dir: PathBuf,
}

/// Check the env file and the output directory under `base`, creating the
/// directory when absent, and resolve both to absolute paths.
pub fn check(base: &Path, cfg: &Config) -> Result<Preflight, LaunchError> {
    let env_file = require_env_file(base, &cfg.env_file)?;
    let out_dir = ensure_out_dir(base, &cfg.out_dir)?;
    Ok(Preflight { env_file, out_dir })
}

/// The env file carries the container's credentials and must already exist.
fn require_env_file(base: &Path, name: &str) -> Result<PathBuf, LaunchError> {
    let path = base.join(name);
    if !path.is_file() {
        return Err(LaunchError::MissingEnvFile { path });
    }
    resolve(path)
}

/// Create the output directory when missing. An existing directory is left
/// untouched.
pub fn ensure_out_dir(base: &Path, name: &str) -> Result<PathBuf, LaunchError> {
    let path = base.join(name);
    if !path.is_dir() {
        fs::create_dir(&path).map_err(|source| LaunchError::CreateOutDir {
            path: path.clone(),
            source,
        })?;
        info!("created output directory {}", path.display());
    }
    resolve(path)
}

// Bind-mount sources must be absolute; canonicalize also strips symlinks so
// the runtime sees the real host path.
fn resolve(path: PathBuf) -> Result<PathBuf, LaunchError> {
    fs::canonicalize(&path).map_err(|source| LaunchError::Resolve { path, source })
}
