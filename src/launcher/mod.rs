// Precondition checks and container invocation for the detector image.

pub mod command;
pub mod preflight;

pub use command::run_command;
pub use preflight::{Preflight, check, ensure_out_dir};

use std::path::Path;

use tracing::{debug, info};

use crate::config::Config;
use crate::docker::ContainerRuntime;
use crate::error::LaunchError;

/// Validate the filesystem preconditions under `base`, then run the detector
/// image in the foreground. Returns the container's exit code.
pub fn launch(
    base: &Path,
    cfg: &Config,
    runtime: &dyn ContainerRuntime,
) -> Result<i32, LaunchError> {
    let pre = preflight::check(base, cfg)?;
    let cmd = command::run_command(cfg, &pre);

    info!("launching {}", cfg.image);
    debug!(args = ?cmd.args, "container invocation");

    let status = runtime.run(&cmd)?;
    Ok(status.exit_code)
}
