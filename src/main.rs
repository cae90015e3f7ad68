use anyhow::{Context, Result};

use protexai::config;
use protexai::docker::{self, CliRuntime};
use protexai::launcher;
use protexai::logging;

fn main() {
    logging::init();
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(1);
        }
    }
}

/// Resolve the base directory, check preconditions, and run the detector
/// image in the foreground. The container's exit code becomes ours.
fn run() -> Result<i32> {
    let base = std::env::current_dir().context("failed to resolve working directory")?;
    let cfg = config::load(&base)?;

    let runtime = CliRuntime::from_invocation(&cfg.runtime)?;
    docker::ensure_available(runtime.program())?;

    let code = launcher::launch(&base, &cfg, &runtime)?;
    Ok(code)
}
