use std::process::{Command, ExitStatus};

use anyhow::{Result, bail};

use super::types::{ContainerCommand, RunStatus};
use crate::error::LaunchError;

/// Seam over the container runtime CLI so callers can be tested against a
/// recording fake instead of a live daemon.
pub trait ContainerRuntime {
    fn run(&self, cmd: &ContainerCommand) -> Result<RunStatus, LaunchError>;
}

/// Invokes the runtime binary in the foreground with inherited stdio and
/// waits for it to exit. No timeout, no cancellation: once the container is
/// up, the runtime owns its lifecycle and terminal signals reach the child
/// through the shared process group.
#[derive(Debug, Clone)]
pub struct CliRuntime {
    program: String,
    prefix: Vec<String>,
}

impl CliRuntime {
    /// Parse a configured runtime string such as `"docker"` or
    /// `"podman --remote"` into a program and leading arguments.
    pub fn from_invocation(invocation: &str) -> Result<Self> {
        let mut words = shell_words::split(invocation)?;
        if words.is_empty() {
            bail!("runtime must name a program");
        }
        let program = words.remove(0);
        Ok(Self {
            program,
            prefix: words,
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl ContainerRuntime for CliRuntime {
    fn run(&self, cmd: &ContainerCommand) -> Result<RunStatus, LaunchError> {
        let status = Command::new(&self.program)
            .args(&self.prefix)
            .args(&cmd.args)
            .status()
            .map_err(|source| LaunchError::Spawn {
                runtime: self.program.clone(),
                source,
            })?;
        Ok(RunStatus {
            exit_code: exit_code(status),
        })
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|signo| 128 + signo))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
