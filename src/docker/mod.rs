// Container runtime plumbing: invocation types, the CLI seam, daemon preflight.

pub mod engine;
pub mod runtime;
pub mod types;

pub use engine::ensure_available;
pub use runtime::{CliRuntime, ContainerRuntime};
pub use types::{ContainerCommand, RunStatus};
