pub mod loader;
pub mod types;

pub use loader::load;
pub use types::{Config, Roi};
