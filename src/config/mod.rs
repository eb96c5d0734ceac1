//! Config file loading.
//!
//! ## Path Resolution
//! 1. Explicit path (`--config`)
//! 2. `CONFIG_OPEN_PATH` environment variable
//! 3. `config.json` in the working directory

mod loader;

pub use loader::{CONFIG_PATH_ENV, ConfigLoader, DEFAULT_CONFIG_PATH};
