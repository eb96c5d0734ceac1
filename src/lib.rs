//! Config Open Library
//!
//! Opens a configuration file, guarantees the handle is released on every
//! exit path, and reports failures with the original cause attached.

pub mod cli;
pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod resource;

pub use config::{ConfigLoader, DEFAULT_CONFIG_PATH};
pub use error::{ConfigError, ErrorCode, ErrorReport};
pub use resource::{FsOpener, Opener, Resource, ScopedHandle};
