//! Config loader with scoped handle release.

use crate::error::{ConfigError, Result};
use crate::resource::{FsOpener, Opener, ScopedHandle};
use std::path::{Path, PathBuf};

/// Config file opened when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

/// Environment variable naming the config file.
pub const CONFIG_PATH_ENV: &str = "CONFIG_OPEN_PATH";

/// Opens config files and releases them before returning.
///
/// The loader itself never retries or logs; failures are wrapped with
/// context and handed back to the caller.
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader<O = FsOpener> {
    opener: O,
}

impl ConfigLoader {
    /// Create a loader backed by the local filesystem.
    pub fn new() -> Self {
        Self { opener: FsOpener }
    }

    /// Resolve the config path from an explicit value, the environment, or
    /// the default.
    pub fn resolve_path(explicit: Option<&str>) -> PathBuf {
        Self::resolve_path_with(explicit, std::env::var(CONFIG_PATH_ENV).ok())
    }

    /// Same as [`ConfigLoader::resolve_path`] with the environment value
    /// passed in. Empty values are treated as unset.
    pub fn resolve_path_with(explicit: Option<&str>, env_value: Option<String>) -> PathBuf {
        if let Some(path) = explicit.filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }

        if let Some(path) = env_value.filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }

        PathBuf::from(DEFAULT_CONFIG_PATH)
    }
}

impl<O: Opener> ConfigLoader<O> {
    /// Create a loader using a custom resource source.
    pub fn with_opener(opener: O) -> Self {
        Self { opener }
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }

    /// Open the config file at `path` and release it.
    ///
    /// Empty or malformed paths are passed through to the opener, so they
    /// fail with whatever the platform reports.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let handle = self
            .opener
            .open(path)
            .map_err(|source| ConfigError::open(path, source))?;
        let _handle = ScopedHandle::new(handle);

        Ok(())
    }

    /// Open and release [`DEFAULT_CONFIG_PATH`].
    pub fn load_default(&self) -> Result<()> {
        self.load(DEFAULT_CONFIG_PATH)
    }
}
