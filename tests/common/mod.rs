//! Shared test fixtures.

#![allow(dead_code)]

use config_open::{Opener, Resource};
use std::io;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Opener whose handles bump a shared counter when released.
///
/// With `delegate_to_fs` set, the open itself goes to the real filesystem
/// so platform errors surface unchanged.
#[derive(Default)]
pub struct CountingOpener {
    pub opens: AtomicUsize,
    pub releases: Arc<AtomicUsize>,
    pub delegate_to_fs: bool,
}

impl CountingOpener {
    pub fn over_fs() -> Self {
        Self {
            delegate_to_fs: true,
            ..Default::default()
        }
    }

    pub fn opens(&self) -> usize {
        self.opens.load(Ordering::SeqCst)
    }

    pub fn releases(&self) -> usize {
        self.releases.load(Ordering::SeqCst)
    }
}

pub struct CountingHandle {
    _file: Option<std::fs::File>,
    releases: Arc<AtomicUsize>,
}

impl Resource for CountingHandle {
    fn release(self) -> io::Result<()> {
        self.releases.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Opener for CountingOpener {
    type Handle = CountingHandle;

    fn open(&self, path: &Path) -> io::Result<CountingHandle> {
        self.opens.fetch_add(1, Ordering::SeqCst);
        let file = if self.delegate_to_fs {
            Some(std::fs::File::open(path)?)
        } else {
            None
        };
        Ok(CountingHandle {
            _file: file,
            releases: Arc::clone(&self.releases),
        })
    }
}

/// Run the built binary in `dir` with `args`.
pub fn run_cli(dir: &Path, args: &[&str], env_path: Option<&str>) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_config-open"));
    cmd.current_dir(dir).args(args).env_remove("CONFIG_OPEN_PATH");
    if let Some(value) = env_path {
        cmd.env("CONFIG_OPEN_PATH", value);
    }
    cmd.output().expect("failed to spawn config-open")
}

/// Message the platform reports for opening a missing file.
pub fn platform_not_found(path: &Path) -> String {
    std::fs::File::open(path)
        .expect_err("path should not exist")
        .to_string()
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write fixture");
    path
}
