//! Scoped resource acquisition.
//!
//! [`Opener`] produces exclusively-owned [`Resource`] handles and
//! [`ScopedHandle`] guarantees each handle is released exactly once, either
//! explicitly through [`ScopedHandle::close`] or implicitly on drop
//! (including early returns and unwinding).

use std::fs::File;
use std::io;
use std::path::Path;

/// A handle to an open external resource that must be released.
pub trait Resource {
    /// Release the underlying resource. Called at most once per handle.
    fn release(self) -> io::Result<()>;
}

impl Resource for File {
    fn release(self) -> io::Result<()> {
        drop(self);
        Ok(())
    }
}

/// Source of resource handles, keyed by path.
pub trait Opener {
    type Handle: Resource;

    /// Open the resource at `path` for reading.
    fn open(&self, path: &Path) -> io::Result<Self::Handle>;
}

impl<O: Opener + ?Sized> Opener for &O {
    type Handle = O::Handle;

    fn open(&self, path: &Path) -> io::Result<Self::Handle> {
        (**self).open(path)
    }
}

/// Opens files read-only on the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsOpener;

impl Opener for FsOpener {
    type Handle = File;

    fn open(&self, path: &Path) -> io::Result<File> {
        File::open(path)
    }
}

/// Guard owning an open resource until it is closed or dropped.
#[derive(Debug)]
pub struct ScopedHandle<R: Resource> {
    inner: Option<R>,
}

impl<R: Resource> ScopedHandle<R> {
    pub fn new(resource: R) -> Self {
        Self {
            inner: Some(resource),
        }
    }

    /// Borrow the resource, or `None` once released.
    pub fn get(&self) -> Option<&R> {
        self.inner.as_ref()
    }

    /// Mutably borrow the resource, e.g. to read from a file, or `None`
    /// once released.
    pub fn get_mut(&mut self) -> Option<&mut R> {
        self.inner.as_mut()
    }

    pub fn is_released(&self) -> bool {
        self.inner.is_none()
    }

    /// Release now and report the outcome. A second call is a no-op.
    pub fn close(&mut self) -> io::Result<()> {
        match self.inner.take() {
            Some(resource) => resource.release(),
            None => Ok(()),
        }
    }
}

impl<R: Resource> Drop for ScopedHandle<R> {
    fn drop(&mut self) {
        // Nowhere to report a release failure from drop.
        let _ = self.close();
    }
}
