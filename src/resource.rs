//! Resource existence checking.
//!
//! [`ResourceLoader`] is the collaborator the renderer asks whether a
//! template resource exists at a resolved location. It is a separate seam
//! from the engine so existence checks stay side-effect free: no template is
//! loaded or compiled to answer [`exists`](ResourceLoader::exists).

use std::path::{Path, PathBuf};

/// Answers whether a resource exists at a relative path.
pub trait ResourceLoader: Send + Sync {
    /// Returns true if a resource exists at `path`.
    ///
    /// `path` is a resolved view location such as `"views/home.html"`,
    /// relative to whatever root the implementation is anchored to.
    fn exists(&self, path: &str) -> bool;
}

/// Filesystem-backed resource loader.
///
/// Paths are resolved relative to the configured root directory.
#[derive(Debug, Clone)]
pub struct FsResourceLoader {
    root: PathBuf,
}

impl FsResourceLoader {
    /// Creates a loader anchored at the given root directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the root directory this loader resolves against.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl ResourceLoader for FsResourceLoader {
    fn exists(&self, path: &str) -> bool {
        self.root.join(path).is_file()
    }
}
