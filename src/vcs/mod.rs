//! Version-control engine seam.
//!
//! The collector only needs five capabilities from an engine: find the
//! repository root, open it, diff tracked files, enumerate status, and diff an
//! explicit set of paths. [`git::GitEngine`] provides them over libgit2.

pub mod git;

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::model::{FilePatch, StatusEntry, StatusPolicy};

pub use git::GitEngine;

pub trait VcsEngine {
    type Repo: RepoHandle;

    /// Walk upward from `path` to the enclosing repository.
    fn discover_root(&self, path: &Path) -> Result<PathBuf>;

    /// Open the repository found by [`VcsEngine::discover_root`]. The handle
    /// is released when dropped.
    fn open(&self, root: &Path) -> Result<Self::Repo>;
}

pub trait RepoHandle {
    /// Last commit vs. working tree (through the index), tracked paths only.
    fn diff_tracked(&self) -> Result<Vec<FilePatch>>;

    fn status(&self, policy: &StatusPolicy) -> Result<Vec<StatusEntry>>;

    /// Diff exactly `paths` against an empty baseline.
    fn diff_paths(&self, paths: &[String]) -> Result<Vec<FilePatch>>;
}
