use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::model::{ChangeType, FilePatch, StatusPolicy};
use crate::vcs::{GitEngine, RepoHandle, VcsEngine};

/// Gathers per-file patches for the working tree that contains a path.
///
/// Collection runs in two phases: the engine's tracked diff first, then an
/// explicit diff over every untracked file so that new files are reported as
/// full additions. The result keeps that order (tracked, then untracked); each
/// group is in the order the engine produced it. A path appears at most once:
/// a file dropped from the index but still on disk is already reported as a
/// tracked deletion and is not diffed again as untracked.
#[derive(Debug, Default, Clone)]
pub struct ChangeCollector<E: VcsEngine = GitEngine> {
    engine: E,
}

impl<E: VcsEngine> ChangeCollector<E> {
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    pub fn collect_changes(&self, path: impl AsRef<Path>) -> Result<Vec<FilePatch>> {
        let path = path.as_ref();
        let root = self.engine.discover_root(path)?;
        debug!("Resolved {} to repository {}", path.display(), root.display());

        // Dropped on every return path below.
        let repo = self.engine.open(&root)?;

        let mut patches = repo.diff_tracked()?;
        debug!("Collected {} tracked change(s)", patches.len());

        let tracked_paths: HashSet<&str> = patches.iter().map(|p| p.path.as_str()).collect();
        let untracked: Vec<String> = repo
            .status(&StatusPolicy::UNTRACKED_RECURSIVE)?
            .into_iter()
            .filter(|entry| entry.change_type == ChangeType::Untracked)
            .filter(|entry| !tracked_paths.contains(entry.path.as_str()))
            .map(|entry| entry.path)
            .collect();

        if !untracked.is_empty() {
            let added = repo.diff_paths(&untracked)?;
            debug!("Collected {} untracked file(s)", added.len());
            patches.extend(added);
        }

        info!("Collected {} change(s) from {}", patches.len(), root.display());
        Ok(patches)
    }
}

/// Collect changes for the git working tree containing `path`.
pub fn collect_changes(path: impl AsRef<Path>) -> Result<Vec<FilePatch>> {
    ChangeCollector::<GitEngine>::default().collect_changes(path)
}
