use git2::{ErrorCode, Repository, Status, StatusOptions, Tree};
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ChangesetError, Result};
use crate::model::{ChangeType, FilePatch, StatusEntry, StatusPolicy};
use crate::vcs::{RepoHandle, VcsEngine};

use super::diff::{diff_explicit_paths, diff_tracked_with_index};

/// libgit2-backed engine.
#[derive(Debug, Default, Clone, Copy)]
pub struct GitEngine;

impl VcsEngine for GitEngine {
    type Repo = GitRepository;

    fn discover_root(&self, path: &Path) -> Result<PathBuf> {
        Repository::discover_path(path, std::iter::empty::<&OsStr>()).map_err(|e| {
            if e.code() == ErrorCode::NotFound {
                ChangesetError::RepositoryNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ChangesetError::RepositoryAccess(e)
            }
        })
    }

    fn open(&self, root: &Path) -> Result<GitRepository> {
        let repo = Repository::open(root).map_err(ChangesetError::RepositoryAccess)?;
        debug!("Opened repository at {}", root.display());
        Ok(GitRepository { repo })
    }
}

pub struct GitRepository {
    repo: Repository,
}

impl GitRepository {
    /// Tree of the commit HEAD points at, or `None` on an unborn branch.
    fn head_tree(&self) -> Result<Option<Tree<'_>>> {
        match self.repo.head() {
            Ok(head) => head
                .peel_to_tree()
                .map(Some)
                .map_err(ChangesetError::RepositoryAccess),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                Ok(None)
            }
            Err(e) => Err(ChangesetError::RepositoryAccess(e)),
        }
    }
}

impl RepoHandle for GitRepository {
    fn diff_tracked(&self) -> Result<Vec<FilePatch>> {
        let tree = self.head_tree()?;
        diff_tracked_with_index(&self.repo, tree.as_ref())
    }

    fn status(&self, policy: &StatusPolicy) -> Result<Vec<StatusEntry>> {
        let mut opts = StatusOptions::new();
        opts.include_untracked(policy.include_untracked)
            .recurse_untracked_dirs(policy.recurse_untracked_dirs)
            .include_ignored(policy.include_ignored);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(ChangesetError::RepositoryAccess)?;

        let entries = statuses
            .iter()
            .map(|entry| StatusEntry {
                path: String::from_utf8_lossy(entry.path_bytes()).into_owned(),
                change_type: change_type_from_status(entry.status()),
            })
            .collect();

        Ok(entries)
    }

    fn diff_paths(&self, paths: &[String]) -> Result<Vec<FilePatch>> {
        diff_explicit_paths(&self.repo, paths)
    }
}

/// Collapse status flags into one tag. Conflicts win, then untracked and
/// ignored, then working tree changes, then staged ones.
fn change_type_from_status(status: Status) -> ChangeType {
    if status.contains(Status::CONFLICTED) {
        ChangeType::Conflicted
    } else if status.contains(Status::WT_NEW) {
        ChangeType::Untracked
    } else if status.contains(Status::IGNORED) {
        ChangeType::Ignored
    } else if status.contains(Status::WT_UNREADABLE) {
        ChangeType::Unreadable
    } else if status.intersects(Status::WT_DELETED | Status::INDEX_DELETED) {
        ChangeType::Deleted
    } else if status.intersects(Status::WT_RENAMED | Status::INDEX_RENAMED) {
        ChangeType::Renamed
    } else if status.intersects(Status::WT_TYPECHANGE | Status::INDEX_TYPECHANGE) {
        ChangeType::TypeChanged
    } else if status.contains(Status::INDEX_NEW) {
        ChangeType::Added
    } else if status.intersects(Status::WT_MODIFIED | Status::INDEX_MODIFIED) {
        ChangeType::Modified
    } else {
        ChangeType::Unmodified
    }
}
