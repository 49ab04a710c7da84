use git2::{Delta, Diff, DiffOptions, Repository, Tree};

use crate::error::{ChangesetError, Result};
use crate::model::{ChangeType, FilePatch};

impl From<Delta> for ChangeType {
    fn from(delta: Delta) -> Self {
        match delta {
            Delta::Added => ChangeType::Added,
            Delta::Deleted => ChangeType::Deleted,
            Delta::Modified => ChangeType::Modified,
            Delta::Renamed => ChangeType::Renamed,
            Delta::Copied => ChangeType::Copied,
            Delta::Typechange => ChangeType::TypeChanged,
            Delta::Unmodified => ChangeType::Unmodified,
            Delta::Untracked => ChangeType::Untracked,
            Delta::Ignored => ChangeType::Ignored,
            Delta::Conflicted => ChangeType::Conflicted,
            Delta::Unreadable => ChangeType::Unreadable,
        }
    }
}

/// Diff `tree` (empty when `None`) against the working tree, going through the
/// index so staged additions show up. Untracked and ignored files are left out.
pub fn diff_tracked_with_index(repo: &Repository, tree: Option<&Tree<'_>>) -> Result<Vec<FilePatch>> {
    let mut opts = DiffOptions::new();
    opts.include_untracked(false).include_ignored(false);

    let diff = repo
        .diff_tree_to_workdir_with_index(tree, Some(&mut opts))
        .map_err(ChangesetError::DiffComputation)?;

    parse_diff(&diff)
}

/// Diff exactly `paths` between the index and the working tree, showing the
/// full content of untracked files as additions.
pub fn diff_explicit_paths(repo: &Repository, paths: &[String]) -> Result<Vec<FilePatch>> {
    // An empty pathspec matches everything.
    if paths.is_empty() {
        return Ok(Vec::new());
    }

    let mut opts = DiffOptions::new();
    opts.include_untracked(true)
        .recurse_untracked_dirs(true)
        .show_untracked_content(true)
        .include_ignored(false)
        .disable_pathspec_match(true);
    for path in paths {
        opts.pathspec(path.as_str());
    }

    let diff = repo
        .diff_index_to_workdir(None, Some(&mut opts))
        .map_err(ChangesetError::DiffComputation)?;

    parse_diff(&diff)
}

fn parse_diff(diff: &Diff) -> Result<Vec<FilePatch>> {
    let mut patches: Vec<FilePatch> = Vec::new();

    for (delta_idx, delta) in diff.deltas().enumerate() {
        let file = if delta.new_file().path_bytes().is_some() {
            delta.new_file()
        } else {
            delta.old_file()
        };
        let path = file
            .path_bytes()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
            .unwrap_or_default();

        let (diff_text, lines_added, lines_deleted) = render_patch(diff, delta_idx)?;

        patches.push(FilePatch {
            path,
            diff: diff_text,
            lines_added,
            lines_deleted,
            change_type: delta.status().into(),
        });
    }

    Ok(patches)
}

/// Unified text and (added, deleted) counts for one delta. Binary deltas have
/// no textual patch.
fn render_patch(diff: &Diff, delta_idx: usize) -> Result<(String, usize, usize)> {
    let patch = git2::Patch::from_diff(diff, delta_idx).map_err(ChangesetError::DiffComputation)?;

    let Some(mut patch) = patch else {
        return Ok((String::new(), 0, 0));
    };

    if patch.delta().flags().is_binary() {
        return Ok((String::new(), 0, 0));
    }

    let (_, additions, deletions) = patch
        .line_stats()
        .map_err(ChangesetError::DiffComputation)?;
    let buf = patch.to_buf().map_err(ChangesetError::DiffComputation)?;

    Ok((String::from_utf8_lossy(&buf).into_owned(), additions, deletions))
}
