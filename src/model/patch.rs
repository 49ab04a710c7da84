use serde::Serialize;

/// Per-file change status, as reported by the version-control engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeType {
    Added,
    Deleted,
    Modified,
    Renamed,
    Copied,
    TypeChanged,
    Unmodified,
    Untracked,
    Ignored,
    Conflicted,
    Unreadable,
}

impl ChangeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeType::Added => "added",
            ChangeType::Deleted => "deleted",
            ChangeType::Modified => "modified",
            ChangeType::Renamed => "renamed",
            ChangeType::Copied => "copied",
            ChangeType::TypeChanged => "typechanged",
            ChangeType::Unmodified => "unmodified",
            ChangeType::Untracked => "untracked",
            ChangeType::Ignored => "ignored",
            ChangeType::Conflicted => "conflicted",
            ChangeType::Unreadable => "unreadable",
        }
    }

    /// Whether the file is new relative to the last commit.
    pub fn is_addition(&self) -> bool {
        matches!(self, ChangeType::Added | ChangeType::Untracked)
    }
}

/// One changed file: its unified diff and line counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilePatch {
    /// Repository-relative, `/`-separated.
    pub path: String,
    /// Unified diff text. Empty for binary changes.
    pub diff: String,
    pub lines_added: usize,
    pub lines_deleted: usize,
    pub change_type: ChangeType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    pub path: String,
    pub change_type: ChangeType,
}

/// Which working tree entries a status query reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusPolicy {
    pub include_untracked: bool,
    pub recurse_untracked_dirs: bool,
    pub include_ignored: bool,
}

impl StatusPolicy {
    /// Untracked files listed one by one, ignored files left out.
    pub const UNTRACKED_RECURSIVE: StatusPolicy = StatusPolicy {
        include_untracked: true,
        recurse_untracked_dirs: true,
        include_ignored: false,
    };
}
