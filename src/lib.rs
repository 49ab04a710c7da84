pub mod collector;
pub mod config;
pub mod error;
pub mod model;
pub mod output;
pub mod vcs;

pub use collector::{ChangeCollector, collect_changes};
pub use error::{ChangesetError, Result};
pub use model::{ChangeType, FilePatch};
