pub mod patch;

pub use patch::{ChangeType, FilePatch, StatusEntry, StatusPolicy};
