pub mod diff;
pub mod repository;

pub use repository::{GitEngine, GitRepository};
