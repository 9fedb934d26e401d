//! Data transfer objects for the GitHub API and request parsing.
//!
//! - `repo`: RepoTarget (parsed user input), RepositoryMeta (repo metadata)
//! - `tree`: TreeItem, TreeItemType (flat recursive-tree listing entries)

pub mod repo;
pub mod tree;

pub use repo::*;
pub use tree::*;
