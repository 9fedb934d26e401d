use serde::Deserialize;

/// Repository coordinates parsed from a user-supplied GitHub URL.
///
/// `branch = None` means the repository's default branch, resolved
/// later from its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoTarget {
    pub owner: String,
    pub repo: String,
    pub branch: Option<String>,
}

/// Subset of `GET /repos/{owner}/{repo}` we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryMeta {
    pub default_branch: String,
}
