use serde::Deserialize;

/// One entry from the flat recursive tree listing
/// (`GET /repos/{owner}/{repo}/git/trees/{branch}?recursive=1`).
///
/// Paths use `/` separators; GitHub never emits duplicates for the
/// same path and type.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TreeItem {
    pub path: String,
    #[serde(rename = "type")]
    pub item_type: TreeItemType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreeItemType {
    Blob,
    Tree,
    /// Submodule pointer. Never rendered or fetched, but present in
    /// listings of repositories that carry submodules.
    Commit,
}

impl TreeItem {
    pub fn is_blob(&self) -> bool {
        self.item_type == TreeItemType::Blob
    }

    /// Final path segment.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}
