//! Prompt generation - turns a repository's flat tree listing into the
//! final text prompt.
//!
//! - `tree`: flat path list → nested TreeNode hierarchy
//! - `render`: deterministic indented text rendering of the hierarchy
//! - `assemble`: code-file filter, ordered concurrent content fetches,
//!   concatenation with path headers
//! - `escape`: HTML escaping for the `<pre>` response body

pub mod assemble;
pub mod escape;
pub mod render;
pub mod tree;

pub use assemble::assemble_prompt;
pub use escape::escape_html;
pub use render::render_tree;
pub use tree::{build_nested_tree, TreeNode};

use crate::error::Result;
use crate::github::GitHubClient;
use crate::models::RepoTarget;

/// Run the whole pipeline for one repository: resolve the branch, fetch
/// the recursive tree, render the structure, then fetch and concatenate
/// the selected file contents.
///
/// Any upstream failure aborts the request; no partial prompt is returned.
pub async fn generate_prompt(client: &GitHubClient, target: &RepoTarget) -> Result<String> {
    let owner = target.owner.as_str();
    let repo = target.repo.as_str();

    let branch = match &target.branch {
        Some(branch) => branch.clone(),
        None => client.repository(owner, repo).await?.default_branch,
    };

    let branch = branch.as_str();
    let items = client.tree(owner, repo, branch).await?;
    tracing::info!(owner, repo, branch, entries = items.len(), "fetched repository tree");

    let root = build_nested_tree(&items);
    let tree_text = render_tree(&root);
    assemble_prompt(&tree_text, &items, |path| async move {
        client.raw_content(owner, repo, &path, branch).await
    })
    .await
}
