//! Selects code files from the flat listing, fetches their contents
//! concurrently, and concatenates everything into the final prompt.

use std::future::Future;

use futures::future;

use crate::error::Result;
use crate::models::TreeItem;

/// Extensions whose files are included in the content section.
const CODE_EXTENSIONS: [&str; 12] = [
    ".js", ".html", ".css", ".py", ".java", ".ts", ".jsx", ".tsx", ".json", ".yml", ".yaml",
    ".md",
];

/// Exact file names included regardless of extension.
const CODE_FILE_NAMES: [&str; 1] = ["Dockerfile"];

/// Blobs whose contents belong in the prompt.
pub fn select_code_files(items: &[TreeItem]) -> Vec<&TreeItem> {
    items
        .iter()
        .filter(|item| item.is_blob() && is_code_file(&item.path, item.file_name()))
        .collect()
}

fn is_code_file(path: &str, file_name: &str) -> bool {
    CODE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
        || CODE_FILE_NAMES.contains(&file_name)
}

/// Build the prompt: structure header, rendered tree, then one
/// `=== path ===` block per selected file.
///
/// Contents are fetched concurrently in one fail-fast batch. The join
/// yields results in the order the futures were given, so blocks come
/// out in selection order no matter when each fetch completes.
pub async fn assemble_prompt<F, Fut>(
    tree_text: &str,
    items: &[TreeItem],
    fetch: F,
) -> Result<String>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<String>>,
{
    let selected = select_code_files(items);
    let contents =
        future::try_join_all(selected.iter().map(|item| fetch(item.path.clone()))).await?;

    let mut prompt = format!("Repository Structure: \n\n{}\n", tree_text);
    for (item, content) in selected.iter().zip(contents) {
        prompt.push_str(&format!("=== {} ===\n\n{}\n\n", item.path, content));
    }
    Ok(prompt)
}
