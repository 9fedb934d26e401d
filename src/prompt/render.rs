//! Text rendering of the reconstructed hierarchy.
//!
//! Each entry is one `{prefix}- {name}` line; every nesting level adds
//! two literal dashes to the prefix, so a node at depth `d` carries
//! `2*(d-1)` dashes. Siblings sort case-insensitively by name, which
//! makes the output deterministic for a given hierarchy.

use std::cmp::Ordering;

use super::tree::TreeNode;

/// Render a node's subtree. The node itself is not printed; for the
/// root this yields the whole listing. An empty tree renders as "".
pub fn render_tree(node: &TreeNode) -> String {
    let mut out = String::new();
    if let TreeNode::Directory { children, .. } = node {
        render_children(&mut out, children, "");
    }
    out
}

fn render_children(out: &mut String, children: &[TreeNode], prefix: &str) {
    let mut sorted: Vec<&TreeNode> = children.iter().collect();
    sorted.sort_by(|a, b| compare_names(a.name(), b.name()));

    for child in sorted {
        out.push_str(prefix);
        out.push_str("- ");
        out.push_str(child.name());
        out.push('\n');

        if let TreeNode::Directory { children, .. } = child {
            let nested = format!("{}--", prefix);
            render_children(out, children, &nested);
        }
    }
}

/// Case-insensitive name ordering; ties fall back to byte order so the
/// result is total.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{TreeItem, TreeItemType};
    use crate::prompt::build_nested_tree;

    fn blob(path: &str) -> TreeItem {
        TreeItem {
            path: path.to_string(),
            item_type: TreeItemType::Blob,
        }
    }

    #[test]
    fn renders_flat_listing_sorted() {
        let root = build_nested_tree(&[blob("b.rs"), blob("a.rs")]);
        assert_eq!(render_tree(&root), "- a.rs\n- b.rs\n");
    }

    #[test]
    fn each_level_adds_two_dashes() {
        let root = build_nested_tree(&[blob("a/b/c/deep.txt")]);
        assert_eq!(
            render_tree(&root),
            "- a\n--- b\n----- c\n------- deep.txt\n"
        );
    }

    #[test]
    fn sorts_case_insensitively() {
        let root = build_nested_tree(&[blob("zebra.rs"), blob("Apple.rs"), blob("mango.rs")]);
        assert_eq!(render_tree(&root), "- Apple.rs\n- mango.rs\n- zebra.rs\n");
    }

    #[test]
    fn rendering_is_deterministic() {
        let root = build_nested_tree(&[blob("src/b.rs"), blob("src/a.rs"), blob("README.md")]);
        let first = render_tree(&root);
        let second = render_tree(&root);
        assert_eq!(first, second);
    }

    #[test]
    fn empty_tree_renders_as_empty_string() {
        let root = build_nested_tree(&[]);
        assert_eq!(render_tree(&root), "");
    }

    #[test]
    fn renders_mixed_blobs_regardless_of_content_filter() {
        // every blob appears in the structure, even ones the content
        // assembler will skip
        let root = build_nested_tree(&[
            blob("src/a.js"),
            blob("src/b.txt"),
            blob("README.md"),
        ]);
        assert_eq!(
            render_tree(&root),
            "- README.md\n- src\n--- a.js\n--- b.txt\n"
        );
    }
}
