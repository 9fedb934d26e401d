//! Reconstructs a nested directory hierarchy from GitHub's flat list of
//! blob/tree paths.

use std::collections::HashMap;

use crate::models::TreeItem;

/// A node in the reconstructed hierarchy. The root is a `Directory`
/// with an empty name; it is never rendered itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    Directory { name: String, children: Vec<TreeNode> },
    File { name: String, path: String },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::Directory { name, .. } => name,
            TreeNode::File { name, .. } => name,
        }
    }
}

/// Directory under construction; children reference other arena slots
/// or hold file leaves directly.
struct DirSlot {
    name: String,
    children: Vec<Child>,
}

enum Child {
    Dir(usize),
    File { name: String, path: String },
}

/// Build the nested hierarchy from the flat listing.
///
/// Each directory prefix produces exactly one node no matter how many
/// descendant entries reference it or in what order they arrive; the
/// transient path index guarantees that. Tree entries materialize only
/// through this implicit intermediate-directory creation, so a
/// directory with no descendant blobs produces no visible node.
pub fn build_nested_tree(items: &[TreeItem]) -> TreeNode {
    let mut dirs = vec![DirSlot {
        name: String::new(),
        children: Vec::new(),
    }];
    // joined directory prefix -> arena slot; "" is the root
    let mut path_index: HashMap<String, usize> = HashMap::from([(String::new(), 0)]);

    for item in items {
        let segments: Vec<&str> = item.path.split('/').collect();
        let mut current = 0;

        for depth in 0..segments.len() - 1 {
            let prefix = segments[..=depth].join("/");
            current = match path_index.get(&prefix) {
                Some(&id) => id,
                None => {
                    let id = dirs.len();
                    dirs.push(DirSlot {
                        name: segments[depth].to_string(),
                        children: Vec::new(),
                    });
                    dirs[current].children.push(Child::Dir(id));
                    path_index.insert(prefix, id);
                    id
                }
            };
        }

        if item.is_blob() {
            dirs[current].children.push(Child::File {
                name: segments[segments.len() - 1].to_string(),
                path: item.path.clone(),
            });
        }
    }

    materialize(&dirs, 0)
}

fn materialize(dirs: &[DirSlot], id: usize) -> TreeNode {
    let slot = &dirs[id];
    let children = slot
        .children
        .iter()
        .map(|child| match child {
            Child::Dir(child_id) => materialize(dirs, *child_id),
            Child::File { name, path } => TreeNode::File {
                name: name.clone(),
                path: path.clone(),
            },
        })
        .collect();

    TreeNode::Directory {
        name: slot.name.clone(),
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TreeItemType;

    fn blob(path: &str) -> TreeItem {
        TreeItem {
            path: path.to_string(),
            item_type: TreeItemType::Blob,
        }
    }

    fn tree(path: &str) -> TreeItem {
        TreeItem {
            path: path.to_string(),
            item_type: TreeItemType::Tree,
        }
    }

    fn children(node: &TreeNode) -> &[TreeNode] {
        match node {
            TreeNode::Directory { children, .. } => children,
            TreeNode::File { .. } => panic!("expected a directory"),
        }
    }

    #[test]
    fn builds_nested_hierarchy() {
        let items = vec![
            blob("README.md"),
            tree("src"),
            blob("src/main.rs"),
            blob("src/lib.rs"),
        ];
        let root = build_nested_tree(&items);

        let top = children(&root);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].name(), "README.md");
        assert_eq!(top[1].name(), "src");
        assert_eq!(children(&top[1]).len(), 2);
    }

    #[test]
    fn directory_node_created_once_per_prefix() {
        let items = vec![
            blob("src/a/one.rs"),
            blob("src/b/two.rs"),
            blob("src/a/three.rs"),
        ];
        let root = build_nested_tree(&items);

        let top = children(&root);
        assert_eq!(top.len(), 1, "only one `src` directory");
        let src = children(&top[0]);
        let dirs: Vec<&str> = src.iter().map(TreeNode::name).collect();
        assert_eq!(dirs, vec!["a", "b"]);
        assert_eq!(children(&src[0]).len(), 2);
    }

    #[test]
    fn intermediate_directories_created_without_tree_entries() {
        // recursive listings always include tree entries, but the
        // builder must not depend on them
        let root = build_nested_tree(&[blob("a/b/c/deep.txt")]);

        let a = &children(&root)[0];
        assert_eq!(a.name(), "a");
        let b = &children(a)[0];
        assert_eq!(b.name(), "b");
        let c = &children(b)[0];
        assert_eq!(c.name(), "c");
        assert_eq!(children(c)[0].name(), "deep.txt");
    }

    #[test]
    fn empty_directory_produces_no_node() {
        let items = vec![tree("empty"), blob("README.md")];
        let root = build_nested_tree(&items);

        let names: Vec<&str> = children(&root).iter().map(TreeNode::name).collect();
        assert_eq!(names, vec!["README.md"]);
    }

    #[test]
    fn rendered_output_invariant_under_sibling_permutation() {
        use crate::prompt::render_tree;

        let forward = vec![blob("src/a.rs"), blob("src/b.rs"), blob("zz.md")];
        let reversed: Vec<TreeItem> = forward.iter().rev().cloned().collect();

        assert_eq!(
            render_tree(&build_nested_tree(&forward)),
            render_tree(&build_nested_tree(&reversed)),
        );
    }
}
