//! Folder classification tree
//!
//! Every folder that holds source files, directly or through a descendant,
//! appears in the tree as one of three shapes. Folders with neither are never
//! represented.

use serde::Serialize;
use std::collections::BTreeMap;

/// Ordered mapping from folder name to its classification.
///
/// Iteration order is lexicographic by name, which is the order the renderer
/// emits sections in.
pub type ClassificationTree = BTreeMap<String, FolderNode>;

/// Shape of a folder that contributes to the documentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "children", rename_all = "lowercase")]
pub enum FolderNode {
    /// Source files only, no qualifying subfolders
    Leaf,
    /// Source files and at least one qualifying subfolder
    Mixed(ClassificationTree),
    /// No source files of its own, at least one qualifying subfolder
    Parent(ClassificationTree),
}

impl FolderNode {
    /// Classify a folder from its own-files marker and its already classified children.
    ///
    /// Returns `None` when the folder has nothing to document.
    pub fn from_parts(has_own_files: bool, children: ClassificationTree) -> Option<Self> {
        match (has_own_files, children.is_empty()) {
            (true, false) => Some(Self::Mixed(children)),
            (true, true) => Some(Self::Leaf),
            (false, false) => Some(Self::Parent(children)),
            (false, true) => None,
        }
    }

    /// Whether the folder itself holds source files
    pub fn has_own_files(&self) -> bool {
        matches!(self, Self::Leaf | Self::Mixed(_))
    }

    /// Nested subfolders, if any
    pub fn children(&self) -> Option<&ClassificationTree> {
        match self {
            Self::Leaf => None,
            Self::Mixed(children) | Self::Parent(children) => Some(children),
        }
    }
}

/// Human-readable outline of a tree for console display.
///
/// Each folder is a `- name` line indented two spaces per level; folders
/// holding source files get a `(contains source files)` line one level deeper.
pub fn outline(tree: &ClassificationTree) -> Vec<String> {
    let mut lines = Vec::new();
    outline_into(tree, 0, &mut lines);
    lines
}

fn outline_into(tree: &ClassificationTree, indent: usize, lines: &mut Vec<String>) {
    for (name, node) in tree {
        lines.push(format!("{}- {}", "  ".repeat(indent), name));
        if node.has_own_files() {
            lines.push(format!("{}(contains source files)", "  ".repeat(indent + 1)));
        }
        if let Some(children) = node.children() {
            outline_into(children, indent + 1, lines);
        }
    }
}

/// Number of folders in the tree, at every depth
pub fn folder_count(tree: &ClassificationTree) -> usize {
    tree.values()
        .map(|node| 1 + node.children().map(folder_count).unwrap_or(0))
        .sum()
}
