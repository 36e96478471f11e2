//! Hierarchy Renderer
//!
//! Turns a [`ClassificationTree`] into RST lines: one titled section per
//! folder, nested by depth, with an `automodule` directive for every folder
//! that holds source files. The directive addresses the folder by its dotted
//! module path (`Audit.Tests.Unit`).

use crate::analyzer::{ClassificationTree, FolderNode};
use crate::constants::rst::{AUTOMODULE_DIRECTIVE, HEADING_GLYPHS, MEMBERS_OPTION};
use crate::types::char_len;

/// Underline glyph for a section at `depth`; depths past the palette reuse its last glyph
pub fn heading_glyph(depth: usize) -> char {
    HEADING_GLYPHS[depth.min(HEADING_GLYPHS.len() - 1)]
}

/// Underline for `title` at `depth`, exactly as long as the title in characters
pub fn underline(title: &str, depth: usize) -> String {
    heading_glyph(depth).to_string().repeat(char_len(title))
}

/// Dotted module path of `name` below `parent` (empty parent means top level)
pub fn module_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", parent, name)
    }
}

/// Render a whole tree from the top level
pub fn render_tree(tree: &ClassificationTree) -> Vec<String> {
    render(tree, 0, "")
}

/// Render `tree` as if nested `depth` levels deep under `parent_module_path`.
///
/// Entries are emitted in the tree's own order.
pub fn render(tree: &ClassificationTree, depth: usize, parent_module_path: &str) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(tree, depth, parent_module_path, &mut lines);
    lines
}

fn render_into(
    tree: &ClassificationTree,
    depth: usize,
    parent_module_path: &str,
    lines: &mut Vec<String>,
) {
    for (name, node) in tree {
        let full_module_path = module_path(parent_module_path, name);

        lines.push(name.clone());
        lines.push(underline(name, depth));
        lines.push(String::new());

        match node {
            FolderNode::Leaf => push_automodule(&full_module_path, lines),
            FolderNode::Mixed(children) => {
                push_automodule(&full_module_path, lines);
                render_into(children, depth + 1, &full_module_path, lines);
            }
            FolderNode::Parent(children) => {
                render_into(children, depth + 1, &full_module_path, lines);
            }
        }
    }
}

fn push_automodule(module_path: &str, lines: &mut Vec<String>) {
    lines.push(format!("{} {}", AUTOMODULE_DIRECTIVE, module_path));
    lines.push(MEMBERS_OPTION.to_string());
    lines.push(String::new());
}
