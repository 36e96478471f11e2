//! Hierarchy document generation
//!
//! Classify a MATLAB source tree, render it and write the result as a single
//! RST document.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use super::hierarchy::render_tree;
use crate::analyzer::{ClassificationTree, TreeClassifier};
use crate::config::SourceConfig;
use crate::types::{DocError, Result};

/// Result of a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Generation {
    /// Document written to `output`
    Written {
        output: PathBuf,
        tree: ClassificationTree,
        line_count: usize,
    },
    /// Root folder does not exist; nothing written
    MissingRoot(PathBuf),
    /// No folder under the root holds source files; nothing written
    Empty(PathBuf),
}

/// Generates the hierarchical `automodule` document for a source tree
pub struct HierarchyGenerator {
    classifier: TreeClassifier,
}

impl HierarchyGenerator {
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            classifier: TreeClassifier::new(config),
        }
    }

    /// Classify `root` and write the rendered document to `output`.
    ///
    /// The output file is truncated and rewritten. A missing root or an empty
    /// classification leaves it untouched.
    pub fn generate(&self, root: &Path, output: &Path) -> Result<Generation> {
        if !root.exists() {
            return Ok(Generation::MissingRoot(root.to_path_buf()));
        }

        info!("Analyzing folder structure of {}", root.display());
        let tree = self.classifier.classify(root);
        if tree.is_empty() {
            return Ok(Generation::Empty(root.to_path_buf()));
        }

        let lines = render_tree(&tree);
        fs::write(output, lines.join("\n")).map_err(|e| DocError::write(output, e))?;
        info!("Wrote {} lines to {}", lines.len(), output.display());

        Ok(Generation::Written {
            output: output.to_path_buf(),
            tree,
            line_count: lines.len(),
        })
    }
}
