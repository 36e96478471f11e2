//! Index Assembler
//!
//! Builds the top-level `index.rst` of a Sphinx source directory: a title
//! followed by one toctree per configured documentation subfolder, listing
//! every `.rst` document found there.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::config::IndexConfig;
use crate::constants::{index::EXCLUDED_STEM, rst::INDEX_TITLE_GLYPH, rst::TOCTREE_INDENT};
use crate::types::{DocError, Result, char_len, log_filter_error};

/// Result of an index assembly run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexOutcome {
    /// Index document written
    Written { path: PathBuf, content: String },
    /// Sphinx source directory does not exist; nothing written
    MissingSourceDir(PathBuf),
}

/// Stems of the `.rst` documents directly inside `dir`, sorted, `index` excluded.
///
/// A missing directory is reported and yields no documents.
pub fn rst_stems(dir: &Path) -> Vec<String> {
    if !dir.exists() {
        warn!("Documentation folder {} does not exist", dir.display());
        return Vec::new();
    }

    let pattern = format!(
        "{}/*.rst",
        glob::Pattern::escape(&dir.to_string_lossy())
    );
    let paths = match glob::glob(&pattern) {
        Ok(paths) => paths,
        Err(e) => {
            warn!("Cannot list {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut files: Vec<_> = paths
        .filter_map(|p| log_filter_error(p, "reading documentation entry"))
        .filter(|p| p.is_file())
        .collect();
    // Ordered by full file name: `intro-advanced.rst` sorts before `intro.rst`
    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    files
        .iter()
        .filter_map(|p| p.file_stem().and_then(|s| s.to_str()).map(String::from))
        .filter(|stem| stem != EXCLUDED_STEM)
        .collect()
}

/// Render the index document for `source_dir`
pub fn index_content(source_dir: &Path, config: &IndexConfig) -> String {
    let mut out = String::new();

    out.push_str(&config.title);
    out.push('\n');
    out.push_str(&INDEX_TITLE_GLYPH.to_string().repeat(char_len(&config.title)));
    out.push('\n');

    for section in &config.sections {
        out.push('\n');
        out.push_str(".. toctree::\n");
        out.push_str(&format!("{}:maxdepth: {}\n", TOCTREE_INDENT, config.maxdepth));
        out.push_str(&format!("{}:caption: {}\n", TOCTREE_INDENT, section.caption));
        if section.numbered {
            out.push_str(&format!("{}:numbered:\n", TOCTREE_INDENT));
        }
        out.push('\n');

        for stem in rst_stems(&source_dir.join(&section.dir)) {
            out.push_str(&format!("{}{}/{}\n", TOCTREE_INDENT, section.dir, stem));
        }
    }

    out
}

/// Assemble and write `<source_dir>/<config.file>`.
///
/// Write failures are returned as errors.
pub fn write_index(source_dir: &Path, config: &IndexConfig) -> Result<IndexOutcome> {
    if !source_dir.exists() {
        return Ok(IndexOutcome::MissingSourceDir(source_dir.to_path_buf()));
    }

    let content = index_content(source_dir, config);
    let path = source_dir.join(&config.file);
    fs::write(&path, &content).map_err(|e| DocError::write(&path, e))?;
    info!("Wrote index {}", path.display());

    Ok(IndexOutcome::Written { path, content })
}
