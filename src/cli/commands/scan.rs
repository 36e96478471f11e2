//! Scan Command
//!
//! Classify a MATLAB source tree and print the detected structure without
//! writing anything.

use std::path::Path;

use crate::analyzer::{TreeClassifier, folder_count, outline};
use crate::cli::CommandContext;
use crate::types::Result;

pub fn run(root: &Path, format: &str) -> Result<()> {
    let ctx = CommandContext::load()?;
    execute(&ctx, root, format)
}

pub fn execute(ctx: &CommandContext, root: &Path, format: &str) -> Result<()> {
    if !root.exists() {
        ctx.output
            .error(&format!("Folder {} does not exist", root.display()));
        return Ok(());
    }

    let tree = TreeClassifier::new(&ctx.config.source).classify(root);

    if format == "json" {
        println!("{}", serde_json::to_string_pretty(&tree)?);
        return Ok(());
    }

    if tree.is_empty() {
        ctx.output.warning(&format!(
            "No folder containing {} files found under {}",
            ctx.config.source.suffix(),
            root.display()
        ));
        return Ok(());
    }

    ctx.output.section(&format!(
        "{} ({} folders)",
        root.display(),
        folder_count(&tree)
    ));
    ctx.output.lines(&outline(&tree));

    Ok(())
}
