//! Index Command
//!
//! Assemble the top-level `index.rst` from the documentation subfolders of a
//! Sphinx source directory.

use std::path::PathBuf;

use crate::cli::CommandContext;
use crate::rst::{IndexOutcome, write_index};
use crate::types::Result;

pub fn run(source_dir: Option<PathBuf>, file: Option<String>) -> Result<()> {
    let ctx = CommandContext::load()?;
    execute(&ctx, source_dir, file)
}

pub fn execute(
    ctx: &CommandContext,
    source_dir: Option<PathBuf>,
    file: Option<String>,
) -> Result<()> {
    let mut config = ctx.config.index.clone();
    if let Some(file) = file {
        config.file = file;
    }
    let source_dir = source_dir.unwrap_or_else(|| config.source_dir.clone());

    match write_index(&source_dir, &config)? {
        IndexOutcome::MissingSourceDir(dir) => {
            ctx.output
                .error(&format!("Source folder {} does not exist", dir.display()));
            ctx.output
                .info("Check that you are running from the documentation project root.");
        }
        IndexOutcome::Written { path, content } => {
            ctx.output.success(&format!("Generated {}", path.display()));
            ctx.output.section("Generated content");
            print!("{}", content);
        }
    }

    Ok(())
}
