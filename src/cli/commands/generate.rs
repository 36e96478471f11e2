//! Generate Command
//!
//! Classify a MATLAB source tree and write the hierarchical RST document.

use std::path::{Path, PathBuf};

use crate::analyzer::outline;
use crate::cli::CommandContext;
use crate::rst::{Generation, HierarchyGenerator};
use crate::types::Result;

pub fn run(root: &Path, output: Option<PathBuf>) -> Result<()> {
    let ctx = CommandContext::load()?;
    execute(&ctx, root, output)
}

pub fn execute(ctx: &CommandContext, root: &Path, output: Option<PathBuf>) -> Result<()> {
    let output = output.unwrap_or_else(|| ctx.config.output.file.clone());
    let generator = HierarchyGenerator::new(&ctx.config.source);

    ctx.output.info("Analyzing folder structure...");

    match generator.generate(root, &output)? {
        Generation::MissingRoot(root) => {
            ctx.output
                .error(&format!("Folder {} does not exist", root.display()));
        }
        Generation::Empty(root) => {
            ctx.output.warning(&format!(
                "No folder containing {} files found under {}",
                ctx.config.source.suffix(),
                root.display()
            ));
        }
        Generation::Written { output, tree, .. } => {
            ctx.output
                .success(&format!("Generated {}", output.display()));
            ctx.output.section("Detected structure");
            ctx.output.lines(&outline(&tree));
        }
    }

    Ok(())
}
