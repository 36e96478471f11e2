//! CLI Common Utilities
//!
//! Shared initialization and context management for CLI commands.

use crate::config::{Config, ConfigLoader};
use crate::types::Result;

use super::ui::Output;

/// Command execution context
///
/// Holds the resolved configuration and the console output helper.
/// CLI arguments are applied on top of `config` by each command.
pub struct CommandContext {
    /// Loaded configuration (defaults → global → project → env)
    pub config: Config,
    /// Styled console output
    pub output: Output,
}

impl CommandContext {
    /// Load configuration from every source and validate it
    pub fn load() -> Result<Self> {
        Ok(Self::with_config(ConfigLoader::load()?))
    }

    /// Context over an already resolved configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            config,
            output: Output::new(),
        }
    }
}
