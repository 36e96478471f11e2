//! Configuration Loader (Figment-based)
//!
//! Loads and merges configuration from multiple sources using Figment:
//! 1. Built-in defaults (Serialized)
//! 2. Global config (~/.config/matdoc/config.toml)
//! 3. Project config (./matdoc.toml)
//! 4. Environment variables (MATDOC_* prefix, `__` between nested keys)

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::types::Config;
use crate::types::{DocError, Result};

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "matdoc.toml";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with full resolution chain using Figment:
    /// defaults → global → project → env vars
    pub fn load() -> Result<Config> {
        Self::load_with_project(&Self::project_config_path())
    }

    /// Same resolution chain as [`ConfigLoader::load`] with an explicit project file
    pub fn load_with_project(project_path: &Path) -> Result<Config> {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            debug!("Loading global config from: {}", global_path.display());
            figment = figment.merge(Toml::file(&global_path));
        }

        if project_path.exists() {
            debug!("Loading project config from: {}", project_path.display());
            figment = figment.merge(Toml::file(project_path));
        }

        // MATDOC_SOURCE__EXTENSION -> source.extension
        figment = figment.merge(Env::prefixed("MATDOC_").split("__").lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| DocError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a specific file only
    pub fn load_from_file(path: &Path) -> Result<Config> {
        let config: Config = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .extract()
            .map_err(|e| DocError::Config(format!("Configuration error: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    // =========================================================================
    // Path Management
    // =========================================================================

    /// Get path to global config directory (~/.config/matdoc/)
    pub fn global_dir() -> Option<PathBuf> {
        env::var("XDG_CONFIG_HOME")
            .ok()
            .map(PathBuf::from)
            .or_else(|| {
                env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".config"))
            })
            .map(|p| p.join("matdoc"))
    }

    /// Get path to global config file
    pub fn global_config_path() -> Option<PathBuf> {
        Self::global_dir().map(|dir| dir.join("config.toml"))
    }

    /// Get path to project config file
    pub fn project_config_path() -> PathBuf {
        PathBuf::from(PROJECT_CONFIG_FILE)
    }

    // =========================================================================
    // Config Commands
    // =========================================================================

    /// Show config file paths
    pub fn show_path() {
        println!("Configuration paths:");
        println!();

        if let Some(global) = Self::global_config_path() {
            let exists = if global.exists() { "✓" } else { "✗" };
            println!("  Global:  {} {}", exists, global.display());
        } else {
            println!("  Global:  (not available)");
        }

        let project = Self::project_config_path();
        let exists = if project.exists() { "✓" } else { "✗" };
        println!("  Project: {} {}", exists, project.display());
    }

    /// Render the effective configuration in the requested format
    pub fn render_config(config: &Config, format: &str) -> Result<String> {
        match format {
            "json" => Ok(serde_json::to_string_pretty(config)?),
            "yaml" => Ok(serde_yaml::to_string(config)?),
            _ => toml::to_string_pretty(config).map_err(|e| DocError::Config(e.to_string())),
        }
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize global configuration
    pub fn init_global(force: bool) -> Result<PathBuf> {
        let global_dir = Self::global_dir().ok_or_else(|| {
            DocError::Config("Cannot determine global config directory".to_string())
        })?;

        fs::create_dir_all(&global_dir)?;

        let config_path = global_dir.join("config.toml");
        Self::write_default(&config_path, force)?;

        Ok(config_path)
    }

    /// Initialize project configuration in the given directory
    pub fn init_project(dir: &Path, force: bool) -> Result<PathBuf> {
        let config_path = dir.join(PROJECT_CONFIG_FILE);
        Self::write_default(&config_path, force)?;
        Ok(config_path)
    }

    // =========================================================================
    // Internal
    // =========================================================================

    fn write_default(config_path: &Path, force: bool) -> Result<()> {
        if config_path.exists() && !force {
            info!("Config exists: {}", config_path.display());
            return Ok(());
        }

        fs::write(config_path, Self::default_config())
            .map_err(|e| DocError::write(config_path, e))?;
        info!("Created config: {}", config_path.display());
        Ok(())
    }

    /// Generate default config content (TOML)
    fn default_config() -> String {
        r#"# matdoc Configuration
# Project settings in ./matdoc.toml override ~/.config/matdoc/config.toml.

version = "1.0"

# MATLAB source tree scanning
[source]
extension = "m"
follow_symlinks = true

# Hierarchy document
[output]
file = "documentation.rst"

# Top-level index document
[index]
source_dir = "source"
file = "index.rst"
title = "Documentation Complète"
maxdepth = 2

[[index.sections]]
dir = "doc_actuarielle"
caption = "Documentation Actuarielle"
numbered = true

[[index.sections]]
dir = "doc_technique"
caption = "Documentation Technique"
numbered = false
"#
        .to_string()
    }
}
