//! Configuration Types
//!
//! All configuration structures with sensible defaults.
//! Supports global (~/.config/matdoc/) and project (./matdoc.toml) level configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants;
use crate::types::{DocError, Result};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Configuration version
    pub version: String,

    /// Source tree scanning settings
    pub source: SourceConfig,

    /// Hierarchy document output settings
    pub output: OutputConfig,

    /// Index document settings
    pub index: IndexConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            source: SourceConfig::default(),
            output: OutputConfig::default(),
            index: IndexConfig::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    /// Returns `DocError::Config` on validation failure.
    pub fn validate(&self) -> Result<()> {
        let extension = self.source.extension.trim_start_matches('.');
        if extension.is_empty() {
            return Err(DocError::Config(
                "source.extension must not be empty".to_string(),
            ));
        }
        if extension.contains(['/', '\\']) {
            return Err(DocError::Config(format!(
                "source.extension must not contain a path separator, got '{}'",
                self.source.extension
            )));
        }

        if self.index.maxdepth == 0 {
            return Err(DocError::Config(
                "index.maxdepth must be greater than 0".to_string(),
            ));
        }

        if let Some(pos) = self.index.sections.iter().position(|s| s.dir.is_empty()) {
            return Err(DocError::Config(format!(
                "index.sections[{}].dir must not be empty",
                pos
            )));
        }

        Ok(())
    }
}

// =============================================================================
// Source Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Qualifying file extension, with or without the leading dot
    pub extension: String,

    /// Descend into symlinked directories; link cycles are cut at the first repeat
    pub follow_symlinks: bool,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            extension: constants::source::DEFAULT_EXTENSION.to_string(),
            follow_symlinks: true,
        }
    }
}

impl SourceConfig {
    /// File name suffix a qualifying file must end with (e.g. `.m`)
    pub fn suffix(&self) -> String {
        format!(".{}", self.extension.trim_start_matches('.'))
    }
}

// =============================================================================
// Output Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Hierarchy document path
    pub file: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(constants::output::DEFAULT_FILE),
        }
    }
}

// =============================================================================
// Index Configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Sphinx source directory
    pub source_dir: PathBuf,

    /// Index file name, relative to `source_dir`
    pub file: String,

    /// Document title
    pub title: String,

    /// `:maxdepth:` of every toctree
    pub maxdepth: u8,

    /// One toctree per section, in order
    pub sections: Vec<IndexSection>,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(constants::index::DEFAULT_SOURCE_DIR),
            file: constants::index::DEFAULT_FILE.to_string(),
            title: constants::index::DEFAULT_TITLE.to_string(),
            maxdepth: constants::index::DEFAULT_MAXDEPTH,
            sections: vec![
                IndexSection {
                    dir: "doc_actuarielle".to_string(),
                    caption: "Documentation Actuarielle".to_string(),
                    numbered: true,
                },
                IndexSection {
                    dir: "doc_technique".to_string(),
                    caption: "Documentation Technique".to_string(),
                    numbered: false,
                },
            ],
        }
    }
}

/// A documentation subfolder listed in its own toctree
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexSection {
    /// Subfolder of the source directory
    pub dir: String,

    /// Toctree caption
    pub caption: String,

    /// Emit `:numbered:`
    #[serde(default)]
    pub numbered: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.source.suffix(), ".m");
        assert_eq!(config.output.file, PathBuf::from("documentation.rst"));
        assert_eq!(config.index.sections.len(), 2);
    }

    #[test]
    fn test_suffix_accepts_leading_dot() {
        let source = SourceConfig {
            extension: ".m".to_string(),
            ..Default::default()
        };
        assert_eq!(source.suffix(), ".m");
    }

    #[test]
    fn test_validate_rejects_empty_extension() {
        let mut config = Config::default();
        config.source.extension = ".".to_string();
        assert!(matches!(config.validate(), Err(DocError::Config(_))));
    }

    #[test]
    fn test_validate_rejects_separator_in_extension() {
        let mut config = Config::default();
        config.source.extension = "m/x".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_maxdepth() {
        let mut config = Config::default();
        config.index.maxdepth = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_section_dir() {
        let mut config = Config::default();
        config.index.sections[1].dir.clear();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("index.sections[1].dir"));
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.index.sections, config.index.sections);
        assert_eq!(parsed.index.title, "Documentation Complète");
    }
}
