//! matdoc - Sphinx Documentation Generator for MATLAB Source Trees
//!
//! Walks a folder tree of MATLAB `.m` files and writes reStructuredText that
//! Sphinx's MATLAB domain renders into API documentation.
//!
//! ## Core Features
//!
//! - **Folder Classification**: every folder holding source files, directly or
//!   through a descendant, is a leaf, a mixed folder or a pure parent
//! - **Hierarchy Rendering**: nested titled sections with `automodule`
//!   directives addressed by dotted module path
//! - **Index Assembly**: top-level `index.rst` with one toctree per
//!   documentation folder
//!
//! ## Quick Start
//!
//! ```ignore
//! use matdoc::{Config, HierarchyGenerator};
//!
//! let config = Config::default();
//! let generator = HierarchyGenerator::new(&config.source);
//! let generation = generator.generate(Path::new("code"), Path::new("documentation.rst"))?;
//! ```
//!
//! ## Modules
//!
//! - [`analyzer`]: directory listing and folder classification
//! - [`rst`]: hierarchy rendering, document generation, index assembly
//! - [`config`]: layered configuration
//! - [`cli`]: command handlers

pub mod analyzer;
pub mod cli;
pub mod config;
pub mod constants;
pub mod rst;
pub mod types;

// =============================================================================
// Core Re-exports
// =============================================================================

// Configuration
pub use config::{Config, ConfigLoader, IndexConfig, IndexSection, SourceConfig};

// Error Types
pub use types::error::{DocError, Result};

// Analyzer
pub use analyzer::{ClassificationTree, FolderNode, TreeClassifier, classify};

// RST
pub use rst::{Generation, HierarchyGenerator, IndexOutcome, render, render_tree, write_index};
