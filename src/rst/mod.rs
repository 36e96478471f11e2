//! RST Document Generation
//!
//! - [`hierarchy`]: classification tree → titled `automodule` sections
//! - [`generator`]: classify, render and write the hierarchy document
//! - [`index`]: top-level `index.rst` with one toctree per documentation folder

pub mod generator;
pub mod hierarchy;
pub mod index;

pub use generator::{Generation, HierarchyGenerator};
pub use hierarchy::{heading_glyph, module_path, render, render_tree, underline};
pub use index::{IndexOutcome, index_content, rst_stems, write_index};
