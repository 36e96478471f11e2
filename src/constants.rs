//! Global Constants
//!
//! Centralized constants for RST output and default configuration.

/// RST output constants
pub mod rst {
    /// Heading underline glyphs, outermost level first.
    ///
    /// Depths past the end of the palette reuse the last glyph.
    pub const HEADING_GLYPHS: [char; 7] = ['=', '-', '~', '^', '+', '*', '#'];

    /// Directive emitted for every folder that owns source files
    pub const AUTOMODULE_DIRECTIVE: &str = ".. automodule::";

    /// Option line under an automodule directive (three-space indent)
    pub const MEMBERS_OPTION: &str = "   :members:";

    /// Indentation for toctree options and entries in the index document
    pub const TOCTREE_INDENT: &str = "   ";

    /// Underline glyph for the index document title
    pub const INDEX_TITLE_GLYPH: char = '=';
}

/// Source tree scanning defaults
pub mod source {
    /// MATLAB source file extension (without the dot)
    pub const DEFAULT_EXTENSION: &str = "m";
}

/// Output defaults
pub mod output {
    /// Generated hierarchy document
    pub const DEFAULT_FILE: &str = "documentation.rst";
}

/// Index assembler defaults
pub mod index {
    /// Sphinx source directory holding the documentation subfolders
    pub const DEFAULT_SOURCE_DIR: &str = "source";

    /// Index document written inside the source directory
    pub const DEFAULT_FILE: &str = "index.rst";

    /// Title of the index document
    pub const DEFAULT_TITLE: &str = "Documentation Complète";

    /// Default toctree depth
    pub const DEFAULT_MAXDEPTH: u8 = 2;

    /// Stem excluded when listing a subfolder's documents
    pub const EXCLUDED_STEM: &str = "index";
}
