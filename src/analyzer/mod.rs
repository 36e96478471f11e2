//! Source Tree Analyzer
//!
//! Provides the folder classification that the RST renderer consumes:
//! - Directory listing behind a swappable source
//! - Leaf / mixed / parent classification of every folder

pub mod classifier;
pub mod source;
pub mod tree;

pub use classifier::{TreeClassifier, classify};
pub use source::{DirEntryInfo, DirectorySource, EntryKind, FsSource};
pub use tree::{ClassificationTree, FolderNode, folder_count, outline};
