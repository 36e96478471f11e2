//! Tree Classifier
//!
//! Walks a source tree and records, for every folder that holds source files
//! directly or through a descendant, whether it is a leaf, a mixed folder or
//! a pure parent. Subfolders are visited in lexicographic order and fully
//! classified before their parent is.
//!
//! Folders that cannot be listed contribute nothing. The walk carries on with
//! their siblings. A symlinked folder that resolves to one of its own
//! ancestors is not entered again.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::source::{DirEntryInfo, DirectorySource, EntryKind, FsSource};
use super::tree::{ClassificationTree, FolderNode};
use crate::config::SourceConfig;

/// Classifies folders of a source tree by the source files they hold
pub struct TreeClassifier<S = FsSource> {
    source: S,
    suffix: String,
}

impl TreeClassifier<FsSource> {
    /// Filesystem classifier for the configured extension
    pub fn new(config: &SourceConfig) -> Self {
        Self {
            source: FsSource::new().follow_symlinks(config.follow_symlinks),
            suffix: config.suffix(),
        }
    }
}

impl<S: DirectorySource> TreeClassifier<S> {
    /// Classifier over an arbitrary directory source.
    ///
    /// `suffix` is matched case-sensitively against file names, e.g. `".m"`.
    pub fn with_source(source: S, suffix: impl Into<String>) -> Self {
        Self {
            source,
            suffix: suffix.into(),
        }
    }

    /// Classify every subfolder of `root`.
    ///
    /// Never fails: an unreadable `root` yields an empty tree.
    pub fn classify(&self, root: &Path) -> ClassificationTree {
        self.scan(root, &mut HashSet::new()).1
    }

    /// Returns whether `dir` directly holds a source file, and its classified subfolders.
    ///
    /// `ancestors` holds the identities of the folders on the current path.
    fn scan(&self, dir: &Path, ancestors: &mut HashSet<PathBuf>) -> (bool, ClassificationTree) {
        let identity = self.source.identity(dir);
        if let Some(id) = &identity
            && !ancestors.insert(id.clone())
        {
            debug!("Skipping link cycle at {} ({})", dir.display(), id.display());
            return (false, ClassificationTree::new());
        }

        let result = self.scan_entries(dir, ancestors);

        if let Some(id) = &identity {
            ancestors.remove(id);
        }
        result
    }

    fn scan_entries(
        &self,
        dir: &Path,
        ancestors: &mut HashSet<PathBuf>,
    ) -> (bool, ClassificationTree) {
        let entries = match self.source.list(dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Skipping unreadable folder {}: {}", dir.display(), e);
                return (false, ClassificationTree::new());
            }
        };

        let has_own_files = entries.iter().any(|e| self.is_source_file(e));

        let mut subfolders: Vec<&str> = entries
            .iter()
            .filter(|e| e.kind == EntryKind::Dir)
            .map(|e| e.name.as_str())
            .collect();
        subfolders.sort_unstable();

        let mut tree = ClassificationTree::new();
        for name in subfolders {
            let (child_has_files, children) = self.scan(&dir.join(name), ancestors);
            match FolderNode::from_parts(child_has_files, children) {
                Some(node) => {
                    debug!("Classified {}/{} as {:?}", dir.display(), name, Shape(&node));
                    tree.insert(name.to_string(), node);
                }
                None => debug!("Omitting {}/{}: no source files", dir.display(), name),
            }
        }

        (has_own_files, tree)
    }

    fn is_source_file(&self, entry: &DirEntryInfo) -> bool {
        entry.kind == EntryKind::File && entry.name.ends_with(&self.suffix)
    }
}

/// Classify `root` with the default configuration (`.m` files, symlinked folders followed)
pub fn classify(root: &Path) -> ClassificationTree {
    TreeClassifier::new(&SourceConfig::default()).classify(root)
}

/// Debug view of a node's shape without its subtree
struct Shape<'a>(&'a FolderNode);

impl std::fmt::Debug for Shape<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            FolderNode::Leaf => write!(f, "Leaf"),
            FolderNode::Mixed(c) => write!(f, "Mixed({} children)", c.len()),
            FolderNode::Parent(c) => write!(f, "Parent({} children)", c.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::io;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// In-memory directory source; folders registered as `None` fail to list
    #[derive(Default)]
    struct MemorySource {
        dirs: HashMap<PathBuf, Option<Vec<DirEntryInfo>>>,
    }

    impl MemorySource {
        fn dir(mut self, path: &str, entries: Vec<DirEntryInfo>) -> Self {
            self.dirs.insert(PathBuf::from(path), Some(entries));
            self
        }

        fn unreadable(mut self, path: &str) -> Self {
            self.dirs.insert(PathBuf::from(path), None);
            self
        }
    }

    impl DirectorySource for MemorySource {
        fn list(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>> {
            match self.dirs.get(dir) {
                Some(Some(entries)) => Ok(entries.clone()),
                Some(None) => Err(io::Error::new(
                    io::ErrorKind::PermissionDenied,
                    "permission denied",
                )),
                None => Err(io::Error::new(io::ErrorKind::NotFound, "no such folder")),
            }
        }
    }

    fn classifier(source: MemorySource) -> TreeClassifier<MemorySource> {
        TreeClassifier::with_source(source, ".m")
    }

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "% stub\n").unwrap();
    }

    #[test]
    fn test_end_to_end_layout() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "A/a.m");
        touch(temp.path(), "B/sub/b.m");
        fs::create_dir(temp.path().join("C")).unwrap();

        let tree = classify(temp.path());

        let expected: ClassificationTree = [
            ("A".to_string(), FolderNode::Leaf),
            (
                "B".to_string(),
                FolderNode::Parent([("sub".to_string(), FolderNode::Leaf)].into()),
            ),
        ]
        .into();
        assert_eq!(tree, expected);
    }

    #[test]
    fn test_no_source_files_yields_empty_tree() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "docs/readme.txt");
        touch(temp.path(), "data/deep/values.mat");
        touch(temp.path(), "notes/script.M");

        assert!(classify(temp.path()).is_empty());
    }

    #[test]
    fn test_files_in_root_are_not_a_node() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "main.m");

        assert!(classify(temp.path()).is_empty());
    }

    #[test]
    fn test_missing_root_yields_empty_tree() {
        let temp = TempDir::new().unwrap();
        assert!(classify(&temp.path().join("absent")).is_empty());
    }

    #[test]
    fn test_mixed_folder() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "Audit/run.m");
        touch(temp.path(), "Audit/Tests/Unit/check.m");

        let tree = classify(temp.path());
        let unit: ClassificationTree = [("Unit".to_string(), FolderNode::Leaf)].into();
        let tests: ClassificationTree = [("Tests".to_string(), FolderNode::Parent(unit))].into();
        assert_eq!(tree.get("Audit"), Some(&FolderNode::Mixed(tests)));
    }

    #[test]
    fn test_directory_named_like_source_file_does_not_qualify() {
        let source = MemorySource::default()
            .dir("root", vec![DirEntryInfo::dir("A")])
            .dir("root/A", vec![DirEntryInfo::dir("fake.m")])
            .dir("root/A/fake.m", vec![]);

        assert!(classifier(source).classify(Path::new("root")).is_empty());
    }

    #[test]
    fn test_ordering_ignores_listing_order() {
        let source = MemorySource::default()
            .dir(
                "root",
                vec![
                    DirEntryInfo::dir("zeta"),
                    DirEntryInfo::dir("Beta"),
                    DirEntryInfo::dir("alpha"),
                ],
            )
            .dir("root/zeta", vec![DirEntryInfo::file("z.m")])
            .dir("root/Beta", vec![DirEntryInfo::file("b.m")])
            .dir("root/alpha", vec![DirEntryInfo::file("a.m")]);

        let tree = classifier(source).classify(Path::new("root"));
        let names: Vec<&str> = tree.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["Beta", "alpha", "zeta"]);
    }

    #[test]
    fn test_unreadable_subfolder_does_not_abort_walk() {
        let source = MemorySource::default()
            .dir(
                "root",
                vec![
                    DirEntryInfo::dir("A"),
                    DirEntryInfo::dir("Locked"),
                    DirEntryInfo::dir("Z"),
                ],
            )
            .dir("root/A", vec![DirEntryInfo::file("a.m")])
            .unreadable("root/Locked")
            .dir("root/Z", vec![DirEntryInfo::file("z.m")]);

        let tree = classifier(source).classify(Path::new("root"));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.get("A"), Some(&FolderNode::Leaf));
        assert_eq!(tree.get("Z"), Some(&FolderNode::Leaf));
        assert!(!tree.contains_key("Locked"));
    }

    #[test]
    fn test_unreadable_grandchild_keeps_parent_files() {
        let source = MemorySource::default()
            .dir("root", vec![DirEntryInfo::dir("A")])
            .dir(
                "root/A",
                vec![DirEntryInfo::file("a.m"), DirEntryInfo::dir("Locked")],
            )
            .unreadable("root/A/Locked");

        let tree = classifier(source).classify(Path::new("root"));
        assert_eq!(tree.get("A"), Some(&FolderNode::Leaf));
    }

    #[test]
    fn test_custom_suffix() {
        let source = MemorySource::default()
            .dir("root", vec![DirEntryInfo::dir("A"), DirEntryInfo::dir("B")])
            .dir("root/A", vec![DirEntryInfo::file("a.m")])
            .dir("root/B", vec![DirEntryInfo::file("b.mlx")]);

        let tree = TreeClassifier::with_source(source, ".mlx").classify(Path::new("root"));
        let names: Vec<&str> = tree.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["B"]);
    }

    #[test]
    fn test_classifier_from_config() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "A/a.mlx");
        touch(temp.path(), "B/b.m");

        let config = SourceConfig {
            extension: ".mlx".to_string(),
            ..Default::default()
        };
        let tree = TreeClassifier::new(&config).classify(temp.path());
        assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["A"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_folder_is_classified() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "code/A/a.m");
        touch(temp.path(), "shared/util.m");
        std::os::unix::fs::symlink("../shared", temp.path().join("code/Lib")).unwrap();

        let tree = classify(&temp.path().join("code"));
        let expected: ClassificationTree = [
            ("A".to_string(), FolderNode::Leaf),
            ("Lib".to_string(), FolderNode::Leaf),
        ]
        .into();
        assert_eq!(tree, expected);

        let config = SourceConfig {
            follow_symlinks: false,
            ..Default::default()
        };
        let plain = TreeClassifier::new(&config).classify(&temp.path().join("code"));
        assert_eq!(plain.keys().collect::<Vec<_>>(), vec!["A"]);
    }

    #[cfg(unix)]
    #[test]
    fn test_link_to_ancestor_terminates() {
        let temp = TempDir::new().unwrap();
        touch(temp.path(), "A/a.m");
        std::os::unix::fs::symlink("..", temp.path().join("A/loop")).unwrap();

        let tree = classify(temp.path());
        assert_eq!(tree.get("A"), Some(&FolderNode::Leaf));
        assert_eq!(tree.len(), 1);
    }

    #[cfg(unix)]
    #[test]
    fn test_permission_denied_folder_does_not_abort_walk() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        touch(temp.path(), "A/a.m");
        touch(temp.path(), "Locked/l.m");
        touch(temp.path(), "Z/z.m");
        let locked = temp.path().join("Locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Permission bits do not stop root
        let still_readable = fs::read_dir(&locked).is_ok();
        let tree = classify(temp.path());
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if still_readable {
            return;
        }

        assert_eq!(tree.keys().collect::<Vec<_>>(), vec!["A", "Z"]);
        assert_eq!(tree.get("A"), Some(&FolderNode::Leaf));
        assert_eq!(tree.get("Z"), Some(&FolderNode::Leaf));
    }
}
