//! Directory tree model built from included paths

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

/// One directory level of the repository structure.
///
/// Children are kept in ordered collections with byte-ordinal keys, so the
/// tree's shape and iteration order are a pure function of the inserted
/// path set: insertion order and duplicate insertions cannot change it.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TreeNode {
    /// Child directories by name.
    pub dirs: BTreeMap<String, TreeNode>,
    /// Files directly contained at this level.
    pub files: BTreeSet<String>,
}

impl TreeNode {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a list of relative paths into a single tree.
    pub fn from_paths(paths: &[PathBuf]) -> Self {
        let mut root = Self::new();
        for path in paths {
            let parts: Vec<String> = path
                .components()
                .map(|c| c.as_os_str().to_string_lossy().into_owned())
                .collect();
            root.add_path(&parts);
        }
        root
    }

    /// Insert one path given as segments: intermediate segments create or
    /// walk directory nodes, the last segment becomes a file entry.
    /// Re-inserting an existing path is a no-op.
    pub fn add_path(&mut self, parts: &[String]) {
        match parts {
            [] => {}
            [file] => {
                self.files.insert(file.clone());
            }
            [dir, rest @ ..] => {
                self.dirs.entry(dir.clone()).or_default().add_path(rest);
            }
        }
    }
}
