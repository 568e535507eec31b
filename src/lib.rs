//! Flatrepo - flatten a repository into a single Markdown document
//!
//! Walks a directory tree, filters files by extension and directory name,
//! and writes one consolidated `repo_context.md` containing a rendered
//! outline of the included paths followed by each file's contents in a
//! language-tagged fenced block.

pub mod config;
pub mod language;
pub mod output;
pub mod tree;
pub mod walker;
pub mod writer;

pub use config::{FlattenConfig, OUTPUT_FILENAME};
pub use language::Language;
pub use output::{render_file_contents, render_structure};
pub use tree::TreeNode;
pub use walker::{SKIP_DIRECTORIES, collect_included_paths};
pub use writer::write_output;

use std::io;
use std::path::PathBuf;

/// Run the whole pipeline: traverse and filter, build the tree, render the
/// structure and content sections, and write the artifact. Returns the
/// output path on success.
pub fn flatten(config: &FlattenConfig) -> io::Result<PathBuf> {
    let files = collect_included_paths(config);
    let tree = TreeNode::from_paths(&files);
    let structure = render_structure(&tree);
    let contents = render_file_contents(&config.root, &files);
    write_output(config, &structure, &contents)
}
