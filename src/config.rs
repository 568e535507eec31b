//! Run configuration

use std::path::PathBuf;

/// Fixed name of the generated artifact. Files with this name are never
/// ingested, so a rerun does not flatten its own output.
pub const OUTPUT_FILENAME: &str = "repo_context.md";

/// Configuration for a single flatten run.
///
/// Root and output name are explicit values rather than ambient globals,
/// so traversal, rendering, and writing stay testable with injected roots.
#[derive(Debug, Clone)]
pub struct FlattenConfig {
    /// Root directory to flatten. Callers are expected to pass a
    /// canonicalized path.
    pub root: PathBuf,
    /// Name of the output file, written directly under `root`.
    pub output_name: String,
}

impl FlattenConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            output_name: OUTPUT_FILENAME.to_string(),
        }
    }

    /// Full path of the output artifact.
    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_name)
    }
}
