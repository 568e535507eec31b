//! Output artifact assembly and persistence

use std::io;
use std::path::PathBuf;
use std::{fs, iter};

use crate::config::FlattenConfig;

/// Join the structure and content sections with a single blank line and
/// write the artifact under the root, replacing any previous version.
/// A write failure is fatal to the run; there is no partial-output recovery.
pub fn write_output(
    config: &FlattenConfig,
    structure: &[String],
    contents: &[String],
) -> io::Result<PathBuf> {
    let output_path = config.output_path();
    let blank = String::new();
    let combined: Vec<&str> = structure
        .iter()
        .chain(iter::once(&blank))
        .chain(contents.iter())
        .map(String::as_str)
        .collect();
    fs::write(&output_path, combined.join("\n"))?;
    Ok(output_path)
}
