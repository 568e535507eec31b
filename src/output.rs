//! Structure and content section rendering
//!
//! Both renderers produce ordered line vectors; the writer joins them into
//! the final document. Rendering is deterministic: directories before files
//! at every level, byte-ordinal order within each category, and the content
//! section in full-path order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::language::Language;
use crate::tree::TreeNode;

const STRUCTURE_HEADER: &str = "# Repository structure";
const CONTENTS_HEADER: &str = "# File contents";

/// Indentation unit, repeated once per tree depth.
const INDENT: &str = "  ";

/// Render the outline: header, root marker, then the tree with all child
/// directories listed (and recursed into) before any files at each level.
pub fn render_structure(tree: &TreeNode) -> Vec<String> {
    let mut lines = vec![STRUCTURE_HEADER.to_string(), "- `/`".to_string()];
    render_level(tree, 1, &mut lines);
    lines
}

fn render_level(node: &TreeNode, depth: usize, lines: &mut Vec<String>) {
    let spacer = INDENT.repeat(depth);
    for (name, child) in &node.dirs {
        lines.push(format!("{spacer}- `{name}/`"));
        render_level(child, depth + 1, lines);
    }
    for name in &node.files {
        lines.push(format!("{spacer}- `{name}`"));
    }
}

/// Display form of a relative path with `/` separators, regardless of the
/// host path convention.
pub fn posix_display(path: &Path) -> String {
    let parts: Vec<_> = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect();
    parts.join("/")
}

/// Read a file as text, substituting U+FFFD for invalid UTF-8 sequences.
/// An I/O failure becomes an inline marker so one unreadable file never
/// aborts the run.
fn read_file_contents(path: &Path) -> String {
    match fs::read(path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => format!("[ERROR READING FILE: {err}]"),
    }
}

/// Render every included file as a heading plus a fenced block, in the
/// list's (full-path sorted) order.
pub fn render_file_contents(root: &Path, files: &[PathBuf]) -> Vec<String> {
    let mut lines = vec![CONTENTS_HEADER.to_string()];
    for rel_path in files {
        let fence = match Language::from_path(rel_path).map(|lang| lang.fence_tag()) {
            Some(tag) if !tag.is_empty() => format!("```{tag}"),
            _ => "```".to_string(),
        };
        lines.push(format!("## `{}`", posix_display(rel_path)));
        lines.push(fence);
        lines.push(read_file_contents(&root.join(rel_path)));
        lines.push("```".to_string());
    }
    lines
}
