//! File-type recognition and fence-tag mapping
//!
//! This module provides a centralized Language enum that doubles as the
//! extension allow-list (a file is included iff its extension maps to a
//! variant) and the fence-tag table for the content section.

use std::path::Path;

/// File types the flattener includes, identified by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    JavaScript,
    TypeScript,
    Tsx,
    Jsx,
    Go,
    Rust,
    Solidity,
    Shell,
    Json,
    Yaml,
    Html,
    Css,
    Markdown,
    PlainText,
    Toml,
}

impl Language {
    /// Detect a language from a file extension.
    ///
    /// Matching is case-insensitive. Returns `None` for extensions outside
    /// the allow-list, which excludes the file from the run entirely.
    ///
    /// # Examples
    ///
    /// ```
    /// use flatrepo::language::Language;
    ///
    /// assert_eq!(Language::from_extension("py"), Some(Language::Python));
    /// assert_eq!(Language::from_extension("YAML"), Some(Language::Yaml));
    /// assert_eq!(Language::from_extension("bin"), None);
    /// ```
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "py" => Some(Language::Python),
            "js" => Some(Language::JavaScript),
            "ts" => Some(Language::TypeScript),
            "tsx" => Some(Language::Tsx),
            "jsx" => Some(Language::Jsx),
            "go" => Some(Language::Go),
            "rs" => Some(Language::Rust),
            "sol" => Some(Language::Solidity),
            "sh" | "bash" => Some(Language::Shell),
            "json" => Some(Language::Json),
            "yml" | "yaml" => Some(Language::Yaml),
            "html" => Some(Language::Html),
            "css" => Some(Language::Css),
            "md" => Some(Language::Markdown),
            "txt" => Some(Language::PlainText),
            "toml" => Some(Language::Toml),
            _ => None,
        }
    }

    /// Detect a language from a file path.
    ///
    /// Extracts the extension and calls `from_extension()`. Files without
    /// an extension are never recognized.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?;
        Self::from_extension(ext)
    }

    /// The tag placed after the opening fence in the content section.
    ///
    /// Markdown, plain text, and TOML get an empty tag, which renders as a
    /// bare fence.
    pub fn fence_tag(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Tsx => "tsx",
            Language::Jsx => "jsx",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Solidity => "solidity",
            Language::Shell => "bash",
            Language::Json => "json",
            Language::Yaml => "yaml",
            Language::Html => "html",
            Language::Css => "css",
            Language::Markdown | Language::PlainText | Language::Toml => "",
        }
    }
}
