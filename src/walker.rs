//! Path filtering and filesystem traversal

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::config::FlattenConfig;
use crate::language::Language;

/// Directory names never descended into, at any depth: version-control
/// metadata, editor settings, dependency trees, build output, caches.
pub const SKIP_DIRECTORIES: &[&str] = &[
    ".git",
    ".idea",
    ".vscode",
    "node_modules",
    "dist",
    "build",
    "__pycache__",
];

fn is_skipped_dir(name: &str) -> bool {
    SKIP_DIRECTORIES.contains(&name)
}

/// Whether a file survives filtering: a recognized extension and not the
/// output artifact itself.
pub fn should_include_file(name: &str, config: &FlattenConfig) -> bool {
    if name == config.output_name {
        return false;
    }
    Language::from_path(Path::new(name)).is_some()
}

/// Walk the root depth-first and collect every included file, relative to
/// the root and sorted by full path.
///
/// Gitignore handling is disabled: filtering is the fixed block-list plus
/// the extension allow-list, nothing else. Symlinks are not followed.
/// Unreadable entries or subtrees are skipped rather than aborting the run.
pub fn collect_included_paths(config: &FlattenConfig) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(&config.root)
        .hidden(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .follow_links(false)
        .filter_entry(|entry| {
            // The block-list applies below the root, never to the root itself
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());
            !(is_dir && entry.file_name().to_str().is_some_and(is_skipped_dir))
        })
        .build();

    let mut included = Vec::new();
    // flatten() drops walk errors: an unreadable subtree is skipped.
    for entry in walker.flatten() {
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !should_include_file(&name, config) {
            continue;
        }
        if let Ok(rel) = entry.path().strip_prefix(&config.root) {
            included.push(rel.to_path_buf());
        }
    }
    included.sort();
    included
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup(files: &[&str]) -> (TempDir, FlattenConfig) {
        let dir = TempDir::new().unwrap();
        for path in files {
            let full = dir.path().join(path);
            fs::create_dir_all(full.parent().unwrap()).unwrap();
            fs::write(&full, "content").unwrap();
        }
        let config = FlattenConfig::new(dir.path());
        (dir, config)
    }

    #[test]
    fn test_collects_allowed_extensions() {
        let (_dir, config) = setup(&["main.py", "lib.rs", "notes.md"]);
        let paths = collect_included_paths(&config);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("lib.rs"),
                PathBuf::from("main.py"),
                PathBuf::from("notes.md"),
            ]
        );
    }

    #[test]
    fn test_excludes_unrecognized_extensions() {
        let (_dir, config) = setup(&["data.bin", "archive.tar", "script.py"]);
        let paths = collect_included_paths(&config);
        assert_eq!(paths, vec![PathBuf::from("script.py")]);
    }

    #[test]
    fn test_excludes_files_without_extension() {
        let (_dir, config) = setup(&["Makefile", "LICENSE", "readme.txt"]);
        let paths = collect_included_paths(&config);
        assert_eq!(paths, vec![PathBuf::from("readme.txt")]);
    }

    #[test]
    fn test_skips_blocked_directories() {
        let (_dir, config) = setup(&[
            "src/main.rs",
            ".git/config.py",
            ".idea/workspace.json",
            ".vscode/settings.json",
            "node_modules/pkg/index.js",
            "dist/bundle.js",
            "build/out.py",
            "__pycache__/mod.py",
        ]);
        let paths = collect_included_paths(&config);
        assert_eq!(paths, vec![PathBuf::from("src/main.rs")]);
    }

    #[test]
    fn test_blocked_directory_at_depth() {
        let (_dir, config) = setup(&["a/b/node_modules/deep.js", "a/b/keep.js"]);
        let paths = collect_included_paths(&config);
        assert_eq!(paths, vec![PathBuf::from("a/b/keep.js")]);
    }

    #[test]
    fn test_excludes_output_artifact_everywhere() {
        let (_dir, config) = setup(&["repo_context.md", "sub/repo_context.md", "real.md"]);
        let paths = collect_included_paths(&config);
        assert_eq!(paths, vec![PathBuf::from("real.md")]);
    }

    #[test]
    fn test_sorted_by_full_path() {
        let (_dir, config) = setup(&["z.py", "a/z.py", "a/b/x.py", "b.py"]);
        let paths = collect_included_paths(&config);
        assert_eq!(
            paths,
            vec![
                PathBuf::from("a/b/x.py"),
                PathBuf::from("a/z.py"),
                PathBuf::from("b.py"),
                PathBuf::from("z.py"),
            ]
        );
    }

    #[test]
    fn test_hidden_files_with_allowed_extension_included() {
        let (_dir, config) = setup(&[".config.yml", ".gitignore"]);
        let paths = collect_included_paths(&config);
        assert_eq!(paths, vec![PathBuf::from(".config.yml")]);
    }

    #[test]
    fn test_case_insensitive_extension_match() {
        let (_dir, config) = setup(&["SCRIPT.PY", "Page.Html"]);
        let paths = collect_included_paths(&config);
        assert_eq!(
            paths,
            vec![PathBuf::from("Page.Html"), PathBuf::from("SCRIPT.PY")]
        );
    }

    #[test]
    fn test_root_named_like_blocked_directory() {
        let dir = TempDir::new().unwrap();
        let root = dir.path().join("build");
        fs::create_dir(&root).unwrap();
        fs::write(root.join("main.py"), "pass").unwrap();

        let config = FlattenConfig::new(&root);
        let paths = collect_included_paths(&config);
        assert_eq!(paths, vec![PathBuf::from("main.py")]);
    }

    #[test]
    fn test_empty_root() {
        let dir = TempDir::new().unwrap();
        let config = FlattenConfig::new(dir.path());
        assert!(collect_included_paths(&config).is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_unreadable_subtree_skipped_not_fatal() {
        use std::os::unix::fs::PermissionsExt;

        let (dir, config) = setup(&["locked/inner.py", "open/kept.py"]);
        let locked = dir.path().join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
        // Running as root bypasses permission bits; nothing to test then
        if fs::read_dir(&locked).is_ok() {
            fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }

        let paths = collect_included_paths(&config);
        assert_eq!(
            paths,
            vec![PathBuf::from("open/kept.py")],
            "siblings of an unreadable subtree must still be collected"
        );

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_directory_not_followed() {
        use std::os::unix::fs::symlink;

        let (dir, config) = setup(&["real/file.py"]);
        symlink(dir.path().join("real"), dir.path().join("linked")).unwrap();

        let paths = collect_included_paths(&config);
        assert_eq!(paths, vec![PathBuf::from("real/file.py")]);
    }
}
