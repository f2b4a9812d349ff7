//! Core types shared by the resolver, the filters and the renderer.
//!
//! `Settings` is built once per run and never mutated afterwards.
//! `TreeStats` belongs to a single render call and is handed back to the
//! caller, so two renders in one process never share counts.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Settings {
    /// Directory whose contents are rendered
    pub root: PathBuf,
    /// Extensions (no leading dot, lowercase) a file must carry. Empty = all.
    pub include_extensions: BTreeSet<String>,
    /// Exact entry names hidden from the tree
    pub exclude_names: BTreeSet<String>,
    /// Name prefixes hidden from the tree
    pub exclude_prefixes: BTreeSet<String>,
    /// Deepest listing level; `None` = unlimited, `Some(0)` = root's children only
    pub max_depth: Option<usize>,
}

impl Settings {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }

    pub fn with_include_extensions<I, S>(mut self, exts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.include_extensions = exts
            .into_iter()
            .filter_map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    pub fn with_exclude_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_names = collect_items(names);
        self
    }

    pub fn with_exclude_prefixes<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.exclude_prefixes = collect_items(prefixes);
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Running counters for one traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TreeStats {
    pub directories: usize,
    pub files: usize,
}

/// Presentation switches for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Emit ANSI escapes around names
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Split a comma-separated list, trimming whitespace and dropping empties.
///
/// `" py, rs ,,md"` → `["py", "rs", "md"]`
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Canonical form of a user-supplied extension: trimmed, one leading dot
/// removed, lowercased. Returns `None` for empty input.
pub fn normalize_extension(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let ext = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_lowercase())
    }
}

fn collect_items<I, S>(items: I) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items
        .into_iter()
        .map(|s| s.as_ref().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_list_strips_whitespace() {
        assert_eq!(split_list(" py, rs ,,md"), vec!["py", "rs", "md"]);
        assert!(split_list("").is_empty());
        assert!(split_list(" , ").is_empty());
    }

    #[test]
    fn test_normalize_extension() {
        assert_eq!(normalize_extension(".PY"), Some("py".into()));
        assert_eq!(normalize_extension(" tar.gz "), Some("tar.gz".into()));
        assert_eq!(normalize_extension("."), None);
        assert_eq!(normalize_extension(""), None);
    }

    #[test]
    fn test_settings_builder() {
        let settings = Settings::new("/tmp")
            .with_include_extensions([".rs", "PY", ""])
            .with_exclude_names(["target", " .git "])
            .with_exclude_prefixes(["_"])
            .with_max_depth(Some(2));

        assert_eq!(
            settings.include_extensions.iter().collect::<Vec<_>>(),
            vec!["py", "rs"]
        );
        assert!(settings.exclude_names.contains(".git"));
        assert!(settings.exclude_prefixes.contains("_"));
        assert_eq!(settings.max_depth, Some(2));
    }
}
