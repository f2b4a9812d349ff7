//! Name, prefix and extension filters applied to each directory listing.
//!
//! Order matters: name/prefix exclusions run first and apply to files and
//! directories alike, shrinking the listing itself. The extension filter
//! runs second, per file, and never touches directories.

use crate::discovery::Entry;
use crate::types::Settings;

/// Filter rules borrowed from the run's [`Settings`].
#[derive(Debug, Clone, Copy)]
pub struct EntryFilter<'a> {
    settings: &'a Settings,
}

impl<'a> EntryFilter<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// True when the name is listed verbatim or starts with an excluded prefix.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.settings.exclude_names.contains(name)
            || self
                .settings
                .exclude_prefixes
                .iter()
                .any(|prefix| name.starts_with(prefix.as_str()))
    }

    /// True when a file name passes the include-extension list.
    ///
    /// Matching is case-insensitive on the `.<ext>` suffix, so `tar.gz`
    /// works as a compound extension and `py` does not match `happy`.
    pub fn matches_extension(&self, file_name: &str) -> bool {
        if self.settings.include_extensions.is_empty() {
            return true;
        }
        let lower = file_name.to_lowercase();
        self.settings
            .include_extensions
            .iter()
            .any(|ext| lower.ends_with(&format!(".{ext}")))
    }

    /// Drop excluded names and prefixes, preserving order.
    ///
    /// This is the listing connectors are assigned from. Extension
    /// filtering happens per file afterwards.
    pub fn without_excluded(&self, entries: Vec<Entry>) -> Vec<Entry> {
        entries
            .into_iter()
            .filter(|e| !self.is_excluded(&e.name))
            .collect()
    }
}
