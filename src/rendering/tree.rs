//! Recursive box-drawing tree renderer.
//!
//! Renders a directory the way `tree(1)` does:
//!
//! ```text
//! ├── Cargo.toml
//! ├── src
//! │   ├── lib.rs
//! │   └── main.rs
//! └── tests
//!     └── cli.rs
//! ```
//!
//! Each line is `<prefix><connector><colored name>`. The prefix grows by
//! `│   ` under a non-last directory and by four spaces under the last one,
//! so every descendant lines up beneath its ancestor's branch.
//!
//! Traversal is depth-first and synchronous. Counts live in a [`TreeStats`]
//! created per call and returned to the caller.

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, trace, warn};

use super::colors::{classify, ColorCategory};
use crate::discovery::{list_entries, EntryFilter, EntryKind};
use crate::types::{RenderOptions, Settings, TreeStats};

pub const BRANCH: &str = "├── ";
pub const LAST_BRANCH: &str = "└── ";
pub const PIPE_INDENT: &str = "│   ";
pub const BLANK_INDENT: &str = "    ";

/// Printed in place of a directory's children when it cannot be read.
pub const PERMISSION_DENIED: &str = "[Permission Denied]";

/// Renders the tree below `settings.root`.
pub struct TreeRenderer<'a> {
    settings: &'a Settings,
    options: RenderOptions,
}

impl<'a> TreeRenderer<'a> {
    pub fn new(settings: &'a Settings, options: RenderOptions) -> Self {
        Self { settings, options }
    }

    /// Write the entry lines for the whole tree and return the counts.
    ///
    /// The root itself is not printed; see [`render_report`](Self::render_report).
    pub fn render<W: Write>(&self, out: &mut W) -> io::Result<TreeStats> {
        let mut stats = TreeStats::default();
        self.render_dir(&self.settings.root, 0, "", out, &mut stats)?;
        debug!(
            directories = stats.directories,
            files = stats.files,
            "traversal finished"
        );
        Ok(stats)
    }

    /// Full report: root header, tree, then the two summary lines.
    pub fn render_report<W: Write>(&self, out: &mut W) -> io::Result<TreeStats> {
        let root = self.settings.root.display().to_string();
        writeln!(out)?;
        writeln!(out, "{}", ColorCategory::Directory.paint(&root, self.options.color))?;

        let stats = self.render(out)?;

        writeln!(out)?;
        writeln!(out, "Total directories: {}", stats.directories)?;
        writeln!(out, "Total files: {}", stats.files)?;
        Ok(stats)
    }

    fn render_dir<W: Write>(
        &self,
        dir: &Path,
        depth: usize,
        prefix: &str,
        out: &mut W,
        stats: &mut TreeStats,
    ) -> io::Result<()> {
        // depth 0 is the root's own listing
        if let Some(max_depth) = self.settings.max_depth {
            if depth > max_depth {
                trace!(dir = %dir.display(), depth, "depth limit reached");
                return Ok(());
            }
        }

        let entries = match list_entries(dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == io::ErrorKind::PermissionDenied => {
                warn!(dir = %dir.display(), "permission denied");
                writeln!(out, "{}{}", prefix, PERMISSION_DENIED)?;
                return Ok(());
            }
            Err(err) => {
                warn!(dir = %dir.display(), error = %err, "cannot list directory");
                writeln!(out, "{}[Unreadable: {}]", prefix, err)?;
                return Ok(());
            }
        };

        // Connectors are fixed by the name/prefix-filtered listing; files
        // dropped by the extension filter still hold their slot.
        let filter = EntryFilter::new(self.settings);
        let listed = filter.without_excluded(entries);
        let last_index = listed.len().saturating_sub(1);

        for (index, entry) in listed.iter().enumerate() {
            let is_last = index == last_index;
            let connector = if is_last { LAST_BRANCH } else { BRANCH };

            match entry.kind {
                EntryKind::Directory => {
                    stats.directories += 1;
                    let name = ColorCategory::Directory.paint(&entry.name, self.options.color);
                    writeln!(out, "{}{}{}", prefix, connector, name)?;

                    let extension = if is_last { BLANK_INDENT } else { PIPE_INDENT };
                    let child_prefix = format!("{}{}", prefix, extension);
                    self.render_dir(&entry.path, depth + 1, &child_prefix, out, stats)?;
                }
                EntryKind::File { executable } => {
                    if !filter.matches_extension(&entry.name) {
                        continue;
                    }
                    stats.files += 1;
                    let category = classify(&entry.name, executable);
                    let name = category.paint(&entry.name, self.options.color);
                    writeln!(out, "{}{}{}", prefix, connector, name)?;
                }
                EntryKind::Other => {
                    trace!(path = %entry.path.display(), "skipping non-file entry");
                }
            }
        }

        Ok(())
    }
}
