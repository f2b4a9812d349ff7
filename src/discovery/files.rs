//! Sorted, single-level directory listing.
//!
//! Each call performs one blocking `read_dir` and returns the entries
//! sorted by raw file name, so a fixed directory snapshot always yields the
//! same order. Entry kinds follow symlinks; a dangling link or a special
//! file ends up as [`EntryKind::Other`] and is never rendered.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::rendering::is_executable;

/// What a directory entry resolves to on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File { executable: bool },
    Directory,
    /// Broken symlinks, sockets, fifos, devices
    Other,
}

/// One child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// File name, lossily decoded for display and matching
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

impl Entry {
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    pub fn is_file(&self) -> bool {
        matches!(self.kind, EntryKind::File { .. })
    }
}

/// List the children of `dir`, sorted by file name in byte order.
///
/// Errors from `read_dir` itself (permission denied, vanished directory)
/// are returned to the caller. Errors on individual entries are skipped.
pub fn list_entries(dir: &Path) -> io::Result<Vec<Entry>> {
    let mut raw: Vec<_> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| (entry.file_name(), entry.path()))
        .collect();

    // OsString ordering is byte order on unix
    raw.sort_by(|a, b| a.0.cmp(&b.0));

    Ok(raw
        .into_iter()
        .map(|(name, path)| {
            let kind = resolve_kind(&path);
            Entry {
                name: name.to_string_lossy().into_owned(),
                path,
                kind,
            }
        })
        .collect())
}

fn resolve_kind(path: &Path) -> EntryKind {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => EntryKind::Directory,
        Ok(meta) if meta.is_file() => EntryKind::File {
            executable: is_executable(&meta),
        },
        _ => EntryKind::Other,
    }
}
