//! Directory listing and entry filtering.
//!
//! One directory is read at a time, sorted by name for reproducible output,
//! then filtered by the user's exclude/include rules before rendering.

mod files;
mod filters;

pub use files::{list_entries, Entry, EntryKind};
pub use filters::EntryFilter;
