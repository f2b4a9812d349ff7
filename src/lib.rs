//! colortree - colorized directory trees with filters
//!
//! Renders a directory hierarchy as an indented box-drawing tree, coloring
//! each entry by file type and hiding entries by name, prefix, extension
//! or depth. Filter settings can be persisted to a small TOML file.
//!
//! # Architecture
//!
//! ```text
//! CLI flags ─┐
//! config ────┼→ Settings → list + sort → exclude/include → classify → tree lines
//! prompts ───┘   (settings)  (discovery)    (discovery)      (rendering)
//! ```

pub mod config;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod prompt;
pub mod rendering;
pub mod settings;
pub mod types;

pub use error::{Result, TreeError};
pub use rendering::{classify, ColorCategory, TreeRenderer};
pub use types::{RenderOptions, Settings, TreeStats};
