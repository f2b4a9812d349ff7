//! Output rendering - from directory listings to colored tree lines.
//!
//! - `colors`: file-type classification and ANSI styles
//! - `tree`: recursive box-drawing renderer with per-run counts

mod colors;
mod tree;

pub use colors::{classify, extension_of, is_executable, ColorCategory};
pub use tree::{
    TreeRenderer, BLANK_INDENT, BRANCH, LAST_BRANCH, PERMISSION_DENIED, PIPE_INDENT,
};
