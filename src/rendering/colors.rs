//! File-type classification and ANSI styling for tree entries.
//!
//! Every entry lands in exactly one [`ColorCategory`]. Files are classified
//! by extension against an ordered list of tables, so a name that appears in
//! two tables always resolves to the earlier one. Names that match no table
//! fall through to the executable checks and finally to `Default`.
//!
//! Color scheme follows the usual `ls`-style conventions:
//! - Bright white for directories and plain text
//! - Language sources get their ecosystem's familiar color
//! - Muted 256-color greys for markup/config noise

use owo_colors::{OwoColorize, Style, XtermColors};
use std::fmt;
use std::fs::Metadata;

/// Display bucket for a tree entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorCategory {
    // Language sources
    Python,
    CFamily,
    Java,
    JavaScript,
    Go,
    Rust,
    Ruby,
    Php,
    Html,
    Css,

    // Text and data
    Text,
    Markdown,
    Json,
    Yaml,
    Xml,
    Csv,

    // Binary-ish
    Archive,
    Image,
    Audio,
    Video,

    /// Generic config formats (.conf, .ini, .cfg)
    Config,

    /// Shell scripts, binaries, and anything with an execute bit
    Executable,

    Directory,

    /// Fallback for everything unrecognized
    Default,
}

/// Extension tables in priority order.
///
/// Source → text/data → archive → image → audio → video → config.
/// The executable-bit check only runs after all of these miss.
const CATEGORY_TABLE: &[(ColorCategory, &[&str])] = &[
    // Language sources
    (ColorCategory::Python, &["py", "pyc", "pyo"]),
    (ColorCategory::CFamily, &["c", "cpp", "h", "hpp"]),
    (ColorCategory::Java, &["java"]),
    (ColorCategory::JavaScript, &["js", "jsx", "ts", "tsx", "mjs", "cjs"]),
    (ColorCategory::Go, &["go"]),
    (ColorCategory::Rust, &["rs"]),
    (ColorCategory::Ruby, &["rb", "rake"]),
    (ColorCategory::Php, &["php", "phtml"]),
    (ColorCategory::Html, &["html", "htm"]),
    (ColorCategory::Css, &["css"]),
    (ColorCategory::Executable, &["sh", "bash", "zsh", "ps1"]),
    // Text and data
    (ColorCategory::Text, &["txt", "log"]),
    (ColorCategory::Markdown, &["md", "markdown"]),
    (ColorCategory::Json, &["json"]),
    (ColorCategory::Yaml, &["yml", "yaml"]),
    (ColorCategory::Xml, &["xml"]),
    (ColorCategory::Csv, &["csv"]),
    // Archives
    (ColorCategory::Archive, &["zip", "tar", "gz", "bz2", "xz", "rar", "7z"]),
    // Media
    (
        ColorCategory::Image,
        &["jpg", "jpeg", "png", "gif", "bmp", "svg", "webp", "ico"],
    ),
    (ColorCategory::Audio, &["mp3", "wav", "ogg", "flac", "aac"]),
    (ColorCategory::Video, &["mp4", "mkv", "avi", "mov", "webm"]),
    // Generic config
    (ColorCategory::Config, &["conf", "ini", "cfg"]),
];

/// Extensions treated as executables when nothing else matched.
const BINARY_EXTENSIONS: &[&str] = &["exe", "bin", "dll", "so", "dylib"];

/// Extension of a file name as used for classification: lowercased text
/// after the last `.`, or `""` when the name has no dot.
pub fn extension_of(name: &str) -> String {
    name.rsplit_once('.')
        .map(|(_, ext)| ext.to_lowercase())
        .unwrap_or_default()
}

/// Classify a file name. Total over all inputs.
pub fn classify(name: &str, executable_on_disk: bool) -> ColorCategory {
    let ext = extension_of(name);

    if let Some((category, _)) = CATEGORY_TABLE
        .iter()
        .find(|(_, exts)| exts.contains(&ext.as_str()))
    {
        return *category;
    }

    if executable_on_disk || BINARY_EXTENSIONS.contains(&ext.as_str()) {
        return ColorCategory::Executable;
    }

    ColorCategory::Default
}

/// Whether any execute bit is set. Always false off unix.
#[cfg(unix)]
pub fn is_executable(metadata: &Metadata) -> bool {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o111 != 0
}

#[cfg(not(unix))]
pub fn is_executable(_metadata: &Metadata) -> bool {
    false
}

impl ColorCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ColorCategory::Python => "python",
            ColorCategory::CFamily => "c/c++",
            ColorCategory::Java => "java",
            ColorCategory::JavaScript => "javascript",
            ColorCategory::Go => "go",
            ColorCategory::Rust => "rust",
            ColorCategory::Ruby => "ruby",
            ColorCategory::Php => "php",
            ColorCategory::Html => "html",
            ColorCategory::Css => "css",
            ColorCategory::Text => "text",
            ColorCategory::Markdown => "markdown",
            ColorCategory::Json => "json",
            ColorCategory::Yaml => "yaml",
            ColorCategory::Xml => "xml",
            ColorCategory::Csv => "csv",
            ColorCategory::Archive => "archive",
            ColorCategory::Image => "image",
            ColorCategory::Audio => "audio",
            ColorCategory::Video => "video",
            ColorCategory::Config => "config",
            ColorCategory::Executable => "executable",
            ColorCategory::Directory => "directory",
            ColorCategory::Default => "default",
        }
    }

    /// Terminal style for this category
    pub fn style(&self) -> Style {
        match self {
            ColorCategory::Directory | ColorCategory::Text => Style::new().bright_white(),

            ColorCategory::Python => Style::new().bright_blue(),
            ColorCategory::CFamily => Style::new().bright_cyan(),
            ColorCategory::Java | ColorCategory::Executable => Style::new().bright_red(),
            ColorCategory::JavaScript => Style::new().bright_yellow(),
            ColorCategory::Go | ColorCategory::Default => Style::new().bright_green(),
            ColorCategory::Ruby | ColorCategory::Markdown => Style::new().bright_magenta(),

            // 256-color palette
            ColorCategory::Rust | ColorCategory::Json | ColorCategory::Yaml => xterm(208),
            ColorCategory::Php => xterm(165),
            ColorCategory::Html => xterm(202),
            ColorCategory::Css => xterm(27),
            ColorCategory::Xml | ColorCategory::Config => xterm(242),
            ColorCategory::Csv => xterm(107),
            ColorCategory::Archive => xterm(172),
            ColorCategory::Image => xterm(128),
            ColorCategory::Audio => xterm(105),
            ColorCategory::Video => xterm(93),
        }
    }

    /// Render `name` in this category's color, or plain when `color` is off.
    pub fn paint(&self, name: &str, color: bool) -> String {
        if color {
            name.style(self.style()).to_string()
        } else {
            name.to_string()
        }
    }
}

impl fmt::Display for ColorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn xterm(code: u8) -> Style {
    Style::new().color(XtermColors::from(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("main.RS"), "rs");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("Makefile"), "");
        assert_eq!(extension_of(""), "");
        assert_eq!(extension_of("trailing."), "");
        assert_eq!(extension_of(".bashrc"), "bashrc");
    }

    #[test]
    fn test_source_categories() {
        assert_eq!(classify("app.py", false), ColorCategory::Python);
        assert_eq!(classify("lib.HPP", false), ColorCategory::CFamily);
        assert_eq!(classify("Main.java", false), ColorCategory::Java);
        assert_eq!(classify("index.tsx", false), ColorCategory::JavaScript);
        assert_eq!(classify("main.go", false), ColorCategory::Go);
        assert_eq!(classify("lib.rs", false), ColorCategory::Rust);
        assert_eq!(classify("Rakefile.rake", false), ColorCategory::Ruby);
        assert_eq!(classify("index.phtml", false), ColorCategory::Php);
        assert_eq!(classify("index.htm", false), ColorCategory::Html);
        assert_eq!(classify("site.css", false), ColorCategory::Css);
    }

    #[test]
    fn test_data_and_media_categories() {
        assert_eq!(classify("notes.txt", false), ColorCategory::Text);
        assert_eq!(classify("run.log", false), ColorCategory::Text);
        assert_eq!(classify("README.md", false), ColorCategory::Markdown);
        assert_eq!(classify("data.json", false), ColorCategory::Json);
        assert_eq!(classify("ci.yml", false), ColorCategory::Yaml);
        assert_eq!(classify("pom.xml", false), ColorCategory::Xml);
        assert_eq!(classify("table.csv", false), ColorCategory::Csv);
        assert_eq!(classify("backup.tar.gz", false), ColorCategory::Archive);
        assert_eq!(classify("logo.SVG", false), ColorCategory::Image);
        assert_eq!(classify("song.flac", false), ColorCategory::Audio);
        assert_eq!(classify("clip.webm", false), ColorCategory::Video);
        assert_eq!(classify("nginx.conf", false), ColorCategory::Config);
    }

    #[test]
    fn test_table_wins_over_execute_bit() {
        // A chmod +x python script is still a python file
        assert_eq!(classify("tool.py", true), ColorCategory::Python);
        assert_eq!(classify("photo.png", true), ColorCategory::Image);
    }

    #[test]
    fn test_executables() {
        assert_eq!(classify("build.sh", false), ColorCategory::Executable);
        assert_eq!(classify("setup.exe", false), ColorCategory::Executable);
        assert_eq!(classify("libfoo.so", false), ColorCategory::Executable);
        assert_eq!(classify("run", true), ColorCategory::Executable);
        assert_eq!(classify("run", false), ColorCategory::Default);
    }

    #[test]
    fn test_classify_is_total() {
        for name in ["", ".", "..", "...", "a.b.c.d", ".hidden", "no_ext", "ünïcödé.PY", "x."] {
            // Must not panic and must yield a category
            let _ = classify(name, false);
            let _ = classify(name, true);
        }
        assert_eq!(classify("", false), ColorCategory::Default);
        assert_eq!(classify("a.b.c.d", false), ColorCategory::Default);
        assert_eq!(classify("ünïcödé.PY", false), ColorCategory::Python);
    }

    #[test]
    fn test_paint_plain_when_color_off() {
        assert_eq!(ColorCategory::Rust.paint("lib.rs", false), "lib.rs");
    }

    #[test]
    fn test_paint_wraps_with_escapes() {
        let painted = ColorCategory::Python.paint("app.py", true);
        assert!(painted.starts_with("\x1b["));
        assert!(painted.contains("app.py"));
        assert!(painted.ends_with("\x1b[0m"));
    }

    #[test]
    fn test_labels() {
        assert_eq!(ColorCategory::Directory.label(), "directory");
        assert_eq!(ColorCategory::Default.to_string(), "default");
    }
}
