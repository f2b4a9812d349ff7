//! Persistent filter settings in a flat, sectioned TOML file.
//!
//! ## Example
//!
//! ```toml
//! [GENERAL]
//! path = "/home/me/project"
//!
//! [FILTERS]
//! include_extensions = "py,rs"
//! exclude_names = "target,node_modules"
//! exclude_prefixes = "."
//!
//! [DISPLAY]
//! max_depth = -1
//! ```
//!
//! Lists are comma-separated strings; TOML string arrays are accepted on
//! read as well. `max_depth = -1` means unlimited.
//!
//! Loading never fails: an unreadable or malformed file is reported as a
//! warning and treated as empty, and a malformed field is dropped on its
//! own without affecting its neighbours.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Result, TreeError};
use crate::types::split_list;

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "colortree.toml";

/// Stored form of "no depth limit".
pub const UNLIMITED_DEPTH: i64 = -1;

/// Values read from (or destined for) the config file.
///
/// Every field is optional; `None` means the file does not set it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Source file for this config (for display).
    pub source: Option<PathBuf>,

    pub path: Option<PathBuf>,
    pub include_extensions: Option<Vec<String>>,
    pub exclude_names: Option<Vec<String>>,
    pub exclude_prefixes: Option<Vec<String>>,

    /// Outer `None`: not set. `Some(None)`: explicitly unlimited.
    pub max_depth: Option<Option<usize>>,

    /// The file exists but could not be read or parsed as TOML.
    pub malformed: bool,
}

/// On-disk layout. Field values stay untyped until [`Config::from_raw`]
/// so one bad value cannot poison the whole file.
#[derive(Debug, Default, Deserialize, Serialize)]
struct RawConfig {
    #[serde(rename = "GENERAL", default)]
    general: RawGeneral,
    #[serde(rename = "FILTERS", default)]
    filters: RawFilters,
    #[serde(rename = "DISPLAY", default)]
    display: RawDisplay,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct RawGeneral {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    path: Option<toml::Value>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct RawFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    include_extensions: Option<toml::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exclude_names: Option<toml::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exclude_prefixes: Option<toml::Value>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
struct RawDisplay {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_depth: Option<toml::Value>,
}

impl Config {
    /// Load the config at `path`. A missing file yields an empty config.
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            debug!(path = %path.display(), "no config file");
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content, path),
            Err(err) => {
                report(path, format!("cannot read file: {err}"));
                Self {
                    source: Some(path.to_path_buf()),
                    malformed: true,
                    ..Self::default()
                }
            }
        }
    }

    /// Parse config text; `source` is only used for messages.
    pub fn parse(content: &str, source: &Path) -> Self {
        match toml::from_str::<RawConfig>(content) {
            Ok(raw) => Self::from_raw(raw, source),
            Err(err) => {
                report(source, err.message().to_string());
                Self {
                    source: Some(source.to_path_buf()),
                    malformed: true,
                    ..Self::default()
                }
            }
        }
    }

    fn from_raw(raw: RawConfig, source: &Path) -> Self {
        Self {
            source: Some(source.to_path_buf()),
            path: raw
                .general
                .path
                .and_then(|v| decode_path(v, source)),
            include_extensions: raw
                .filters
                .include_extensions
                .and_then(|v| decode_list(v, "include_extensions", source)),
            exclude_names: raw
                .filters
                .exclude_names
                .and_then(|v| decode_list(v, "exclude_names", source)),
            exclude_prefixes: raw
                .filters
                .exclude_prefixes
                .and_then(|v| decode_list(v, "exclude_prefixes", source)),
            max_depth: raw
                .display
                .max_depth
                .and_then(|v| decode_depth(v, source)),
            malformed: false,
        }
    }

    /// True when the file contributed no values at all.
    pub fn is_empty(&self) -> bool {
        self.path.is_none()
            && self.include_extensions.is_none()
            && self.exclude_names.is_none()
            && self.exclude_prefixes.is_none()
            && self.max_depth.is_none()
    }

    /// Field-wise overlay: every value set in `overrides` replaces ours.
    pub fn overlay(self, overrides: &Config) -> Self {
        Self {
            source: self.source,
            path: overrides.path.clone().or(self.path),
            include_extensions: overrides
                .include_extensions
                .clone()
                .or(self.include_extensions),
            exclude_names: overrides.exclude_names.clone().or(self.exclude_names),
            exclude_prefixes: overrides.exclude_prefixes.clone().or(self.exclude_prefixes),
            max_depth: overrides.max_depth.or(self.max_depth),
            malformed: self.malformed,
        }
    }

    /// Serialize to the on-disk TOML layout.
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        let raw = RawConfig {
            general: RawGeneral {
                path: self
                    .path
                    .as_ref()
                    .map(|p| toml::Value::String(p.display().to_string())),
            },
            filters: RawFilters {
                include_extensions: self.include_extensions.as_deref().map(encode_list),
                exclude_names: self.exclude_names.as_deref().map(encode_list),
                exclude_prefixes: self.exclude_prefixes.as_deref().map(encode_list),
            },
            display: RawDisplay {
                max_depth: self.max_depth.map(|depth| {
                    toml::Value::Integer(depth.map_or(UNLIMITED_DEPTH, |d| d as i64))
                }),
            },
        };
        toml::to_string(&raw)
    }

    /// Write this config to `path`, replacing any previous content.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = self.to_toml().map_err(|err| TreeError::ConfigWrite {
            path: path.to_path_buf(),
            source: io::Error::other(err),
        })?;
        fs::write(path, content).map_err(|source| TreeError::ConfigWrite {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }
}

/// Print the config file at `path` for `--show-config`.
pub fn show_config<W: Write>(path: &Path, out: &mut W) -> io::Result<()> {
    if !path.exists() {
        writeln!(out, "No config file found at {}", path.display())?;
        return Ok(());
    }

    let content = fs::read_to_string(path)?;
    writeln!(out, "Current configuration from {}:", path.display())?;
    writeln!(out)?;
    write!(out, "{}", content)?;
    if !content.ends_with('\n') {
        writeln!(out)?;
    }
    Ok(())
}

fn report(source: &Path, reason: String) {
    let err = TreeError::ConfigParse {
        path: source.to_path_buf(),
        reason,
    };
    warn!("{err}");
}

fn encode_list(items: &[String]) -> toml::Value {
    toml::Value::String(items.join(","))
}

fn decode_path(value: toml::Value, source: &Path) -> Option<PathBuf> {
    match value {
        toml::Value::String(s) if !s.trim().is_empty() => Some(PathBuf::from(s.trim())),
        toml::Value::String(_) => None,
        other => {
            report(source, format!("'path' must be a string, got {}", other.type_str()));
            None
        }
    }
}

fn decode_list(value: toml::Value, key: &str, source: &Path) -> Option<Vec<String>> {
    match value {
        toml::Value::String(s) => Some(split_list(&s)),
        toml::Value::Array(items) => {
            let mut out = Vec::with_capacity(items.len());
            for item in items {
                match item {
                    toml::Value::String(s) => out.extend(split_list(&s)),
                    other => {
                        report(
                            source,
                            format!("'{key}' items must be strings, got {}", other.type_str()),
                        );
                        return None;
                    }
                }
            }
            Some(out)
        }
        other => {
            report(
                source,
                format!("'{key}' must be a comma-separated string, got {}", other.type_str()),
            );
            None
        }
    }
}

fn decode_depth(value: toml::Value, source: &Path) -> Option<Option<usize>> {
    let parsed = match &value {
        toml::Value::Integer(n) => Some(*n),
        toml::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    match parsed {
        Some(UNLIMITED_DEPTH) => Some(None),
        Some(n) if n >= 0 => Some(Some(n as usize)),
        _ => {
            report(source, format!("Invalid 'max_depth' value: {value}"));
            None
        }
    }
}
