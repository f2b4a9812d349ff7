//! Settings resolution: command line, config file, interactive prompts.
//!
//! Merge policy, per field:
//! 1. Command-line value, when given
//! 2. Config file value, when set
//! 3. Default (no filters, unlimited depth, no path)
//!
//! Prompting is the last resort for a bare invocation only: it happens when
//! the command line gave nothing AND the config file contributed nothing.
//! In that case every field is asked for in turn.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use tracing::{debug, info};

use crate::config::Config;
use crate::error::{Result, TreeError};
use crate::prompt::Prompter;
use crate::types::Settings;

const PATH_PROMPT: &str = "Enter directory path (leave empty for current): ";
const INCLUDE_PROMPT: &str =
    "Enter file extensions to include (comma separated, leave empty for all): ";
const EXCLUDE_PROMPT: &str =
    "Enter file/folder names to exclude (comma separated, leave empty for none): ";
const PREFIX_PROMPT: &str = "Enter prefixes to exclude (comma separated, leave empty for none): ";
const DEPTH_PROMPT: &str = "Enter maximum directory depth (number, leave empty for no limit): ";

/// Whether the run has to fall back to interactive prompts.
pub fn needs_prompt(cli: &Config, file: &Config) -> bool {
    cli.is_empty() && file.is_empty()
}

/// Merge CLI overrides onto the config file and build validated settings.
///
/// `prompter` is consulted only when [`needs_prompt`] holds.
pub fn resolve<R: BufRead, W: Write>(
    cli: &Config,
    file: &Config,
    prompter: &mut Prompter<R, W>,
) -> Result<Settings> {
    let merged = if needs_prompt(cli, file) {
        info!("no settings from command line or config file, prompting");
        ask_all(prompter)?
    } else {
        file.clone().overlay(cli)
    };

    let settings = into_settings(merged)?;
    validate_root(&settings)?;
    debug!(?settings, "resolved settings");
    Ok(settings)
}

/// Turn merged config values into [`Settings`]. Fails only on a missing path.
pub fn into_settings(merged: Config) -> Result<Settings> {
    let root = merged.path.ok_or(TreeError::MissingPath)?;

    Ok(Settings::new(root)
        .with_include_extensions(merged.include_extensions.unwrap_or_default())
        .with_exclude_names(merged.exclude_names.unwrap_or_default())
        .with_exclude_prefixes(merged.exclude_prefixes.unwrap_or_default())
        .with_max_depth(merged.max_depth.flatten()))
}

/// The root must be an existing directory.
pub fn validate_root(settings: &Settings) -> Result<()> {
    if settings.root.is_dir() {
        Ok(())
    } else {
        Err(TreeError::InvalidPath(settings.root.clone()))
    }
}

fn ask_all<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<Config> {
    let path = prompter.line(PATH_PROMPT)?;
    let path = if path.is_empty() { ".".to_string() } else { path };

    let include = prompter.list(INCLUDE_PROMPT)?;
    let exclude = prompter.list(EXCLUDE_PROMPT)?;
    let prefixes = prompter.list(PREFIX_PROMPT)?;
    let depth = prompter.depth(DEPTH_PROMPT)?;

    Ok(Config {
        source: None,
        path: Some(PathBuf::from(path)),
        include_extensions: non_empty(include),
        exclude_names: non_empty(exclude),
        exclude_prefixes: non_empty(prefixes),
        max_depth: Some(depth),
        malformed: false,
    })
}

fn non_empty(items: Vec<String>) -> Option<Vec<String>> {
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn no_input() -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(Vec::new()), Vec::new())
    }

    fn scripted(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_cli_overrides_config_per_field() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let file = Config {
            path: Some(PathBuf::from("/does/not/matter")),
            include_extensions: Some(vec!["md".into()]),
            exclude_names: Some(vec!["target".into()]),
            max_depth: Some(Some(5)),
            ..Config::default()
        };
        let cli = Config {
            path: Some(temp.path().to_path_buf()),
            include_extensions: Some(vec!["rs".into()]),
            ..Config::default()
        };

        let mut prompter = no_input();
        let settings = resolve(&cli, &file, &mut prompter)?;

        assert_eq!(settings.root, temp.path());
        assert!(settings.include_extensions.contains("rs"));
        assert!(!settings.include_extensions.contains("md"));
        assert!(settings.exclude_names.contains("target"));
        assert_eq!(settings.max_depth, Some(5));
        // No prompting happened
        assert!(prompter.into_output().is_empty());
        Ok(())
    }

    #[test]
    fn test_config_alone_is_enough() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let file = Config {
            path: Some(temp.path().to_path_buf()),
            max_depth: Some(None),
            ..Config::default()
        };

        let settings = resolve(&Config::default(), &file, &mut no_input())?;
        assert_eq!(settings.root, temp.path());
        assert_eq!(settings.max_depth, None);
        Ok(())
    }

    #[test]
    fn test_prompts_when_nothing_given() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let answers = format!("{}\npy, rs\n\n.\nx\n2\n", temp.path().display());
        let mut prompter = scripted(&answers);

        let settings = resolve(&Config::default(), &Config::default(), &mut prompter)?;
        assert_eq!(settings.root, temp.path());
        assert_eq!(settings.include_extensions.len(), 2);
        assert!(settings.exclude_names.is_empty());
        assert!(settings.exclude_prefixes.contains("."));
        assert_eq!(settings.max_depth, Some(2));

        let transcript = String::from_utf8_lossy(&prompter.into_output()).into_owned();
        assert!(transcript.contains(PATH_PROMPT));
        assert!(transcript.contains("Invalid input"));
        Ok(())
    }

    #[test]
    fn test_empty_path_answer_means_current_dir() -> Result<()> {
        let settings = resolve(&Config::default(), &Config::default(), &mut scripted("\n"))?;
        assert_eq!(settings.root, PathBuf::from("."));
        assert_eq!(settings.max_depth, None);
        Ok(())
    }

    #[test]
    fn test_filters_without_path_is_missing_path() {
        let cli = Config {
            exclude_names: Some(vec!["target".into()]),
            ..Config::default()
        };
        let err = resolve(&cli, &Config::default(), &mut no_input()).unwrap_err();
        assert!(matches!(err, TreeError::MissingPath));
    }

    #[test]
    fn test_invalid_root_rejected() {
        let cli = Config {
            path: Some(PathBuf::from("/nonexistent/path/xyz")),
            ..Config::default()
        };
        let err = resolve(&cli, &Config::default(), &mut no_input()).unwrap_err();
        assert!(matches!(err, TreeError::InvalidPath(_)));
    }

    #[test]
    fn test_file_root_rejected() -> Result<()> {
        let temp = tempfile::tempdir()?;
        let file = temp.path().join("plain.txt");
        std::fs::write(&file, "")?;

        let settings = Settings::new(&file);
        assert!(matches!(
            validate_root(&settings),
            Err(TreeError::InvalidPath(_))
        ));
        Ok(())
    }
}
