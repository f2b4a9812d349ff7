//! colortree CLI - colorized directory trees with filters
//!
//! Resolves settings (flags → config file → prompts), validates the root,
//! then streams the tree and its totals to stdout. Warnings and diagnostics
//! go to stderr through `tracing`.

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use colortree::config::{self, Config, DEFAULT_CONFIG_FILE};
use colortree::logging;
use colortree::prompt::Prompter;
use colortree::settings;
use colortree::types::split_list;
use colortree::{RenderOptions, TreeRenderer};

/// Directory tree viewer with colors, filters and config support
///
/// Examples:
///   colortree .                         # Full tree of the current directory
///   colortree src -i rs,toml            # Only Rust and TOML files
///   colortree -e target,.git --ep _ -d 2
///   colortree . -d 1 --save-config      # Remember these settings
#[derive(Parser, Debug)]
#[command(name = "colortree")]
#[command(version)]
#[command(about, long_about = None)]
pub struct Cli {
    /// Directory to render
    ///
    /// Falls back to the config file, then to an interactive prompt.
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Only show files with these extensions (comma separated)
    ///
    /// Directories are always shown. Example: -i py,rs,md
    #[arg(short, long, value_name = "EXTS")]
    pub include: Option<String>,

    /// Hide files and directories with these exact names (comma separated)
    #[arg(short, long, value_name = "NAMES")]
    pub exclude: Option<String>,

    /// Hide files and directories starting with these prefixes (comma separated)
    #[arg(long = "exclude-prefixes", visible_alias = "ep", value_name = "PREFIXES")]
    pub exclude_prefixes: Option<String>,

    /// Maximum depth to descend
    ///
    /// 0 lists only the root's direct children. Omit for no limit.
    #[arg(short, long, value_name = "N")]
    pub depth: Option<usize>,

    /// Config file to read (and write with --save-config)
    #[arg(long, value_name = "FILE", default_value = DEFAULT_CONFIG_FILE)]
    pub config_file: PathBuf,

    /// Merge the given options into the config file instead of rendering
    #[arg(long, conflicts_with = "show_config")]
    pub save_config: bool,

    /// Print the config file and exit
    #[arg(long)]
    pub show_config: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Settings given on the command line, in config form.
    ///
    /// Lists that split to nothing count as not given.
    pub fn overrides(&self) -> Config {
        Config {
            source: None,
            path: self.path.clone(),
            include_extensions: self.include.as_deref().and_then(list_arg),
            exclude_names: self.exclude.as_deref().and_then(list_arg),
            exclude_prefixes: self.exclude_prefixes.as_deref().and_then(list_arg),
            max_depth: self.depth.map(Some),
            malformed: false,
        }
    }
}

fn list_arg(raw: &str) -> Option<Vec<String>> {
    let items = split_list(raw);
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::initialize_logging(cli.verbose);
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    if cli.show_config {
        let stdout = io::stdout();
        config::show_config(&cli.config_file, &mut stdout.lock())
            .with_context(|| format!("Error reading config file {}", cli.config_file.display()))?;
        return Ok(());
    }

    if cli.save_config {
        save_config(cli)?;
        return Ok(());
    }

    let file = Config::load(&cli.config_file);
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stderr());
    let settings = settings::resolve(&cli.overrides(), &file, &mut prompter)?;

    let options = RenderOptions {
        color: !cli.no_color,
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    TreeRenderer::new(&settings, options).render_report(&mut out)?;
    out.flush()?;

    Ok(())
}

/// Read-merge-write: existing file values survive unless overridden.
///
/// A file that exists but does not parse is left untouched.
fn save_config(cli: &Cli) -> Result<()> {
    let existing = Config::load(&cli.config_file);
    if existing.malformed {
        bail!(
            "Refusing to overwrite unreadable config file {}; fix or remove it first",
            cli.config_file.display()
        );
    }
    let merged = existing.overlay(&cli.overrides());
    merged.save(&cli.config_file)?;
    println!("Configuration saved to {}", cli.config_file.display());
    Ok(())
}
