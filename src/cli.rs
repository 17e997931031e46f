//! Command-line interface for the `searchpath` binary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::env::ProcessEnv;
use crate::search_path::PathResolver;
use crate::settings::{load_default_settings, load_settings, Settings};

#[derive(Debug, Parser)]
#[command(name = "searchpath", version, about = "Locate files across an ordered search path")]
pub struct Cli {
    /// Settings file (defaults to $SEARCHPATH_CONFIG or the per-user config file)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Directories to append; repeatable, `:`-separated lists allowed
    #[arg(short = 'd', long = "dir", global = true)]
    pub dirs: Vec<String>,

    /// Suffixes to append; repeatable, the leading dot is optional
    #[arg(short = 's', long = "suffix", global = true)]
    pub suffixes: Vec<String>,

    /// Do not look in the current directory first
    #[arg(long, global = true)]
    pub no_cwd: bool,

    /// Prefer bare names anywhere in the path over suffixed ones
    #[arg(long, global = true)]
    pub allow_suffixless: bool,

    /// Debug-level logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to daily files in this directory
    #[arg(long, global = true)]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the first existing path for NAME
    Resolve { name: String },
    /// List file names available across the search path
    Find {
        /// Regular expression a name must contain a match for
        pattern: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Print the effective search path configuration
    Show {
        #[arg(long)]
        json: bool,
    },
}

/// Outcome of a command, mapped to the process exit code by `main`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Found,
    NotFound,
}

#[derive(Serialize)]
struct ShowView<'a> {
    directories: &'a [String],
    suffixes: &'a [String],
    search_cwd_first: bool,
    allow_suffixless: bool,
}

impl Cli {
    /// Settings file contents merged with command-line overrides.
    pub fn resolver(&self) -> Result<PathResolver> {
        let settings = match &self.config {
            Some(path) => load_settings(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => load_default_settings(&ProcessEnv).context("loading default settings")?,
        };
        Ok(self.apply_overrides(settings.build()))
    }

    fn apply_overrides(&self, mut resolver: PathResolver) -> PathResolver {
        resolver
            .append_directories(self.dirs.as_slice())
            .append_suffixes(self.suffixes.as_slice());
        if self.no_cwd {
            resolver.set_search_cwd_first(false);
        }
        if self.allow_suffixless {
            resolver.set_allow_suffixless(true);
        }
        resolver
    }
}

/// Run the parsed command, writing results to `out`.
pub fn run(cli: &Cli, out: &mut impl std::io::Write) -> Result<Outcome> {
    let resolver = cli.resolver()?;
    match &cli.command {
        Command::Resolve { name } => match resolver.resolve(name) {
            Some(path) => {
                writeln!(out, "{}", path.display())?;
                Ok(Outcome::Found)
            }
            None => Ok(Outcome::NotFound),
        },
        Command::Find { pattern, json } => {
            let names = resolver
                .find_str(pattern.as_deref())
                .context("invalid find pattern")?;
            if *json {
                writeln!(out, "{}", serde_json::to_string(&names)?)?;
            } else {
                for name in &names {
                    writeln!(out, "{name}")?;
                }
            }
            Ok(Outcome::Found)
        }
        Command::Show { json } => {
            if *json {
                let view = ShowView {
                    directories: resolver.directories(),
                    suffixes: resolver.suffixes(),
                    search_cwd_first: resolver.search_cwd_first(),
                    allow_suffixless: resolver.allow_suffixless(),
                };
                writeln!(out, "{}", serde_json::to_string_pretty(&view)?)?;
            } else {
                let settings = Settings::from_resolver(&resolver);
                write!(out, "{}", toml::to_string_pretty(&settings)?)?;
            }
            Ok(Outcome::Found)
        }
    }
}
