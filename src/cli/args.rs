// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// hu - Hugo utilities
///
/// Automate tasks for Hugo static site generator projects. Commands assume
/// they are run from the root of the Hugo project.
#[derive(Parser, Debug)]
#[command(name = "hu")]
#[command(author = "Eshan Roy")]
#[command(version)]
#[command(
    about = "Hugo utilities - Automate tasks for Hugo static site generator projects",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// The command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Output format for machine-readable output
    #[arg(long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show what would be written without writing it
    #[arg(long, global = true)]
    pub dry_run: bool,

    /// Do not require a Hugo configuration file in the project root
    #[arg(long, global = true)]
    pub skip_root_check: bool,
}

/// Output format for CI and scripting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text output (default)
    #[default]
    Text,
    /// JSON output for machine parsing
    Json,
}

/// Available commands.
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Find broken links in Hugo markdown files
    #[command(name = "404-links")]
    BrokenLinks(LinksArgs),

    /// Generate SVG preview images from page front matter
    Svg(SvgArgs),

    /// Write an example hu.toml into the project root
    Init(InitArgs),

    /// Print version information
    Version,
}

/// Project root selection shared by all commands.
#[derive(Args, Debug, Clone)]
pub struct RootArgs {
    /// Path to Hugo project root
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub hugo_root: PathBuf,
}

impl Default for RootArgs {
    fn default() -> Self {
        Self {
            hugo_root: PathBuf::from("."),
        }
    }
}

/// Arguments for the 404-links command.
#[derive(Args, Debug, Default, Clone)]
pub struct LinksArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Path to Hugo content directory (default: content)
    #[arg(long, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Also verify /path/file.ext links against static/ and content/
    #[arg(long)]
    pub check_static: bool,

    /// Glob pattern of links to skip (repeatable)
    #[arg(long, value_name = "PATTERN")]
    pub ignore: Vec<String>,
}

/// Arguments for the svg command.
#[derive(Args, Debug, Default, Clone)]
pub struct SvgArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Path to Hugo content directory (default: content)
    #[arg(long, value_name = "DIR")]
    pub content_dir: Option<PathBuf>,

    /// Image width in px (default: 1200)
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height in px (default: 630)
    #[arg(long)]
    pub height: Option<u32>,

    /// Background color (default: #f3f4f6)
    #[arg(long)]
    pub bg: Option<String>,

    /// Foreground color (default: #0b1220)
    #[arg(long)]
    pub fg: Option<String>,
}

/// Arguments for the init command.
#[derive(Args, Debug, Default, Clone)]
pub struct InitArgs {
    #[command(flatten)]
    pub root: RootArgs,

    /// Overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,
}

impl Cli {
    /// The effective output format.
    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }
}
