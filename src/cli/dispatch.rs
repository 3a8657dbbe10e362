// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Command dispatch and execution.

use crate::config::{default::example_config, HuConfig};
use crate::error::{ConfigError, HuError, Result, ResultExt};
use crate::links::{self, LinkResolver};
use crate::project::HugoProject;
use crate::svg::{self, SummaryReport, SvgStyle};
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;

use super::args::{Cli, Commands, InitArgs, LinksArgs, OutputFormat, SvgArgs};

/// Run the CLI with the given arguments.
pub fn run(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::BrokenLinks(args) => run_links(&cli, args),
        Commands::Svg(args) => run_svg(&cli, args),
        Commands::Init(args) => run_init(&cli, args),
        Commands::Version => run_version(),
    }
}

/// Open the project root, checking it looks like a Hugo site unless told not to.
fn open_project(cli: &Cli, root: &Path) -> Result<HugoProject> {
    if cli.skip_root_check {
        HugoProject::open_unchecked(root)
    } else {
        HugoProject::open(root)
    }
}

/// Load configuration from --config or from the project root.
fn load_config(cli: &Cli, project: &HugoProject) -> Result<HuConfig> {
    match &cli.config {
        Some(path) => HuConfig::load_from(path),
        None => HuConfig::load(&project.root),
    }
}

/// Run the 404-links command.
fn run_links(cli: &Cli, args: &LinksArgs) -> Result<()> {
    tracing::debug!("Running 404-links command with args: {:?}", args);

    let project = open_project(cli, &args.root.hugo_root)?;
    let config = load_config(cli, &project)?;

    let content_arg = args
        .content_dir
        .clone()
        .unwrap_or_else(|| config.links.content_dir.clone());
    let content_dir = project.content_dir(&content_arg)?;

    let mut ignore = Vec::new();
    for pattern in config.links.ignore.iter().chain(&args.ignore) {
        let compiled = glob::Pattern::new(pattern).map_err(|e| {
            HuError::Config(ConfigError::InvalidValue {
                key: "ignore".to_string(),
                message: format!("'{}': {}", pattern, e),
            })
        })?;
        ignore.push(compiled);
    }

    let resolver = LinkResolver::new(&content_dir, &project.root)
        .with_check_static(args.check_static || config.links.check_static)
        .with_ignore(ignore);

    let format = cli.output_format();
    let progress = match format {
        OutputFormat::Text => {
            println!("{}", links::scan_header(&content_arg));
            scan_progress()
        }
        OutputFormat::Json => ProgressBar::hidden(),
    };

    let report = links::find_broken_links(&resolver, &project.root, &progress)?;

    match format {
        OutputFormat::Text => print!("{}", links::render_text(&report)),
        OutputFormat::Json => println!("{}", links::render_json(&report, &content_dir)),
    }

    report.into_result()
}

/// Progress bar for the link scan; draws to stderr only when it is a terminal.
fn scan_progress() -> ProgressBar {
    let bar = ProgressBar::new(0);
    let style = ProgressStyle::with_template("{spinner} [{bar:30}] {pos}/{len} {wide_msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    bar.set_style(style);
    bar
}

/// Run the svg command.
fn run_svg(cli: &Cli, args: &SvgArgs) -> Result<()> {
    tracing::debug!("Running svg command with args: {:?}", args);

    let project = open_project(cli, &args.root.hugo_root)?;
    let config = load_config(cli, &project)?;

    let content_arg = args
        .content_dir
        .clone()
        .unwrap_or_else(|| config.svg.content_dir.clone());
    let content_dir = project.content_dir(&content_arg)?;

    let mut svg_style = SvgStyle::from(config.svg);
    if let Some(width) = args.width {
        svg_style.width = width;
    }
    if let Some(height) = args.height {
        svg_style.height = height;
    }
    if let Some(ref bg) = args.bg {
        svg_style.bg = bg.clone();
    }
    if let Some(ref fg) = args.fg {
        svg_style.fg = fg.clone();
    }

    let format = cli.output_format();
    if format == OutputFormat::Text {
        println!("\n=== Generating SVGs from {} ===", content_dir.display());
    }

    let summary = svg::generate_all(&content_dir, &svg_style, cli.dry_run)?;

    if format == OutputFormat::Json {
        let report = SummaryReport::new(&summary, &content_dir);
        let json = serde_json::to_string_pretty(&report).context("Failed to encode JSON")?;
        println!("{}", json);
        return Ok(());
    }

    if summary.pages.is_empty() {
        println!("No markdown files (index.md/_index.md) found");
        return Ok(());
    }

    for page in &summary.pages {
        match &page.output {
            Some(out) => println!("  wrote {}", svg::relative_display(out, &content_dir)),
            None => println!("  skip {}", svg::relative_display(&page.source, &content_dir)),
        }
    }

    if summary.dry_run {
        println!(
            "Would generate {} SVG file(s) (dry run, nothing written)",
            summary.written()
        );
    } else {
        println!("Generated {} SVG file(s)", summary.written());
    }

    Ok(())
}

/// Run the init command.
fn run_init(cli: &Cli, args: &InitArgs) -> Result<()> {
    tracing::debug!("Running init command with args: {:?}", args);

    let project = open_project(cli, &args.root.hugo_root)?;
    let config_path = project.root.join("hu.toml");

    if cli.dry_run {
        print!("{}", example_config());
        return Ok(());
    }

    if config_path.exists() && !args.force {
        if !console::user_attended() {
            return Err(HuError::Config(ConfigError::AlreadyExists { path: config_path }));
        }

        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(format!("{} already exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;

        if !confirmed {
            return Err(HuError::Cancelled);
        }
    }

    std::fs::write(&config_path, example_config()).context("Failed to write configuration")?;

    println!("{} Created {}", style("✓").green(), config_path.display());

    Ok(())
}

/// Run the version command.
fn run_version() -> Result<()> {
    println!("hu {}", crate::version::version_string());

    if let Some(sha) = crate::version::git_sha() {
        println!("git commit: {}", sha);
    }
    if let Some(date) = crate::version::git_commit_date() {
        println!("commit date: {}", date);
    }

    Ok(())
}
