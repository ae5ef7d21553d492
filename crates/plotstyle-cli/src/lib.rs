//! Command line front end for `plotstyle`.
//!
//! ```text
//! plotstyle merge base.yaml overrides.json --format json
//! plotstyle check --root . --walk
//! ```
//!
//! The command logic lives here rather than in `main.rs` so it can be driven
//! in-process with arbitrary writers.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use plotstyle::{finalize, load_stylesheet, merge, Stylesheet};
use plotstyle_standards::{
    check_repository, Discovery, StandardsConfig, StandardsError, CONFIG_FILE_NAME,
};

/// Style merging and repository standards checks.
#[derive(Debug, Parser)]
#[command(name = "plotstyle", version, about)]
pub struct Cli {
    /// Increase log verbosity (repeatable)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge stylesheets in order and print the resulting style
    Merge(MergeArgs),
    /// Check license headers and import conventions
    Check(CheckArgs),
}

#[derive(Debug, clap::Args)]
pub struct MergeArgs {
    /// Stylesheets (.yaml, .yml or .json), lowest precedence first
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
    pub format: Format,

    /// Keep the "never" sentinel instead of finalizing it to "none"
    #[arg(long)]
    pub no_finalize: bool,

    /// Treat merge diagnostics as errors
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Repository root
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file (defaults to <root>/plotstyle-standards.yaml, then
    /// to the built-in conventions)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Walk the directory tree instead of asking git for tracked files
    #[arg(long)]
    pub walk: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Yaml,
    Json,
}

/// Log filter directive for a `-v` count.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Runs a parsed command. Returns `Ok(false)` when the command completed but
/// found problems (diagnostics in strict mode, failing files).
pub fn run(cli: Cli, out: &mut dyn Write, err: &mut dyn Write) -> Result<bool> {
    match cli.command {
        Command::Merge(args) => run_merge(args, out, err),
        Command::Check(args) => run_check(args, out, err),
    }
}

fn run_merge(args: MergeArgs, out: &mut dyn Write, err: &mut dyn Write) -> Result<bool> {
    let mut sheet = Stylesheet::new();
    for path in &args.files {
        let layer = load_stylesheet(path)
            .with_context(|| format!("loading stylesheet {}", path.display()))?;
        sheet.extend(layer);
    }

    let mut merged = merge(sheet.layers());
    for diagnostic in &merged.diagnostics {
        writeln!(err, "{}: {}", warning_label(), diagnostic)?;
    }
    if !args.no_finalize {
        finalize(&mut merged.style);
    }

    let rendered = match args.format {
        Format::Yaml => serde_yaml::to_string(&merged.style).context("serializing style")?,
        Format::Json => {
            let mut json =
                serde_json::to_string_pretty(&merged.style).context("serializing style")?;
            json.push('\n');
            json
        }
    };
    out.write_all(rendered.as_bytes())?;

    Ok(!(args.strict && merged.has_diagnostics()))
}

fn warning_label() -> console::StyledObject<&'static str> {
    console::style("warning").yellow().bold().for_stderr()
}

fn run_check(args: CheckArgs, out: &mut dyn Write, err: &mut dyn Write) -> Result<bool> {
    let mut config = match &args.config {
        Some(path) => StandardsConfig::load(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => match StandardsConfig::discover(&args.root)? {
            Some(config) => config,
            None => {
                tracing::info!(
                    root = %args.root.display(),
                    "no {} found, using the default conventions",
                    CONFIG_FILE_NAME
                );
                StandardsConfig::default()
            }
        },
    };
    if args.walk {
        config.discovery = Discovery::Walk;
    }
    if config.is_empty() {
        bail!("configuration enables no checks");
    }

    let report = match check_repository(&args.root, &config) {
        Err(StandardsError::NotARepository(root)) => {
            tracing::warn!(root = %root.display(), "not a git repository, walking the tree instead");
            config.discovery = Discovery::Walk;
            check_repository(&args.root, &config)?
        }
        other => other?,
    };

    for (check, paths) in report.iter() {
        for path in paths {
            writeln!(out, "{}: {}", check, path)?;
        }
        if paths.is_empty() {
            let label = console::style(check).green().for_stderr();
            writeln!(err, "{}: {} files ok", label, report.checked(check))?;
        } else {
            let label = console::style(check).red().bold().for_stderr();
            writeln!(
                err,
                "{}: {} of {} files failed",
                label,
                paths.len(),
                report.checked(check)
            )?;
        }
    }

    Ok(report.is_success())
}
