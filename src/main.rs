//! CLI entry point for projtree

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use projtree::{
    DEFAULT_TITLE, Destination, OutputFormat, StructureConfig, StructureReport, TreeRenderer, emit,
};

#[derive(Parser, Debug)]
#[command(name = "projtree")]
#[command(about = "Render a project's directory layout as an annotated Markdown tree")]
#[command(version)]
struct Args {
    /// Project root directory
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Write the document to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Maximum depth below the root (negative values show only the root)
    #[arg(long = "max-depth", default_value_t = 4, allow_negative_numbers = true)]
    max_depth: i64,

    /// Additional directory names to exclude (matched by containment)
    #[arg(long = "exclude-dirs", num_args = 1..)]
    exclude_dirs: Vec<String>,

    /// Additional file patterns to exclude ("*.ext" matches by suffix)
    #[arg(long = "exclude-files", num_args = 1..)]
    exclude_files: Vec<String>,

    /// Document title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Output the report as JSON instead of Markdown
    #[arg(long)]
    json: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Args {
    fn structure_config(&self) -> StructureConfig {
        // Negative depths collapse to the root line only
        let max_depth = usize::try_from(self.max_depth).unwrap_or(0);
        StructureConfig::new(&self.root)
            .with_excluded_dirs(self.exclude_dirs.iter().cloned())
            .with_excluded_files(self.exclude_files.iter().cloned())
            .with_max_depth(max_depth)
    }

    fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Markdown
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let config = args.structure_config();
    tracing::debug!(?config, "resolved configuration");

    let renderer = TreeRenderer::new(config);
    let report = StructureReport::generate(&renderer, args.title.as_str())
        .with_context(|| format!("failed to scan '{}'", args.root.display()))?;
    let document = args.format().render(&report)?;

    emit(&document, &Destination::from_option(args.output.clone()))?;
    Ok(())
}

fn init_logging(verbosity: u8, quiet: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if quiet {
        "error"
    } else {
        match verbosity {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("projtree={}", level)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
