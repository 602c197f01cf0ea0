use clap::{Parser, Subcommand};
use seminar_site::{config, output, site};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(name = "seminar-site")]
#[command(about = "Static site generator for a section's seminar series")]
#[command(long_about = "\
Static site generator for a section's seminar series

Each talk is one markdown file with a small front-matter header. The build
writes a detail page per talk, a seminar listing grouped by season, and the
section's home, JSM and awards pages.

Project structure:

  project/
  ├── config.toml                  # Site config (optional)
  ├── _talks/
  │   └── 2025-11-11-wang.md       # → talks/2025-11-11-wang.html
  └── dist/                        # Generated site

Talk file:

  ---
  date: November 11, 2025
  time: 3:00–4:00 PM ET
  season: Fall 2025
  speaker: Jane Doe
  affiliation: Kelley School of Business
  website: https://example.edu/~jdoe
  zoom: https://zoom.us/j/123
  ---
  # Talk Title

  Abstract in markdown.

Run 'seminar-site gen-config' to generate a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Project root holding config.toml
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Talks directory (overrides config.toml)
    #[arg(long, global = true)]
    source: Option<PathBuf>,

    /// Output directory (overrides config.toml)
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Build the full site (default)
    Build,
    /// Parse and validate all talks without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.as_ref().unwrap_or(&Command::Build) {
        Command::Build => {
            let site_config = resolve_config(&cli)?;
            let report = site::build_site(&site_config, output::print_build_event)?;
            output::print_build_summary(&report);
        }
        Command::Check => {
            let site_config = resolve_config(&cli)?;
            let report = site::check_site(&site_config)?;
            output::print_check_output(&report);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr so they never mix with progress output.
/// `RUST_LOG` takes precedence over `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Load `config.toml` from the project root and apply CLI overrides.
///
/// Configured directories are relative to the root; `--source` and `--output`
/// are taken as given.
fn resolve_config(cli: &Cli) -> Result<config::SiteConfig, config::ConfigError> {
    let mut site_config = config::load_config(&cli.root)?.rooted(&cli.root);
    if let Some(source) = &cli.source {
        site_config.talks_dir = source.clone();
    }
    if let Some(output) = &cli.output {
        site_config.output_dir = output.clone();
    }
    tracing::debug!(
        talks_dir = %site_config.talks_dir.display(),
        output_dir = %site_config.output_dir.display(),
        "resolved configuration"
    );
    Ok(site_config)
}
