use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "matdoc")]
#[command(
    version,
    about = "Sphinx reStructuredText generator for MATLAB source trees"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the hierarchical automodule document for a MATLAB source tree
    Generate {
        #[arg(help = "Root folder of the MATLAB code")]
        root: PathBuf,
        #[arg(long, short, help = "Output RST file (default: documentation.rst)")]
        output: Option<PathBuf>,
    },

    /// Show the detected folder structure without writing anything
    Scan {
        #[arg(help = "Root folder of the MATLAB code")]
        root: PathBuf,
        #[arg(
            short = 'f',
            long,
            default_value = "text",
            help = "Output format: text, json"
        )]
        format: String,
    },

    /// Assemble index.rst from the documentation subfolders
    Index {
        #[arg(long, short, help = "Sphinx source directory (default: source)")]
        source: Option<PathBuf>,
        #[arg(long, short, help = "Index file name inside the source directory")]
        output: Option<String>,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            help = "Output format: toml, json, yaml"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

fn main() -> ExitCode {
    match run_cli() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Generate { root, output } => {
            matdoc::cli::commands::generate::run(&root, output)?;
        }
        Commands::Scan { root, format } => {
            matdoc::cli::commands::scan::run(&root, &format)?;
        }
        Commands::Index { source, output } => {
            matdoc::cli::commands::index::run(source, output)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                matdoc::cli::commands::config::show(&format)?;
            }
            ConfigAction::Path => {
                matdoc::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    matdoc::cli::commands::config::init_global(force)?;
                } else {
                    matdoc::cli::commands::config::init_project(force)?;
                }
            }
        },
    }

    Ok(())
}
