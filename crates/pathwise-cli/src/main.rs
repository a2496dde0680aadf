//! pathwise CLI: the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use pathwise_core::model::LearningStyle;

mod commands;

#[derive(Parser)]
#[command(name = "pathwise", version, about = "Adaptive training path tooling")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Arguments shared by `evaluate` and `record`.
#[derive(clap::Args)]
struct AttemptArgs {
    /// Learner path JSON file
    #[arg(long)]
    path: PathBuf,

    /// Id of the path item just completed
    #[arg(long)]
    item: String,

    /// Quiz score (0-100)
    #[arg(long)]
    score: u32,

    /// Catalog .toml file or directory (defaults to the configured catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Where to write the updated path (defaults to overwriting --path)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Output format: text, json
    #[arg(long, default_value = "text")]
    format: String,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the adaptive engine for a completed item
    Evaluate(AttemptArgs),

    /// Record a quiz attempt: run the engine, store the score, unlock the next item
    Record(AttemptArgs),

    /// Reorder a path for a learning-style preference
    Reorder {
        /// Learner path JSON file
        #[arg(long)]
        path: PathBuf,

        /// Preference override: visual, text, hands-on (defaults to the path's)
        #[arg(long)]
        preference: Option<LearningStyle>,

        /// Catalog .toml file or directory
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Where to write the reordered path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Assign catalog assets to a learner path
    Assign {
        /// Learner path JSON file
        #[arg(long)]
        path: PathBuf,

        /// Asset ids (comma-separated)
        #[arg(long)]
        assets: String,

        /// Mark the items as self-assigned (started immediately)
        #[arg(long)]
        self_assigned: bool,

        /// Catalog .toml file or directory
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Where to write the updated path
        #[arg(long)]
        output: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Summarize progress on a path
    Summary {
        /// Learner path JSON file
        #[arg(long)]
        path: PathBuf,

        /// Catalog .toml file or directory
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format: text, json
        #[arg(long, default_value = "text")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate catalog files and, optionally, a learner path
    Validate {
        /// Catalog .toml file or directory
        #[arg(long)]
        catalog: PathBuf,

        /// Learner path JSON file to check against the catalog
        #[arg(long)]
        path: Option<PathBuf>,
    },

    /// Create starter config, catalog, and learner path
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("pathwise=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Evaluate(args) => commands::evaluate::execute(
            args.path,
            args.item,
            args.score,
            args.catalog,
            args.output,
            args.format,
            args.config,
        ),
        Commands::Record(args) => commands::record::execute(
            args.path,
            args.item,
            args.score,
            args.catalog,
            args.output,
            args.format,
            args.config,
        ),
        Commands::Reorder {
            path,
            preference,
            catalog,
            output,
            config,
        } => commands::reorder::execute(path, preference, catalog, output, config),
        Commands::Assign {
            path,
            assets,
            self_assigned,
            catalog,
            output,
            config,
        } => commands::assign::execute(path, assets, self_assigned, catalog, output, config),
        Commands::Summary {
            path,
            catalog,
            format,
            config,
        } => commands::summary::execute(path, catalog, format, config),
        Commands::Validate { catalog, path } => commands::validate::execute(catalog, path),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
