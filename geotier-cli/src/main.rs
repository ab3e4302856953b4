//! geotier CLI - Command-line interface
//!
//! Inspect geohashes and coverage sets, and run tiered proximity queries
//! over a JSON file of entities.

mod commands;
mod error;
mod runner;

use clap::{Parser, Subcommand};

use commands::common::{AreaArgs, CenterArgs};
use commands::config::ConfigCommands;
use commands::query::QueryArgs;
use error::CliError;
use runner::CliRunner;

#[derive(Parser)]
#[command(name = "geotier")]
#[command(version = geotier::VERSION)]
#[command(about = "Tiered proximity search over geohash-indexed entities", long_about = None)]
struct Cli {
    /// Enable debug-level logging
    #[arg(long, global = true)]
    debug: bool,

    /// Mirror log output to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a point as a geohash
    Encode {
        #[command(flatten)]
        center: CenterArgs,

        /// Number of characters (1-12)
        #[arg(long, short, default_value = "12")]
        precision: usize,
    },

    /// Show the bounds of a geohash
    Decode {
        /// Geohash to decode
        geohash: String,
    },

    /// Show the eight neighbors of a geohash
    Neighbors {
        /// Geohash whose neighbors to list
        geohash: String,
    },

    /// Show the prefixes a query would scan
    Coverage {
        #[command(flatten)]
        center: CenterArgs,

        #[command(flatten)]
        area: AreaArgs,
    },

    /// Find entities near a point
    Query(QueryArgs),

    /// Manage ~/.geotier/config.ini
    #[command(subcommand)]
    Config(ConfigCommands),
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Encode { center, precision } => commands::geohash::run_encode(&center, precision),
        Commands::Decode { geohash } => commands::geohash::run_decode(&geohash),
        Commands::Neighbors { geohash } => commands::geohash::run_neighbors(&geohash),
        Commands::Config(command) => commands::config::run(command),
        Commands::Coverage { center, area } => {
            let runner = CliRunner::new(cli.debug, cli.verbose)?;
            runner.log_startup("coverage");
            commands::coverage::run(&runner, &center, &area)
        }
        Commands::Query(args) => {
            let runner = CliRunner::new(cli.debug, cli.verbose)?;
            runner.log_startup("query");
            commands::query::run(&runner, args)
        }
    }
}
