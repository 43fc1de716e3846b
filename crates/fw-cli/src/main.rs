//! CLI frontend for the Floodwatch emergency-response simulation.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "fw",
    about = "Floodwatch: a text-driven flood emergency management simulation",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and run an interactive session
    Play {
        /// World definition file
        #[arg(short, long, default_value = commands::DEFAULT_WORLD_FILE)]
        world: PathBuf,

        /// Username (skips the username prompt)
        #[arg(short, long)]
        user: Option<String>,
    },

    /// Validate a world file and print a summary
    Check {
        /// World definition file
        #[arg(short, long, default_value = commands::DEFAULT_WORLD_FILE)]
        world: PathBuf,
    },

    /// List every suburb in the world
    List {
        /// World definition file
        #[arg(short, long, default_value = commands::DEFAULT_WORLD_FILE)]
        world: PathBuf,
    },

    /// Show the details of one suburb
    Show {
        /// Suburb name (exact)
        name: String,

        /// World definition file
        #[arg(short, long, default_value = commands::DEFAULT_WORLD_FILE)]
        world: PathBuf,
    },
}

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { world, user } => commands::play::run(&world, user.as_deref()),
        Commands::Check { world } => commands::check::run(&world),
        Commands::List { world } => commands::list::run(&world),
        Commands::Show { name, world } => commands::show::run(&world, &name),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
