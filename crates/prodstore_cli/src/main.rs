//! Prodstore CLI
//!
//! Command-line driver for a prodstore instance.
//!
//! # Commands
//!
//! - `demo` - Run the add/update/delete walkthrough and print each step
//! - `shell` - Read CRUD commands from stdin, one per line
//! - `load` - Add products from many threads and verify the result
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use prodstore_core::{open_store, Backend, StoreConfig};
use tracing_subscriber::EnvFilter;

/// Prodstore command-line tools.
#[derive(Parser)]
#[command(name = "prodstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Container strategy (sorted, btree)
    #[arg(global = true, short, long, env = "PRODSTORE_BACKEND", default_value = "sorted")]
    backend: String,

    /// Number of products to pre-allocate room for
    #[arg(global = true, long, default_value = "0")]
    capacity: usize,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the add/update/delete walkthrough
    Demo {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Read CRUD commands from stdin
    Shell,

    /// Add products concurrently and verify the store afterwards
    Load {
        /// Number of writer threads
        #[arg(short, long, default_value = "4")]
        threads: usize,

        /// Products added per thread
        #[arg(short, long, default_value = "1000")]
        adds: usize,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // RUST_LOG overrides the verbosity flag
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let backend: Backend = cli.backend.parse()?;
    let config = StoreConfig::new()
        .backend(backend)
        .initial_capacity(cli.capacity);

    match cli.command {
        Commands::Demo { format } => {
            let store = open_store(&config);
            commands::demo::run(store.as_ref(), &format)?;
        }
        Commands::Shell => {
            let store = open_store(&config);
            let stdin = std::io::stdin();
            commands::shell::run(store.as_ref(), stdin.lock(), std::io::stdout())?;
        }
        Commands::Load { threads, adds } => {
            let store = open_store(&config);
            commands::load::run(store, threads, adds)?;
        }
        Commands::Version => {
            println!("prodstore CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("prodstore core v{}", prodstore_core::VERSION);
        }
    }

    Ok(())
}
