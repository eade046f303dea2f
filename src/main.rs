use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use aprs_decode::log_format::TargetFirstFormat;
use aprs_decode::report::DEFAULT_TOP_UNIDENTIFIED;

mod commands;

use commands::{handle_check, handle_decode};

#[derive(Parser, Debug)]
#[command(
    name = "aprs-decode",
    about = "Decode APRS-IS packet lines and check packet capture files."
)]
struct Cli {
    /// Disable colored log output
    #[arg(long = "no-color", global = true, default_value_t = false)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Decode a single packet line and print it
    Decode {
        /// Packet text, e.g. `N0CALL>APRS:!4903.50N/07201.75W-`
        line: String,
        /// Print the packet as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Decode every line of a file and summarize the results
    Check {
        /// File with one packet per line
        file: PathBuf,
        /// Print the summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
        /// Number of unidentified data types to list
        #[arg(long, default_value_t = DEFAULT_TOP_UNIDENTIFIED)]
        top: usize,
    },
}

fn main() -> Result<()> {
    // Load environment variables (RUST_LOG) from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!cli.no_color)
        .event_format(TargetFirstFormat::new(!cli.no_color))
        .init();

    match cli.command {
        Commands::Decode { line, json } => handle_decode(&line, json),
        Commands::Check { file, json, top } => handle_check(&file, json, top),
    }
}
