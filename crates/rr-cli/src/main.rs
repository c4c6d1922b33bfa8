//! CLI frontend for the Ringroll dice table.

mod commands;

use std::process;

use clap::{Args, Parser, Subcommand};

use rr_dice::RemoteConfig;
use rr_dice::entropy::remote::DEFAULT_ENDPOINT;

use commands::Table;

#[derive(Parser)]
#[command(
    name = "ringroll",
    about = "Ringroll — ring and skill dice with remote entropy",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(flatten)]
    table: TableArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TableArgs {
    /// Draw from the remote randomness service (falls back to local on failure)
    #[arg(long, global = true, env = "RINGROLL_ONLINE")]
    online: bool,

    /// Remote endpoint template; `{quantity}` and `{max}` are substituted
    #[arg(long, global = true, env = "RINGROLL_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Seed for the local generator (default: seeded from the OS)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Ring the terminal bell on every roll
    #[arg(long, global = true)]
    sound: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Roll ring and skill dice once and print the faces
    Roll {
        /// Number of ring dice
        #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u8).range(1..=5))]
        ring: u8,

        /// Number of skill dice
        #[arg(short, long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..=5))]
        skill: u8,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Start an interactive dice table reading actions from stdin
    Session,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let TableArgs {
        online,
        endpoint,
        seed,
        sound,
    } = cli.table;
    let table = Table::new(RemoteConfig::with_endpoint(endpoint), seed, online, sound);
    log::debug!("dice table ready - mode: {}, sound: {sound}", table.mode());

    let result = match cli.command {
        Commands::Roll { ring, skill, json } => {
            commands::roll::run(table, ring.into(), skill.into(), json).await
        }
        Commands::Session => commands::session::run(table).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
