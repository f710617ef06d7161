use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use preflop_advisor::advisor::{Advisor, AdvisorConfig, Situation, parse_actions};
use preflop_advisor::web;
use preflop_advisor::{Card, Position, StartingHand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(
    name = "preflop-advisor",
    version,
    about = "Pre-flop hold'em advisor (Rust edition)",
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// JSON file with advisor defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Disable ANSI colors in CLI output
    #[arg(long = "no-color", global = true, default_value_t = false)]
    no_color: bool,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Recommend an action for a single hand and exit
    Advise {
        /// First hole card, e.g. AH
        first: String,

        /// Second hole card, e.g. KS
        second: String,

        /// Seat (UTG/UTG+1/MP/MP+1/CO/BTN/SB/BB)
        #[arg(long, short)]
        position: String,

        /// Stack size in big blinds
        #[arg(long, short)]
        stack: u32,

        /// Total players in the hand (defaults to the configured table size)
        #[arg(long)]
        players: Option<u32>,

        /// Opponent actions, comma separated (e.g. FOLD,CALL,RAISE-5)
        #[arg(long, short, default_value = "")]
        actions: String,
    },
    /// Run the web server
    Serve {
        /// Address to bind (HOST:PORT)
        #[arg(long, default_value = "0.0.0.0:8080")]
        addr: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = color_eyre::install();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => AdvisorConfig::load(path)?,
        None => AdvisorConfig::default(),
    };
    if cli.no_color {
        config.no_color = true;
    }

    match cli.command {
        Some(Commands::Advise {
            first,
            second,
            position,
            stack,
            players,
            actions,
        }) => {
            let first: Card = first.trim().parse()?;
            let second: Card = second.trim().parse()?;
            let situation = Situation {
                hand: StartingHand::new(first, second),
                position: Position::parse(&position.trim().to_uppercase()),
                stack_bb: stack,
                player_count: players.unwrap_or(config.default_players),
                actions: parse_actions(&actions),
            };
            let decision = situation.decide();
            Advisor::new(config).print_decision(&mut io::stdout().lock(), &decision)?;
        }
        Some(Commands::Serve { addr }) => run_server(addr, config).await?,
        None => Advisor::new(config).run()?,
    }

    Ok(())
}

async fn run_server(addr: String, config: AdvisorConfig) -> Result<()> {
    let addr: SocketAddr = addr.parse()?;
    web::serve(addr, config).await
}
