use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use league_archive::api::{build_router, state::AppState};
use league_archive::calculate::{
    head_to_head, player_profile, record_book, season_summary, standings,
};
use league_archive::config::AppConfig;
use league_archive::models::RowId;
use league_archive::storage::load_snapshot;

#[derive(Parser)]
#[command(name = "league-archive")]
#[command(about = "Fantasy league history: records, rivalries and streaks")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides the config file)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(long)]
        port: Option<u16>,
    },

    /// Print the all-time record book
    Records,

    /// Print all-time standings
    Standings,

    /// Print a player's profile
    Player {
        #[arg(long)]
        id: i64,
    },

    /// Print a season summary
    Season {
        #[arg(long)]
        year: i32,
    },

    /// Compare two players
    HeadToHead {
        #[arg(long)]
        player1: i64,

        #[arg(long)]
        player2: i64,
    },

    /// Load the data directory and report broken references
    Check,
}

#[derive(Serialize)]
struct CheckReport {
    players: usize,
    seasons: usize,
    season_results: usize,
    championships: usize,
    matchups: usize,
    dangling_references: Vec<league_archive::models::DanglingReference>,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {:?}", cli.config))?;
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Commands::Serve { host, port } = &cli.command {
        if let Some(host) = host {
            config.server.host = host.clone();
        }
        if let Some(port) = port {
            config.server.port = *port;
        }
    }
    config.validate()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting league-archive v{}", env!("CARGO_PKG_VERSION"));

    let storage = config.storage();

    match cli.command {
        Commands::Serve { .. } => {
            let state = AppState::new(storage).with_cors_origin(&config.server.cors_origin);
            let app = build_router(state);
            let addr = config.server.bind_addr();
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Serving league archive at http://{}", addr);
            axum::serve(listener, app).await?;
        }
        Commands::Records => {
            let snapshot = load_snapshot(&storage)?;
            print_json(&record_book(&snapshot))?;
        }
        Commands::Standings => {
            let snapshot = load_snapshot(&storage)?;
            print_json(&standings(&snapshot))?;
        }
        Commands::Player { id } => {
            let snapshot = load_snapshot(&storage)?;
            print_json(&player_profile(&snapshot, RowId::new(id))?)?;
        }
        Commands::Season { year } => {
            let snapshot = load_snapshot(&storage)?;
            print_json(&season_summary(&snapshot, year)?)?;
        }
        Commands::HeadToHead { player1, player2 } => {
            let snapshot = load_snapshot(&storage)?;
            let comparison = head_to_head(&snapshot, RowId::new(player1), RowId::new(player2))?;
            print_json(&comparison)?;
        }
        Commands::Check => {
            let snapshot = load_snapshot(&storage)?;
            let report = CheckReport {
                players: snapshot.players.len(),
                seasons: snapshot.seasons.len(),
                season_results: snapshot.season_results.len(),
                championships: snapshot.championships.len(),
                matchups: snapshot.matchups.len(),
                dangling_references: snapshot.dangling_references(),
            };
            print_json(&report)?;
            if !report.dangling_references.is_empty() {
                tracing::warn!(
                    "{} rows reference missing players or seasons",
                    report.dangling_references.len()
                );
            }
        }
    }

    Ok(())
}
