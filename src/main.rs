//! Pokedex - An interactive PokeAPI client
//!
//! Provides a REPL over the PokeAPI with a concurrent TTL response cache.

mod cache;
mod client;
mod commands;
mod config;
mod error;
mod models;
mod tasks;

use std::io::Write;

use anyhow::Context;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{registry, Pokedex, ReplFlow};
use config::Config;

/// Main entry point for the pokedex CLI.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the caching client (which spawns the cache reaper task)
/// 4. Run the prompt loop until `exit`, EOF, or Ctrl+C
///
/// Dropping the session on the way out tears down the reaper task.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Configuration loaded: api_base_url={}, cache_ttl={}s, catch_difficulty={}",
        config.api_base_url, config.cache_ttl_secs, config.catch_difficulty
    );

    let mut session = Pokedex::new(&config).context("failed to create session")?;
    info!("Cache initialized, reaper task started");

    tokio::select! {
        result = repl(&mut session) => result?,
        _ = signal::ctrl_c() => {
            println!();
            info!("Received Ctrl+C, shutting down");
        }
    }

    // Session (and with it the cache and its reaper) drops here.
    Ok(())
}

/// Prompt loop: read a line, tokenize, dispatch, print any command error.
///
/// Command failures are reported and the loop keeps going; only `exit` or
/// end of input leave it.
async fn repl(session: &mut Pokedex) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("Pokedex > ");
        std::io::stdout().flush().context("failed to flush prompt")?;

        let Some(line) = lines.next_line().await.context("failed to read stdin")? else {
            // EOF: behave like exit
            println!();
            break;
        };

        let words = registry::tokenize(&line);
        let Some((command, args)) = words.split_first() else {
            continue;
        };

        match session.dispatch(command, args).await {
            Ok(ReplFlow::Continue) => {}
            Ok(ReplFlow::Exit) => break,
            Err(err) => {
                println!("Error executing command : '{}'\n{}", command, err);
            }
        }
    }

    Ok(())
}
