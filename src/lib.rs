//! Pokedex - An interactive PokeAPI client
//!
//! Provides a REPL over the PokeAPI with a concurrent TTL response cache.

pub mod cache;
pub mod client;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use cache::Cache;
pub use client::PokeClient;
pub use commands::{Pokedex, ReplFlow};
pub use config::Config;
pub use error::{PokedexError, Result};
pub use tasks::spawn_reaper_task;
