//! Commands Module
//!
//! Command registry and handlers for the interactive prompt.
//!
//! # Commands
//! - `help` - Displays a help message
//! - `exit` - Exit the pokedex
//! - `map` / `mapb` - Page forward/back through location areas
//! - `explore <area>` - List pokemon found in a location area
//! - `catch <name>` - Try to catch a pokemon
//! - `inspect <name>` - Show details of a caught pokemon
//! - `pokedex` - List all caught pokemon

pub mod handlers;
pub mod registry;

pub use handlers::{Pokedex, ReplFlow};
pub use registry::{lookup, tokenize, COMMANDS};
