//! Models Module
//!
//! Typed PokeAPI response payloads decoded with serde.

mod locations;
mod pokemon;

pub use locations::{Encounter, LocationAreaDetail, LocationAreaPage, NamedResource};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
