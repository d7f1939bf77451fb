//! Pokemon payload
//!
//! The subset of `GET /pokemon/{name}` consumed by `catch` and `inspect`.

use serde::Deserialize;

use crate::models::NamedResource;

/// A pokemon as returned by the API and stored in the pokedex after a
/// successful catch.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub name: String,
    /// Catch difficulty proxy: the roll must reach this to succeed
    #[serde(default)]
    pub base_experience: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

/// One named base stat (hp, attack, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One of the pokemon's types.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
