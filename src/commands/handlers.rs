//! Command Handlers
//!
//! Session state plus one handler per prompt command. Handlers print their
//! results directly and return errors for the REPL to report.

use std::collections::HashMap;

use rand::Rng;
use tracing::debug;

use crate::client::PokeClient;
use crate::commands::registry::{self, CommandSpec};
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::Pokemon;

// == Repl Flow ==
/// Tells the REPL whether to keep reading input after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplFlow {
    /// Keep prompting
    Continue,
    /// Leave the loop and shut down
    Exit,
}

// == Pokedex Session ==
/// Interactive session state.
///
/// Owns the caching client and tracks pagination cursors plus the set of
/// caught pokemon. One session per process; tests construct their own with
/// independent caches.
pub struct Pokedex {
    /// Caching API client
    client: PokeClient,
    /// URL of the next `map` page, `None` past the last page
    next_url: Option<String>,
    /// URL of the previous `map` page, `None` on the first page
    previous_url: Option<String>,
    /// Caught pokemon keyed by their API name
    caught: HashMap<String, Pokemon>,
    /// Catch roll upper bound, compared against base experience
    catch_difficulty: u32,
}

impl Pokedex {
    // == Constructor ==
    /// Creates a session starting at the first map page.
    pub fn new(config: &Config) -> Result<Self> {
        let client = PokeClient::new(config)?;
        Ok(Self::with_client(config, client))
    }

    /// Creates a session around an existing client (used by tests).
    pub fn with_client(config: &Config, client: PokeClient) -> Self {
        Self {
            client,
            next_url: Some(config.initial_map_url()),
            previous_url: None,
            caught: HashMap::new(),
            catch_difficulty: config.catch_difficulty,
        }
    }

    // == Dispatch ==
    /// Runs one command line: lookup, arity check, handler.
    ///
    /// An unknown command prints a message and continues; a known command
    /// with the wrong argument count returns a usage error.
    pub async fn dispatch(&mut self, command: &str, args: &[&str]) -> Result<ReplFlow> {
        let name = command.to_lowercase();
        let Some(spec) = registry::lookup(&name) else {
            println!("Unknown command: '{}'", command);
            return Ok(ReplFlow::Continue);
        };
        Self::check_arg_count(spec, args)?;

        match spec.name {
            "help" => self.cmd_help(),
            "exit" => return Ok(self.cmd_exit()),
            "map" => self.cmd_map().await?,
            "mapb" => self.cmd_mapb().await?,
            "explore" => self.cmd_explore(args[0]).await?,
            "catch" => self.cmd_catch(args[0]).await?,
            "inspect" => self.cmd_inspect(args[0])?,
            "pokedex" => self.cmd_pokedex(),
            _ => unreachable!("command table and dispatch out of sync"),
        }

        Ok(ReplFlow::Continue)
    }

    fn check_arg_count(spec: &CommandSpec, args: &[&str]) -> Result<()> {
        if args.len() != spec.arg_count {
            return Err(PokedexError::Usage {
                expected: spec.arg_count,
                got: args.len(),
            });
        }
        Ok(())
    }

    // == Help ==
    fn cmd_help(&self) {
        println!("Welcome to the Pokedex!\nUsage:\n");
        for spec in registry::COMMANDS {
            println!("{}: {}", spec.name, spec.description);
        }
    }

    // == Exit ==
    fn cmd_exit(&self) -> ReplFlow {
        println!("Closing the Pokedex... Goodbye!");
        ReplFlow::Exit
    }

    // == Map ==
    /// Pages forward through location areas.
    async fn cmd_map(&mut self) -> Result<()> {
        let Some(url) = self.next_url.clone() else {
            println!("You're on the last page.");
            return Ok(());
        };
        println!("Going to next page...");
        self.show_page(&url).await
    }

    // == Map Back ==
    /// Pages backward through location areas.
    async fn cmd_mapb(&mut self) -> Result<()> {
        let Some(url) = self.previous_url.clone() else {
            println!("No previous page available.");
            return Ok(());
        };
        println!("Going to previous page...");
        self.show_page(&url).await
    }

    /// Fetches a listing page, prints its area names, advances the cursors.
    async fn show_page(&mut self, url: &str) -> Result<()> {
        let page = self.client.location_page(url).await?;
        for area in &page.results {
            println!("{}", area.name);
        }
        debug!(next = ?page.next, previous = ?page.previous, "map cursors updated");
        self.next_url = page.next;
        self.previous_url = page.previous;
        Ok(())
    }

    // == Explore ==
    /// Lists the pokemon encountered in a named area.
    async fn cmd_explore(&self, area: &str) -> Result<()> {
        let detail = self.client.explore(area).await?;
        for encounter in &detail.pokemon_encounters {
            println!("{}", encounter.pokemon.name);
        }
        Ok(())
    }

    // == Catch ==
    /// Rolls against the pokemon's base experience; success stores it.
    async fn cmd_catch(&mut self, name: &str) -> Result<()> {
        let name = name.to_lowercase();
        if self.caught.contains_key(&name) {
            return Err(PokedexError::AlreadyCaught(name));
        }

        let pokemon = self.client.pokemon(&name).await?;
        println!("Throwing a Pokeball at {}...", name);

        let roll = rand::thread_rng().gen_range(0..self.catch_difficulty);
        debug!(roll, base_experience = pokemon.base_experience, "catch attempt");
        if roll >= pokemon.base_experience {
            println!("{} was caught!", pokemon.name);
            self.caught.insert(pokemon.name.clone(), pokemon);
        } else {
            println!("{} escaped!", pokemon.name);
        }
        Ok(())
    }

    // == Inspect ==
    /// Prints the stored details of a caught pokemon.
    fn cmd_inspect(&self, name: &str) -> Result<()> {
        let name = name.to_lowercase();
        let pokemon = self
            .caught
            .get(&name)
            .ok_or_else(|| PokedexError::NotCaught(name.clone()))?;

        println!(
            "Name: {}\nBase Experience: {}\nHeight: {}\nWeight: {}\nTypes:",
            pokemon.name, pokemon.base_experience, pokemon.height, pokemon.weight
        );
        for t in &pokemon.types {
            println!("- {}", t.kind.name);
        }
        println!("Stats:");
        for s in &pokemon.stats {
            println!("- {}: {}", s.stat.name, s.base_stat);
        }
        Ok(())
    }

    // == Pokedex Listing ==
    /// Lists the names of all caught pokemon.
    fn cmd_pokedex(&self) {
        if self.caught.is_empty() {
            println!("You haven't caught any pokemon yet!");
            return;
        }
        println!("Your Pokedex:");
        for name in self.caught.keys() {
            println!("- {}", name);
        }
    }
}
