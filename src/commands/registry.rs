//! Command Registry
//!
//! Static command table plus input tokenization. The table drives both
//! dispatch and the `help` output.

// == Command Spec ==
/// Metadata for a single prompt command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    /// Command word typed at the prompt
    pub name: &'static str,
    /// One-line description shown by `help`
    pub description: &'static str,
    /// Exact number of arguments the command takes
    pub arg_count: usize,
}

// == Command Table ==
/// Every command the prompt understands.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "Displays a help message",
        arg_count: 0,
    },
    CommandSpec {
        name: "exit",
        description: "Exit the Pokedex",
        arg_count: 0,
    },
    CommandSpec {
        name: "map",
        description: "Displays the next 20 location areas in the Pokedex",
        arg_count: 0,
    },
    CommandSpec {
        name: "mapb",
        description: "Displays the previous 20 areas in the Pokedex",
        arg_count: 0,
    },
    CommandSpec {
        name: "explore",
        description: "Explore a specific location area by name",
        arg_count: 1,
    },
    CommandSpec {
        name: "catch",
        description: "Tries to catch a specific pokemon by name",
        arg_count: 1,
    },
    CommandSpec {
        name: "inspect",
        description: "Inspect a caught pokemon by name",
        arg_count: 1,
    },
    CommandSpec {
        name: "pokedex",
        description: "List all caught pokemon",
        arg_count: 0,
    },
];

// == Lookup ==
/// Finds a command by its (already lowercased) name.
pub fn lookup(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

// == Tokenize ==
/// Splits an input line into whitespace-separated words.
///
/// The command word is matched case-insensitively by the dispatcher;
/// arguments keep their original form until a handler lowercases them.
pub fn tokenize(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_command() {
        let spec = lookup("explore").unwrap();
        assert_eq!(spec.name, "explore");
        assert_eq!(spec.arg_count, 1);
    }

    #[test]
    fn test_lookup_unknown_command() {
        assert!(lookup("fly").is_none());
        // Lookup expects a lowercased name
        assert!(lookup("MAP").is_none());
    }

    #[test]
    fn test_tokenize_basic() {
        assert_eq!(tokenize("catch pikachu"), vec!["catch", "pikachu"]);
    }

    #[test]
    fn test_tokenize_extra_whitespace() {
        assert_eq!(
            tokenize("  explore   pastoria-city-area  "),
            vec!["explore", "pastoria-city-area"]
        );
    }

    #[test]
    fn test_tokenize_empty_line() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \t  ").is_empty());
    }

    #[test]
    fn test_every_command_has_description() {
        for spec in COMMANDS {
            assert!(!spec.description.is_empty(), "{} lacks a description", spec.name);
        }
    }
}
