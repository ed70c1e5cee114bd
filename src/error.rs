//! Error types for the Pokedex CLI
//!
//! Provides unified error handling using thiserror.
//!
//! The cache deliberately contributes no variants here: `put` and `get` are
//! infallible by contract, and a miss is an `Option::None`, not an error.

use thiserror::Error;

// == Pokedex Error Enum ==
/// Unified error type for the CLI.
///
/// Every variant surfaces to the user as a single printed line; the REPL then
/// continues with the next prompt.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// HTTP transport failure or non-success status from the PokeAPI
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded into the expected shape
    #[error("malformed response: {0}")]
    Json(#[from] serde_json::Error),

    /// Input line did not match any registered command
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Command requires an argument that was not supplied
    #[error("{command} requires {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
}

// == Result Type Alias ==
/// Convenience Result type for the CLI.
pub type Result<T> = std::result::Result<T, PokedexError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_command_message() {
        let err = PokedexError::UnknownCommand("mpa".to_string());
        assert_eq!(err.to_string(), "unknown command: mpa");
    }

    #[test]
    fn test_missing_argument_message() {
        let err = PokedexError::MissingArgument {
            command: "explore",
            expected: "a location area name",
        };
        assert_eq!(err.to_string(), "explore requires a location area name");
    }
}
