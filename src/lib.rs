//! Pokedex CLI - An interactive PokeAPI client
//!
//! Paginates the location-area listing, explores areas, and catches pokemon,
//! with every API response held in a time-bounded in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod repl;
pub mod tasks;

pub use config::Config;
pub use error::{PokedexError, Result};
