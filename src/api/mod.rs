//! PokeAPI Module
//!
//! Wire models and the cache-aware client used by every command that needs
//! remote data.

mod client;
mod models;

// Re-export public types
pub use client::{Fetch, HttpFetch, PokeApiClient};
pub use models::{
    LocationArea, NamedResource, Pokemon, PokemonEncounter, PokemonStat, PokemonTypeSlot,
    ResourcePage,
};
