//! PokeAPI Wire Models
//!
//! Serde mirrors of the slice of the PokeAPI schema this program consumes.
//! The API sends far more fields than these; serde skips the rest.

use serde::Deserialize;

// == Named Resource ==
/// A name/url pair, the building block of every PokeAPI listing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

// == Resource Page ==
/// One page of a paginated resource list.
#[derive(Debug, Clone, Deserialize)]
pub struct ResourcePage {
    /// Total resources across all pages
    pub count: u32,
    /// URL of the following page, if any
    pub next: Option<String>,
    /// URL of the preceding page, if any
    pub previous: Option<String>,
    /// The resources on this page
    pub results: Vec<NamedResource>,
}

// == Location Area ==
/// A location area and the pokemon encounterable in it.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// One encounterable pokemon within a location area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

// == Pokemon ==
/// The subset of a pokemon's record used by catch and inspect.
#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Null in the API for some forms; absent means trivially catchable
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonTypeSlot>,
}

/// A single base-stat line (hp, attack, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

/// One of a pokemon's type slots.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonTypeSlot {
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}
