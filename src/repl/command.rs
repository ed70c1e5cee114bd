//! REPL Commands
//!
//! The command registry, the input-line parser, and one handler per command.
//! Handlers never print and never terminate the process themselves: each
//! returns its output text plus an [`Outcome`] the loop acts on, so teardown
//! always runs at the top level.

use rand::Rng;

use crate::api::{Fetch, PokeApiClient, Pokemon};
use crate::error::{PokedexError, Result};
use crate::repl::Session;

/// A catch roll must land below this to succeed.
const CATCH_THRESHOLD: u32 = 40;

// == Command Registry ==
/// Name and help text for one command.
#[derive(Debug, Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// Every command the REPL recognizes, in help-listing order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "help",
        description: "Displays a help message",
    },
    CommandSpec {
        name: "exit",
        description: "Exit the Pokedex",
    },
    CommandSpec {
        name: "map",
        description: "Retrieve the next page of location areas",
    },
    CommandSpec {
        name: "mapb",
        description: "Retrieve the previous page of location areas",
    },
    CommandSpec {
        name: "explore",
        description: "List the pokemon within a location area",
    },
    CommandSpec {
        name: "catch",
        description: "Attempt to catch a pokemon",
    },
    CommandSpec {
        name: "inspect",
        description: "Show details of a caught pokemon",
    },
    CommandSpec {
        name: "pokedex",
        description: "List every pokemon you have caught",
    },
    CommandSpec {
        name: "cache",
        description: "Show response cache statistics",
    },
];

// == Command ==
/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    CacheInfo,
}

// == Outcome ==
/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Exit,
}

/// A handler's printable output plus its loop directive.
#[derive(Debug)]
pub struct Reply {
    pub text: String,
    pub outcome: Outcome,
}

impl Reply {
    fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            outcome: Outcome::Continue,
        }
    }

    fn lines(lines: Vec<String>) -> Self {
        Self::text(lines.join("\n"))
    }

    pub(crate) fn empty() -> Self {
        Self::text("")
    }
}

impl Command {
    // == Parse ==
    /// Parses one input line into a command.
    ///
    /// Returns `Ok(None)` for blank input. Anything unrecognized is an
    /// `UnknownCommand` error carrying the original line.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        let command = match name {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(required_arg(arg, "explore", "a location area name")?),
            "catch" => Command::Catch(required_arg(arg, "catch", "a pokemon name")?),
            "inspect" => Command::Inspect(required_arg(arg, "inspect", "a pokemon name")?),
            "pokedex" => Command::Pokedex,
            "cache" => Command::CacheInfo,
            _ => return Err(PokedexError::UnknownCommand(line.to_string())),
        };
        Ok(Some(command))
    }

    // == Execute ==
    /// Runs the command against the session and API client.
    pub async fn execute<F: Fetch>(
        self,
        session: &mut Session,
        client: &PokeApiClient<F>,
    ) -> Result<Reply> {
        match self {
            Command::Help => Ok(help_reply()),
            Command::Exit => Ok(Reply {
                text: "Closing the Pokedex... Goodbye!".to_string(),
                outcome: Outcome::Exit,
            }),
            Command::Map => map_forward(session, client).await,
            Command::MapBack => map_back(session, client).await,
            Command::Explore(name) => explore(client, &name).await,
            Command::Catch(name) => catch(session, client, &name).await,
            Command::Inspect(name) => Ok(inspect(session, &name)),
            Command::Pokedex => Ok(pokedex(session)),
            Command::CacheInfo => Ok(cache_info(client).await),
        }
    }
}

fn required_arg(
    arg: Option<&str>,
    command: &'static str,
    expected: &'static str,
) -> Result<String> {
    arg.map(str::to_string)
        .ok_or(PokedexError::MissingArgument { command, expected })
}

// == Handlers ==
fn help_reply() -> Reply {
    let mut lines = vec!["Welcome to the Pokedex!".to_string(), "Usage:".to_string(), String::new()];
    for spec in COMMANDS {
        lines.push(format!("{}: {}", spec.name, spec.description));
    }
    Reply::lines(lines)
}

/// Shows the next page of location-area names and moves the window forward.
async fn map_forward<F: Fetch>(session: &mut Session, client: &PokeApiClient<F>) -> Result<Reply> {
    let offset = session.pager.next_offset();
    let page = client
        .location_area_page(offset, session.pager.page_size())
        .await?;
    session.pager.advance();

    Ok(Reply::lines(
        page.results.into_iter().map(|r| r.name).collect(),
    ))
}

/// Shows the previous page, refusing to move before the start of the list.
async fn map_back<F: Fetch>(session: &mut Session, client: &PokeApiClient<F>) -> Result<Reply> {
    let Some(offset) = session.pager.previous_offset() else {
        return Ok(Reply::text("you're on the first page"));
    };
    let page = client
        .location_area_page(offset, session.pager.page_size())
        .await?;
    session.pager.retreat();

    Ok(Reply::lines(
        page.results.into_iter().map(|r| r.name).collect(),
    ))
}

/// Lists the pokemon encounterable in a location area.
async fn explore<F: Fetch>(client: &PokeApiClient<F>, name: &str) -> Result<Reply> {
    let area = client.location_area(name).await?;

    let mut lines = vec![format!("Exploring {}...", area.name)];
    lines.extend(
        area.pokemon_encounters
            .into_iter()
            .map(|e| e.pokemon.name),
    );
    Ok(Reply::lines(lines))
}

/// Fetches the pokemon and rolls for a catch.
async fn catch<F: Fetch>(
    session: &mut Session,
    client: &PokeApiClient<F>,
    name: &str,
) -> Result<Reply> {
    let pokemon = client.pokemon(name).await?;

    let mut rng = rand::thread_rng();
    let caught = attempt_catch(pokemon.base_experience.unwrap_or(0), &mut rng);

    let mut lines = vec![format!("Throwing a Pokeball at {}...", pokemon.name)];
    if caught {
        lines.push(format!("{} was caught!", pokemon.name));
        session.caught.insert(pokemon.name.clone(), pokemon);
    } else {
        lines.push(format!("{} escaped!", pokemon.name));
    }
    Ok(Reply::lines(lines))
}

/// Rolls against base experience: sturdier pokemon roll over a wider range,
/// so the chance of landing under the threshold shrinks as experience grows.
/// Anything at or below the threshold is a guaranteed catch.
pub fn attempt_catch(base_experience: u32, rng: &mut impl Rng) -> bool {
    let roll = rng.gen_range(0..base_experience.max(1));
    roll < CATCH_THRESHOLD
}

fn inspect(session: &Session, name: &str) -> Reply {
    let Some(pokemon) = session.caught.get(name) else {
        return Reply::text("you have not caught that pokemon");
    };
    Reply::lines(describe(pokemon))
}

fn describe(pokemon: &Pokemon) -> Vec<String> {
    let mut lines = vec![
        format!("Name: {}", pokemon.name),
        format!("Height: {}", pokemon.height),
        format!("Weight: {}", pokemon.weight),
        "Stats:".to_string(),
    ];
    for stat in &pokemon.stats {
        lines.push(format!("  -{}: {}", stat.stat.name, stat.base_stat));
    }
    lines.push("Types:".to_string());
    for slot in &pokemon.types {
        lines.push(format!("  - {}", slot.kind.name));
    }
    lines
}

fn pokedex(session: &Session) -> Reply {
    if session.caught.is_empty() {
        return Reply::text("Your Pokedex is empty");
    }

    // Map iteration order is arbitrary; show names sorted
    let mut names: Vec<&String> = session.caught.keys().collect();
    names.sort();

    let mut lines = vec!["Your Pokedex:".to_string()];
    lines.extend(names.into_iter().map(|n| format!("  - {n}")));
    Reply::lines(lines)
}

async fn cache_info<F: Fetch>(client: &PokeApiClient<F>) -> Reply {
    let stats = client.cache().stats().await;
    Reply::lines(vec![
        format!("entries: {}", stats.total_entries),
        format!("hits: {}", stats.hits),
        format!("misses: {}", stats.misses),
        format!("hit rate: {:.1}%", stats.hit_rate() * 100.0),
        format!("reaped: {}", stats.reaped),
    ])
}
