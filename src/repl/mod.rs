//! REPL Module
//!
//! The interactive prompt: reads one command per line, dispatches it, prints
//! the reply or a single error message, and keeps going until the user exits,
//! stdin closes, or Ctrl-C arrives.

mod command;
mod session;

// Re-export public types
pub use command::{attempt_catch, Command, CommandSpec, Outcome, Reply, COMMANDS};
pub use session::{Pager, Session};

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::signal;

use crate::api::{Fetch, PokeApiClient};
use crate::error::Result;

/// The prompt shown before every input line.
const PROMPT: &str = "Pokedex > ";

// == Repl ==
/// The interactive loop and the state it threads through every command.
pub struct Repl<F> {
    client: PokeApiClient<F>,
    session: Session,
}

impl<F: Fetch> Repl<F> {
    /// Creates a REPL over `client` with a fresh session.
    pub fn new(client: PokeApiClient<F>, page_size: usize) -> Self {
        Self {
            client,
            session: Session::new(page_size),
        }
    }

    // == Dispatch ==
    /// Parses and runs one input line.
    ///
    /// Blank input yields an empty reply. Errors (unknown command, network,
    /// malformed payload) bubble up for the loop to print; they never end
    /// the session.
    pub async fn dispatch(&mut self, line: &str) -> Result<Reply> {
        match Command::parse(line)? {
            None => Ok(Reply::empty()),
            Some(command) => command.execute(&mut self.session, &self.client).await,
        }
    }

    // == Run ==
    /// Drives the prompt until `exit`, end of input, or Ctrl-C.
    ///
    /// Termination is always by returning: teardown (draining the cache's
    /// reaper) belongs to the caller, never to a command handler.
    pub async fn run(&mut self) -> std::io::Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("{PROMPT}");
            std::io::stdout().flush()?;

            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        // stdin closed
                        println!();
                        break;
                    };
                    match self.dispatch(&line).await {
                        Ok(reply) => {
                            if !reply.text.is_empty() {
                                println!("{}", reply.text);
                            }
                            if reply.outcome == Outcome::Exit {
                                break;
                            }
                        }
                        Err(err) => println!("{err}"),
                    }
                }
                _ = signal::ctrl_c() => {
                    println!();
                    break;
                }
            }
        }

        Ok(())
    }
}
