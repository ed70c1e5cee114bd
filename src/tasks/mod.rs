//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the program.
//!
//! # Tasks
//! - Reaper: removes expired cache entries at the configured interval

mod reaper;

pub use reaper::spawn_reaper_task;
