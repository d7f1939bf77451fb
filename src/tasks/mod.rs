//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the CLI is alive.
//!
//! # Tasks
//! - Reaper: removes expired cache entries once per interval

mod reaper;

pub use reaper::spawn_reaper_task;
