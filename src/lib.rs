pub mod cli;
pub mod core;
pub mod fs;
pub mod models;

pub use crate::core::prune::{prune, prune_path};
pub use crate::models::{OutcomeRecord, PruneStatus};
