mod outcome;

pub use outcome::{OutcomeRecord, PruneStatus};
