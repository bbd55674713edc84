pub mod prune;
pub mod report;
