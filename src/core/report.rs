use std::io::{self, Write};

use crate::models::{OutcomeRecord, PruneStatus};

pub fn write_outcome<W: Write>(writer: &mut W, outcome: &OutcomeRecord) -> io::Result<()> {
    let path = outcome.path().display();
    match outcome.status {
        PruneStatus::Deleted => writeln!(writer, "Deleted: {path}"),
        PruneStatus::NotFound => writeln!(writer, "Path not found: {path}"),
        PruneStatus::Failed => {
            let detail = outcome.detail.as_deref().unwrap_or("unknown error");
            writeln!(writer, "Failed to delete {path}: {detail}")
        }
    }
}

pub fn write_outcomes<W: Write>(writer: &mut W, outcomes: &[OutcomeRecord]) -> io::Result<()> {
    for outcome in outcomes {
        write_outcome(writer, outcome)?;
    }
    Ok(())
}
