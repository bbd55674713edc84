use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;

use dirprune::cli::Cli;
use dirprune::core::{prune, report};
use dirprune::fs::RealFileSystem;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let fs = RealFileSystem;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let mut any_failed = false;
    for path in &cli.paths {
        let outcome = prune::prune_path(&fs, path).await;
        any_failed |= outcome.is_failure();

        // Report each path as soon as it is resolved; a broken pipe or
        // similar stdout error is the one thing that aborts the run.
        if let Err(err) = report::write_outcome(&mut out, &outcome) {
            eprintln!("dirprune: {err}");
            return ExitCode::from(1);
        }
    }

    if let Err(err) = out.flush() {
        eprintln!("dirprune: {err}");
        return ExitCode::from(1);
    }

    if any_failed {
        ExitCode::from(1)
    } else {
        ExitCode::SUCCESS
    }
}
