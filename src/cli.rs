use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dirprune")]
#[command(about = "Recursively delete directories, reporting each outcome", long_about = None)]
pub struct Cli {
    /// Paths to delete, processed in the order given
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,
}
