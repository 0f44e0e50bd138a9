use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "confdiff",
    about = "Compare two configuration files and show the differences",
    version,
)]
pub struct Cli {
    /// The file to treat as the old version
    pub before: PathBuf,

    /// The file to treat as the new version
    pub after: PathBuf,

    /// Enable debug logging (written to stderr)
    #[arg(short, long)]
    pub verbose: bool,
}
