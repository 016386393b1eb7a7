use crate::profile::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "covdedup",
    version,
    about = "Merge Go cover profiles into one de-duplicated, sorted profile"
)]
pub struct Cli {
    /// Cover profiles to merge; `-` reads standard input
    #[arg(value_name = "FILE")]
    pub inputs: Vec<PathBuf>,
    /// Gitignore-style file of profile file names to drop [default: .covignore]
    #[arg(long, short, value_name = "FILE")]
    pub exclude: Option<PathBuf>,
    /// Output format [default: text]
    #[arg(long, short, value_enum)]
    pub format: Option<OutputFormat>,
    /// Log pipeline details to stderr
    #[arg(long, short)]
    pub verbose: bool,
}
