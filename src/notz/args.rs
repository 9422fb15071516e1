use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "notz")]
#[command(
    about = "A small, paginated, searchable note pad for the terminal",
    long_about = None
)]
pub struct Cli {
    /// Store notes in this directory instead of the platform default
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}
