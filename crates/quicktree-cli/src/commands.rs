use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "quicktree")]
#[command(about = "List files and labeled subdirectories of a directory", long_about = None)]
pub struct Cli {
    /// Directory to list (defaults to the current directory)
    pub path: Option<PathBuf>,

    /// Glob for entry names to hide; may be repeated
    #[arg(short, long = "ignore", value_name = "GLOB")]
    pub ignore: Vec<String>,

    /// Print configuration values and exit
    #[arg(long)]
    pub print_config: bool,
}
