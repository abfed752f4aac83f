use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_FILE: &str = "phone.txt";

/// Browse a semicolon-delimited phone list.
#[derive(Parser, Debug, Clone)]
#[command(name = "phonelist", version)]
pub struct Config {
    /// Phone list to load, one person per line
    #[arg(long, short = 'f', env = "PHONELIST_FILE", default_value = DEFAULT_FILE)]
    pub file: PathBuf,
}
