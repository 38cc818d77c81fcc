use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Prefix autocomplete over a list of country names")]
pub struct Config {
    /// Newline-delimited word list loaded at startup
    #[arg(long, default_value = "data/countries.txt")]
    pub words: PathBuf,

    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    #[arg(long, default_value_t = 3001)]
    pub port: u16,

    /// Directory served for every path other than the API
    #[arg(long)]
    pub static_dir: Option<PathBuf>,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
