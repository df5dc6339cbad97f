//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::FremorizerConfig;

/// fremorizer: learn the notes on a guitar fretboard.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Open notes, lowest string first, comma separated (e.g. E,A,D,G,B,E).
    #[arg(long, value_delimiter = ',')]
    pub tuning: Option<Vec<String>>,

    /// Number of frets to draw (12-24).
    #[arg(long)]
    pub frets: Option<u32>,

    /// Print the diagram to stdout and exit instead of starting the UI.
    #[arg(long, default_value_t = false)]
    pub print: bool,

    /// Start with every note visible.
    #[arg(long, default_value_t = false)]
    pub reveal: bool,

    /// Config file. Default: ~/.fremorizer/config.yaml.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log file. Overrides the config file and FREMORIZER_LOG.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Overlay command-line values on a loaded config.
    pub fn apply(&self, config: &mut FremorizerConfig) {
        if let Some(tuning) = &self.tuning {
            config.tuning = tuning.iter().map(|t| t.trim().to_string()).collect();
        }
        if let Some(frets) = self.frets {
            config.frets = frets;
        }
        if let Some(path) = &self.log_file {
            config.log_file = Some(path.clone());
        }
    }
}
