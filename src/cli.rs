use changeset::config::{Config, OutputFormat};
use clap::{Parser, ValueHint};
use std::path::PathBuf;

/// changeset - list the per-file changes in a git working tree
#[derive(Parser, Debug)]
#[command(name = "changeset", version, about, long_about = None)]
pub struct Args {
    /// Any file or directory inside the working tree.
    #[arg(value_hint = ValueHint::AnyPath, default_value = ".")]
    pub path: PathBuf,

    /// Output format (overrides the config file).
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print each file's unified diff.
    #[arg(long)]
    pub diff: bool,

    /// Read settings from this file instead of the default location.
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Enable verbose (info-level) logging to stderr.
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Enable debug-level logging to stderr.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Layer command-line flags over file settings.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(format) = self.format {
            config.format = format;
        }
        if self.diff {
            config.show_diff = true;
        }
        config
    }
}
