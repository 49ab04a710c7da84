mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use changeset::{collect_changes, config, output};

fn main() -> Result<()> {
    let args = cli::Args::parse();
    init_logging(args.verbose, args.debug);

    let config = args.apply(config::load(args.config.as_deref())?);
    debug!("Effective config: {:?}", config);

    let patches = collect_changes(&args.path)
        .with_context(|| format!("Failed to collect changes under {}", args.path.display()))?;

    print!(
        "{}",
        output::render(&patches, config.format, config.show_diff)?
    );

    Ok(())
}

/// Stderr logging: `RUST_LOG` wins, else `--debug`, `-v`, or warnings only.
fn init_logging(verbose: bool, debug: bool) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    debug!("Logging initialized at level: {}", level);
}
