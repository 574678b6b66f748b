//! plaindoc CLI binary entry point
//!
//! This is a thin wrapper that sets up logging and calls the library's
//! `run_cli()` function.

use anyhow::Result;
use plaindoc_cli::run_cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    run_cli()
}
