use crate::cli::args::GenerateArgs;
use crate::core::config::ConfigLoader;
use crate::core::generator::{self, Destination};
use crate::Result;
use anyhow::Context;
use std::env;

/// Resolve configuration and run the generate pipeline.
pub fn generate(args: GenerateArgs) -> Result<()> {
    let working_dir = env::current_dir().context("failed to resolve working directory")?;
    let defaults = ConfigLoader::load(args.config.as_deref(), &working_dir)?;
    let config = args.into_config(&defaults);

    let report = generator::generate(config)?;

    if let Destination::File(path) = &report.destination {
        tracing::debug!(
            path = %path.display(),
            total = report.parameters.len(),
            added = report.added.len(),
            pruned = report.pruned.len(),
            "parameters file updated"
        );
    }
    Ok(())
}
