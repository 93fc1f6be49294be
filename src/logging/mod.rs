//! Tracing setup for a paramgen run.
//!
//! Events go to an optional append-only log file and to a console sink. The
//! level comes from `RUST_LOG` when set, otherwise from `logging.default_level`
//! in paramgen.toml.
pub mod config;
pub mod layers;

pub use layers::console::ConsoleOutput;

use crate::cli::Args;
use crate::core::config::ConfigLoader;
use crate::logging::config::LoggingConfig;
use crate::logging::layers::{console, file, BoxLayer};
use crate::Result;
use anyhow::{bail, Context};
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::layer::Layered;
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;

static INSTALLED: AtomicBool = AtomicBool::new(false);

type FileSubscriber = Layered<BoxLayer<Registry>, Registry>;

/// Keeps the file writer flushing until the run ends.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber for the parsed command line.
///
/// Fails when called twice in one process.
pub fn init(args: &Args) -> Result<LoggingGuard> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        bail!("logging already initialized");
    }

    let working_dir = env::current_dir().context("failed to resolve working directory")?;
    let config_path = ConfigLoader::resolve_path(args.generate.config.as_deref(), &working_dir);
    let config = LoggingConfig::load(config_path.as_deref(), &working_dir)?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.default_level)
            .context("failed to configure tracing level")?,
    };

    let (file_layer, file_guard) =
        file::file_layer::<Registry>(config.log_file.as_deref(), config.file_format)?;

    let console_output =
        console::select_console_output(args.generate.output.is_none(), config.console_output);
    let console_layer = console::console_layer::<FileSubscriber>(console_output);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(console_layer)
        .with(filter)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::debug!(
        console = %console_output,
        log_file = ?config.log_file,
        "logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}
