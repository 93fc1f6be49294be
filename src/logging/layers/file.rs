use crate::logging::layers::{noop_layer, BoxLayer};
use crate::Result;
use anyhow::{anyhow, Context};
use serde::Deserialize;
use std::fs::{create_dir_all, OpenOptions};
use std::path::Path;
use tracing::Subscriber;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt as tracing_fmt;
use tracing_subscriber::registry::LookupSpan;

/// Line format of the log file.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    #[default]
    Text,
    Json,
}

/// Build a tracing layer that appends to `log_file` via a non-blocking writer.
/// Without a log file the layer does nothing.
pub fn file_layer<S>(
    log_file: Option<&Path>,
    format: FileFormat,
) -> Result<(BoxLayer<S>, Option<WorkerGuard>)>
where
    S: Subscriber + for<'a> LookupSpan<'a> + Send + Sync + 'static,
{
    let Some(log_file) = log_file else {
        return Ok((noop_layer(), None));
    };

    ensure_log_dir(log_file)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .with_context(|| format!("failed to open log file {}", log_file.display()))?;

    let (non_blocking, guard) = tracing_appender::non_blocking(file);
    let layer = tracing_fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let layer: BoxLayer<S> = match format {
        FileFormat::Text => Box::new(layer),
        FileFormat::Json => Box::new(layer.json()),
    };
    Ok((layer, Some(guard)))
}

fn ensure_log_dir(log_file: &Path) -> Result<()> {
    let directory = log_file.parent().ok_or_else(|| {
        anyhow!(
            "log file path {} has no parent directory",
            log_file.display()
        )
    })?;
    if directory.as_os_str().is_empty() {
        return Ok(());
    }
    create_dir_all(directory)
        .with_context(|| format!("failed to create log directory {}", directory.display()))?;
    Ok(())
}
