use crate::logging::layers::{noop_layer, BoxLayer};
use serde::Deserialize;
use std::fmt;
use std::io;
use std::str::FromStr;
use tracing::Subscriber;
use tracing_subscriber::fmt as tracing_fmt;
use tracing_subscriber::registry::LookupSpan;

/// Console sink for log events. The generated document never shares it.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleOutput {
    Stdout,
    #[default]
    Stderr,
    None,
}

impl ConsoleOutput {
    const ALL: [ConsoleOutput; 3] = [
        ConsoleOutput::Stdout,
        ConsoleOutput::Stderr,
        ConsoleOutput::None,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ConsoleOutput::Stdout => "stdout",
            ConsoleOutput::Stderr => "stderr",
            ConsoleOutput::None => "none",
        }
    }
}

impl fmt::Display for ConsoleOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConsoleOutput {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|output| output.as_str() == wanted)
            .ok_or_else(|| {
                format!(
                    "unknown console output '{}' (expected stdout, stderr or none)",
                    value
                )
            })
    }
}

/// Pick the console sink for this run.
///
/// Stdout carries the document when no output file is given, so a configured
/// stdout sink falls back to stderr in that case.
pub fn select_console_output(
    document_on_stdout: bool,
    configured: Option<ConsoleOutput>,
) -> ConsoleOutput {
    match configured.unwrap_or_default() {
        ConsoleOutput::Stdout if document_on_stdout => ConsoleOutput::Stderr,
        other => other,
    }
}

/// Build the console layer. `ConsoleOutput::None` installs no formatter.
pub fn console_layer<S>(output: ConsoleOutput) -> BoxLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a> + Send + Sync + 'static,
{
    let layer = tracing_fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    match output {
        ConsoleOutput::Stdout => Box::new(layer.with_writer(io::stdout)),
        ConsoleOutput::Stderr => Box::new(layer.with_writer(io::stderr)),
        ConsoleOutput::None => noop_layer(),
    }
}
