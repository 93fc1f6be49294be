use crate::logging::layers::console::ConsoleOutput;
use crate::logging::layers::file::FileFormat;
use crate::utils::files;
use crate::Result;
use anyhow::{anyhow, bail, Context};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing_subscriber::filter::Directive;

/// Resolved `[logging]` settings.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset.
    pub default_level: String,
    /// `None` leaves the choice to [`select_console_output`](crate::logging::layers::console::select_console_output).
    pub console_output: Option<ConsoleOutput>,
    pub log_file: Option<PathBuf>,
    pub file_format: FileFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            default_level: "info".to_string(),
            console_output: None,
            log_file: None,
            file_format: FileFormat::Text,
        }
    }
}

/// Only the `[logging]` table of paramgen.toml; other tables are ignored here.
#[derive(Debug, Default, Deserialize)]
struct LoggingFile {
    #[serde(default)]
    logging: LoggingSection,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingSection {
    default_level: Option<String>,
    console_output: Option<ConsoleOutput>,
    log_file: Option<PathBuf>,
    file_format: Option<FileFormat>,
}

impl LoggingConfig {
    /// Defaults, then the config file at `config_path`, then `PARAMGEN_LOG_*`.
    ///
    /// A relative `log_file` from the file is taken relative to the file's
    /// directory; one from the environment relative to `working_dir`.
    pub fn load(config_path: Option<&Path>, working_dir: &Path) -> Result<Self> {
        let mut config = LoggingConfig::default();

        if let Some(path) = config_path {
            if let Some(section) = read_section(path)? {
                let base = path.parent().unwrap_or(working_dir);
                config.merge_section(section, base);
            }
        }

        config.apply_env_overrides(working_dir)?;
        config.validate()?;
        Ok(config)
    }

    fn merge_section(&mut self, section: LoggingSection, base: &Path) {
        if let Some(level) = section.default_level {
            self.default_level = level;
        }
        if section.console_output.is_some() {
            self.console_output = section.console_output;
        }
        if let Some(log_file) = section.log_file {
            self.log_file = Some(base.join(log_file));
        }
        if let Some(format) = section.file_format {
            self.file_format = format;
        }
    }

    fn apply_env_overrides(&mut self, working_dir: &Path) -> Result<()> {
        if let Some(log_file) = env::var_os("PARAMGEN_LOG_FILE").filter(|v| !v.is_empty()) {
            self.log_file = Some(working_dir.join(log_file));
        }
        if let Ok(console) = env::var("PARAMGEN_LOG_CONSOLE") {
            let output = console
                .parse::<ConsoleOutput>()
                .map_err(|err| anyhow!("PARAMGEN_LOG_CONSOLE: {}", err))?;
            self.console_output = Some(output);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if Directive::from_str(&self.default_level).is_err() {
            bail!(
                "logging.default_level '{}' is not a valid tracing directive",
                self.default_level
            );
        }
        if let Some(path) = &self.log_file {
            if path.file_name().is_none() {
                bail!("logging.log_file {} does not name a file", path.display());
            }
        }
        Ok(())
    }
}

fn read_section(path: &Path) -> Result<Option<LoggingSection>> {
    let Some(content) = files::read_if_exists(path)
        .with_context(|| format!("failed to read {}", path.display()))?
    else {
        return Ok(None);
    };
    let text = String::from_utf8(content)
        .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
    let parsed: LoggingFile = toml::from_str(&text)
        .with_context(|| format!("failed to parse [logging] in {}", path.display()))?;
    Ok(Some(parsed.logging))
}
