use super::{ParamgenConfig, CONFIG_FILE_NAME};
use crate::Result;
use anyhow::{bail, Context};
use std::env;
use std::path::{Path, PathBuf};

pub struct ConfigLoader;

impl ConfigLoader {
    /// Locate the config file: an explicit path wins, otherwise
    /// `paramgen.toml` in `working_dir` when it exists.
    pub fn resolve_path(explicit: Option<&Path>, working_dir: &Path) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        let candidate = working_dir.join(CONFIG_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Load defaults, then the config file, then environment overrides.
    /// An explicitly requested file must exist.
    pub fn load(explicit: Option<&Path>, working_dir: &Path) -> Result<ParamgenConfig> {
        let mut config = match Self::resolve_path(explicit, working_dir) {
            Some(path) => match Self::load_from_file(&path)? {
                Some(config) => config,
                None if explicit.is_some() => {
                    bail!("config file {} does not exist", path.display())
                }
                None => ParamgenConfig::default(),
            },
            None => ParamgenConfig::default(),
        };

        Self::apply_env_overrides(&mut config);
        Ok(config)
    }

    /// Load config from specific file path
    /// Returns Ok(None) if file doesn't exist
    pub fn load_from_file(path: &Path) -> Result<Option<ParamgenConfig>> {
        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: ParamgenConfig = toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        tracing::debug!(path = %path.display(), "loaded config file");
        Ok(Some(config))
    }

    /// Apply environment variable overrides to the configuration.
    /// Values that do not parse are ignored.
    fn apply_env_overrides(config: &mut ParamgenConfig) {
        if let Some(yaml) = env_flag("PARAMGEN_INPUT_YAML") {
            config.input.yaml = yaml;
        }

        if let Some(yaml) = env_flag("PARAMGEN_OUTPUT_YAML") {
            config.output.yaml = yaml;
        }

        if let Some(minify) = env_flag("PARAMGEN_MINIFY") {
            config.output.minify = minify;
        }

        if let Ok(indent_str) = env::var("PARAMGEN_INDENT") {
            if let Ok(indent) = indent_str.trim().parse::<usize>() {
                config.output.indent = indent;
            }
        }

        if let Some(overwrite) = env_flag("PARAMGEN_OVERWRITE") {
            config.merge.overwrite = overwrite;
        }

        if let Some(prune) = env_flag("PARAMGEN_PRUNE") {
            config.merge.prune = prune;
        }

        if let Some(verbose) = env_flag("PARAMGEN_VERBOSE") {
            config.annotate.verbose = verbose;
        }
    }

    /// Get documentation for supported environment variables
    pub fn env_var_documentation() -> &'static [&'static str] {
        &[
            "PARAMGEN_INPUT_YAML - Read templates as YAML (true/false)",
            "PARAMGEN_OUTPUT_YAML - Write YAML output (true/false)",
            "PARAMGEN_MINIFY - Write minified JSON (true/false)",
            "PARAMGEN_INDENT - JSON indentation width (default: 2)",
            "PARAMGEN_OVERWRITE - Discard existing parameters file content (true/false)",
            "PARAMGEN_PRUNE - Remove parameters no longer in the template (true/false)",
            "PARAMGEN_VERBOSE - Annotate new parameters with their metadata (true/false)",
            "PARAMGEN_LOG_FILE - Append logs to this file",
            "PARAMGEN_LOG_CONSOLE - Console log sink: stdout, stderr or none",
        ]
    }
}

fn env_flag(name: &str) -> Option<bool> {
    env::var(name)
        .ok()
        .and_then(|value| value.trim().parse::<bool>().ok())
}
