pub mod loader;
pub mod validation;

pub use loader::ConfigLoader;
pub use validation::ConfigValidator;

use crate::core::types::DocumentFormat;
use crate::utils::serialization::DEFAULT_INDENT;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// File name looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "paramgen.toml";

/// Defaults loaded from paramgen.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ParamgenConfig {
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Merge configuration
    #[serde(default)]
    pub merge: MergeConfig,

    /// Annotation configuration
    #[serde(default)]
    pub annotate: AnnotateConfig,
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct InputConfig {
    /// Read templates as YAML
    #[serde(default)]
    pub yaml: bool,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Write YAML instead of JSON
    #[serde(default)]
    pub yaml: bool,

    /// Write minified JSON
    #[serde(default)]
    pub minify: bool,

    /// JSON indentation width
    #[serde(default = "default_indent")]
    pub indent: usize,
}

/// Merge configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct MergeConfig {
    /// Discard existing destination content
    #[serde(default)]
    pub overwrite: bool,

    /// Drop parameters the template no longer declares
    #[serde(default)]
    pub prune: bool,
}

/// Annotation configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AnnotateConfig {
    /// Pack descriptor metadata into new parameter values
    #[serde(default)]
    pub verbose: bool,
}

fn default_indent() -> usize {
    DEFAULT_INDENT
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            yaml: false,
            minify: false,
            indent: default_indent(),
        }
    }
}

/// How the parameter list is encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputOptions {
    pub format: DocumentFormat,
    pub minify: bool,
    pub indent: usize,
}

impl Default for OutputOptions {
    fn default() -> Self {
        OutputOptions {
            format: DocumentFormat::Json,
            minify: false,
            indent: DEFAULT_INDENT,
        }
    }
}

/// Fully resolved settings for a single generate run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenerateConfig {
    /// Template to read. Required; `None` fails the run.
    pub input_path: Option<PathBuf>,
    /// Destination file. `None` writes to stdout and skips merging.
    pub output_path: Option<PathBuf>,
    pub input_format: DocumentFormat,
    pub output: OutputOptions,
    pub overwrite: bool,
    pub prune: bool,
    pub verbose: bool,
}

impl GenerateConfig {
    pub fn new<P: Into<PathBuf>>(input_path: P) -> Self {
        GenerateConfig {
            input_path: Some(input_path.into()),
            ..Default::default()
        }
    }

    /// Start from file defaults; CLI flags are layered on top by the caller.
    pub fn from_file_config(file: &ParamgenConfig) -> Self {
        GenerateConfig {
            input_path: None,
            output_path: None,
            input_format: DocumentFormat::from_yaml_flag(file.input.yaml),
            output: OutputOptions {
                format: DocumentFormat::from_yaml_flag(file.output.yaml),
                minify: file.output.minify,
                indent: file.output.indent,
            },
            overwrite: file.merge.overwrite,
            prune: file.merge.prune,
            verbose: file.annotate.verbose,
        }
    }
}
