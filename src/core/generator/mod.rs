//! The generate pipeline.
//!
//! A run reads the template, extracts its parameters, optionally merges them
//! with the parameters file already at the destination, and writes the result
//! once. Every failure aborts the run and is returned to the caller.

use crate::core::config::{ConfigValidator, GenerateConfig};
use crate::core::error::{GenerateError, GenerateResult};
use crate::core::merger::{self, MergeOutcome};
use crate::core::template;
use crate::core::types::{Parameter, ParameterList};
use crate::utils::files;
use crate::utils::serialization::{DocumentSerializer, Serializer};
use std::fmt;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where the generated document went.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Destination::Stdout => write!(f, "<stdout>"),
            Destination::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateReport {
    pub destination: Destination,
    /// The list as written.
    pub parameters: ParameterList,
    /// Keys that were not present before this run.
    pub added: Vec<String>,
    /// Entries removed by pruning.
    pub pruned: Vec<Parameter>,
    /// Whether an existing parameters file was merged.
    pub merged: bool,
}

pub struct Generator {
    config: GenerateConfig,
    serializer: DocumentSerializer,
}

impl Generator {
    pub fn new(config: GenerateConfig) -> Self {
        let serializer = DocumentSerializer::for_format(
            config.output.format,
            config.output.indent,
            config.output.minify,
        );
        Generator { config, serializer }
    }

    /// Run the pipeline, printing to the process stdout when no output file
    /// is configured.
    pub fn run(&self) -> GenerateResult<GenerateReport> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.run_with_stdout(&mut handle)
    }

    /// Run the pipeline with `stdout` standing in for standard output.
    pub fn run_with_stdout<W: Write>(&self, stdout: &mut W) -> GenerateResult<GenerateReport> {
        ConfigValidator::validate(&self.config)?;
        let input_path = self
            .config
            .input_path
            .as_deref()
            .ok_or(GenerateError::MissingInputPath)?;

        let fresh = self.load_fresh_parameters(input_path)?;

        let existing = match &self.config.output_path {
            Some(path) if !self.config.overwrite => self.load_existing(path)?,
            _ => None,
        };
        let merged = existing.is_some();
        let outcome = self.merge(fresh, existing);

        let content = self.encode(&outcome.parameters)?;
        let destination = match &self.config.output_path {
            Some(path) => {
                files::write_file(path, &content).map_err(|source| {
                    GenerateError::OutputWrite {
                        path: path.clone(),
                        source,
                    }
                })?;
                Destination::File(path.clone())
            }
            None => {
                write_stdout(stdout, &content)?;
                Destination::Stdout
            }
        };

        tracing::debug!(
            destination = %destination,
            parameters = outcome.parameters.len(),
            added = outcome.added.len(),
            pruned = outcome.pruned.len(),
            merged,
            "parameters written"
        );

        Ok(GenerateReport {
            destination,
            parameters: outcome.parameters,
            added: outcome.added,
            pruned: outcome.pruned,
            merged,
        })
    }

    /// Read the template and derive its parameter list.
    pub fn load_fresh_parameters(&self, input_path: &Path) -> GenerateResult<ParameterList> {
        let content = std::fs::read(input_path).map_err(|source| GenerateError::InputRead {
            path: input_path.to_path_buf(),
            source,
        })?;
        let document = template::parse_template(&content, self.config.input_format)?;
        template::extract_parameters(&document, self.config.verbose)
    }

    /// Read the parameters file at `path`. Missing or blank files count as
    /// absent. The file is decoded with the output format.
    pub fn load_existing(&self, path: &Path) -> GenerateResult<Option<ParameterList>> {
        let content = files::read_if_exists(path).map_err(|source| GenerateError::OutputRead {
            path: path.to_path_buf(),
            source,
        })?;

        match content {
            Some(content) if !files::is_blank(&content) => {
                let parameters: ParameterList =
                    self.serializer.deserialize(&content).map_err(|e| {
                        GenerateError::OutputParse {
                            path: path.to_path_buf(),
                            message: e.to_string(),
                        }
                    })?;
                tracing::debug!(
                    path = %path.display(),
                    count = parameters.len(),
                    "loaded existing parameters"
                );
                Ok(Some(parameters))
            }
            _ => Ok(None),
        }
    }

    /// Combine the fresh list with the persisted one, if any.
    pub fn merge(&self, fresh: ParameterList, existing: Option<ParameterList>) -> MergeOutcome {
        match existing {
            Some(existing) => merger::merge(existing, &fresh, self.config.prune),
            None => merger::fresh_only(&fresh),
        }
    }

    /// Encode a parameter list in the configured output format.
    pub fn encode(&self, parameters: &ParameterList) -> GenerateResult<Vec<u8>> {
        self.serializer
            .encode(parameters)
            .map_err(|e| GenerateError::Encode(e.to_string()))
    }
}

fn write_stdout<W: Write>(stdout: &mut W, content: &[u8]) -> GenerateResult<()> {
    let stdout_error = |source| GenerateError::OutputWrite {
        path: PathBuf::from("<stdout>"),
        source,
    };
    stdout.write_all(content).map_err(stdout_error)?;
    if !content.ends_with(b"\n") {
        stdout.write_all(b"\n").map_err(stdout_error)?;
    }
    stdout.flush().map_err(stdout_error)
}

/// Run the pipeline for `config`, writing to the process stdout when needed.
pub fn generate(config: GenerateConfig) -> GenerateResult<GenerateReport> {
    Generator::new(config).run()
}
