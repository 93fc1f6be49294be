pub mod config;
pub mod error;
pub mod generator;
pub mod merger;
pub mod normalizer;
pub mod template;
pub mod types;

pub use config::{ConfigLoader, ConfigValidator, GenerateConfig, OutputOptions, ParamgenConfig};
pub use error::{GenerateError, GenerateResult};
pub use generator::{generate, Destination, GenerateReport, Generator};
pub use merger::{merge, MergeOutcome};
pub use template::{extract_parameters, parse_template, ParameterMetadata};
pub use types::*;
