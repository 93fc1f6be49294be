use crate::core::config::{GenerateConfig, ParamgenConfig};
use crate::core::types::DocumentFormat;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Template to read parameter declarations from (required)
    #[arg(short = 'f', long = "file", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Parameters file to create or update (default: print to stdout)
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to config file (default: ./paramgen.toml when present)
    #[arg(long, value_name = "FILE", help_heading = "Configuration")]
    pub config: Option<PathBuf>,

    /// Read the template as YAML instead of JSON
    #[arg(long = "inyaml", visible_alias = "in-yaml", help_heading = "Formats")]
    pub in_yaml: bool,

    /// Write YAML instead of JSON
    #[arg(long = "outyaml", visible_alias = "out-yaml", help_heading = "Formats")]
    pub out_yaml: bool,

    /// Write minified JSON
    #[arg(long = "min", visible_alias = "minify", help_heading = "Formats")]
    pub minify: bool,

    /// Spaces used to indent JSON output (default: 2)
    #[arg(
        long = "spaces",
        visible_alias = "indent",
        value_name = "N",
        help_heading = "Formats"
    )]
    pub spaces: Option<usize>,

    /// Replace an existing parameters file instead of merging into it
    #[arg(long, help_heading = "Merging")]
    pub overwrite: bool,

    /// Remove parameters from an existing file that the template no longer declares
    #[arg(short = 'r', long = "prune", help_heading = "Merging")]
    pub prune: bool,

    /// Annotate new parameter values with type, default and description
    #[arg(short = 'v', long, help_heading = "Output Options")]
    pub verbose: bool,
}

impl GenerateArgs {
    /// Layer command line flags over the file/env defaults. A flag that is set
    /// always wins; an unset flag leaves the default in place.
    pub fn into_config(self, defaults: &ParamgenConfig) -> GenerateConfig {
        let mut config = GenerateConfig::from_file_config(defaults);
        config.input_path = self.file;
        config.output_path = self.output;

        if self.in_yaml {
            config.input_format = DocumentFormat::Yaml;
        }
        if self.out_yaml {
            config.output.format = DocumentFormat::Yaml;
        }
        config.output.minify |= self.minify;
        if let Some(spaces) = self.spaces {
            config.output.indent = spaces;
        }
        config.overwrite |= self.overwrite;
        config.prune |= self.prune;
        config.verbose |= self.verbose;
        config
    }
}
