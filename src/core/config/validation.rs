use super::GenerateConfig;
use crate::core::error::{GenerateError, GenerateResult};
use crate::core::types::DocumentFormat;
use crate::utils::serialization::DEFAULT_INDENT;

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration rules and log settings that have no effect.
    pub fn validate(config: &GenerateConfig) -> GenerateResult<()> {
        // An empty path counts as missing, as with an empty -f value
        let has_input = config
            .input_path
            .as_ref()
            .is_some_and(|path| !path.as_os_str().is_empty());
        if !has_input {
            return Err(GenerateError::MissingInputPath);
        }

        for warning in Self::warnings(config) {
            tracing::warn!("{}", warning);
        }
        Ok(())
    }

    /// Combinations of settings that are accepted but ignored.
    pub fn warnings(config: &GenerateConfig) -> Vec<&'static str> {
        let mut warnings = Vec::new();
        if config.output.format == DocumentFormat::Yaml {
            if config.output.minify {
                warnings.push("minify has no effect on YAML output");
            }
            if config.output.indent != DEFAULT_INDENT {
                warnings.push("indent has no effect on YAML output");
            }
        } else if config.output.minify && config.output.indent != DEFAULT_INDENT {
            warnings.push("indent has no effect on minified output");
        }

        if config.output_path.is_none() && (config.overwrite || config.prune) {
            warnings.push("overwrite and prune only apply when writing to an output file");
        } else if config.overwrite && config.prune {
            warnings.push("prune has no effect when overwriting the output file");
        }
        warnings
    }
}
