use crate::core::error::{GenerateError, GenerateResult};
use crate::core::normalizer;
use crate::core::types::{DocumentFormat, Parameter, ParameterList};
use serde_json::{Map, Value};

/// Top-level template key holding the parameter declarations.
pub const PARAMETERS_KEY: &str = "Parameters";

/// Descriptor fields of a declared parameter, used for verbose annotation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParameterMetadata {
    pub type_name: String,
    pub default: Option<Value>,
    pub allowed_values: Option<Vec<Value>>,
    pub allowed_pattern: Option<String>,
    pub description: Option<String>,
}

impl ParameterMetadata {
    /// Read metadata from a parameter descriptor.
    ///
    /// Descriptors that are not mappings carry no metadata. Known fields with
    /// the wrong shape are rejected.
    pub fn from_descriptor(name: &str, descriptor: &Value) -> GenerateResult<Self> {
        let mut metadata = ParameterMetadata::default();
        let Some(fields) = descriptor.as_object() else {
            return Ok(metadata);
        };

        for (field, value) in fields {
            match field.as_str() {
                "Type" => metadata.type_name = string_field(name, field, value)?,
                "Default" => {
                    if !value.is_null() {
                        metadata.default = Some(value.clone());
                    }
                }
                "AllowedValues" => match value {
                    Value::Array(values) => metadata.allowed_values = Some(values.clone()),
                    _ => {
                        return Err(GenerateError::InputParse(format!(
                            "AllowedValues of parameter {} must be a sequence",
                            name
                        )))
                    }
                },
                "AllowedPattern" => {
                    metadata.allowed_pattern = Some(string_field(name, field, value)?)
                }
                "Description" => metadata.description = Some(string_field(name, field, value)?),
                _ => {}
            }
        }

        Ok(metadata)
    }

    /// Human-readable summary packed into the value of a new parameter.
    pub fn annotation(&self) -> String {
        let mut text = format!("Type: {}", self.type_name);
        if let Some(default) = &self.default {
            text.push_str(&format!(", Default: {}", display_value(default)));
        }
        if let Some(values) = &self.allowed_values {
            let rendered: Vec<String> = values.iter().map(display_value).collect();
            text.push_str(&format!(", AllowedValues: [{}]", rendered.join(" ")));
        }
        if let Some(pattern) = self.allowed_pattern.as_deref().filter(|p| !p.is_empty()) {
            text.push_str(&format!(", AllowedPattern: {}", pattern));
        }
        if let Some(description) = self.description.as_deref().filter(|d| !d.is_empty()) {
            text.push_str(&format!(", Description: {}", description));
        }
        text
    }
}

fn string_field(name: &str, field: &str, value: &Value) -> GenerateResult<String> {
    value.as_str().map(str::to_string).ok_or_else(|| {
        GenerateError::InputParse(format!(
            "{} of parameter {} must be a string",
            field, name
        ))
    })
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => {
            let rendered: Vec<String> = items.iter().map(display_value).collect();
            format!("[{}]", rendered.join(" "))
        }
        other => other.to_string(),
    }
}

/// Decode a template document. YAML input is normalized to string keys;
/// JSON input already satisfies that and is used as decoded. An empty or
/// comment-only YAML document is an empty mapping.
pub fn parse_template(content: &[u8], format: DocumentFormat) -> GenerateResult<Value> {
    let document = match format {
        DocumentFormat::Json => serde_json::from_slice::<Value>(content)
            .map_err(|e| GenerateError::InputParse(e.to_string()))?,
        DocumentFormat::Yaml => {
            let raw = serde_yaml::from_slice::<serde_yaml::Value>(content)
                .map_err(|e| GenerateError::InputParse(e.to_string()))?;
            match raw {
                serde_yaml::Value::Null => Value::Object(Map::new()),
                raw => normalizer::normalize_document(raw)?,
            }
        }
    };

    if !document.is_object() {
        return Err(GenerateError::InputParse(format!(
            "template root must be a mapping, found {}",
            kind_of(&document)
        )));
    }
    Ok(document)
}

/// Borrow the `Parameters` mapping of a template.
pub fn parameters_section(document: &Value) -> GenerateResult<&Map<String, Value>> {
    let section = document
        .get(PARAMETERS_KEY)
        .ok_or(GenerateError::MissingParameters)?;
    section.as_object().ok_or_else(|| {
        GenerateError::InputParse(format!(
            "{} must be a mapping, found {}",
            PARAMETERS_KEY,
            kind_of(section)
        ))
    })
}

/// Build the fresh parameter list for a template, sorted by key.
///
/// Values are empty unless `verbose` is set, in which case each value carries
/// the parameter's descriptor annotation.
pub fn extract_parameters(document: &Value, verbose: bool) -> GenerateResult<ParameterList> {
    let section = parameters_section(document)?;

    let mut parameters = ParameterList::new();
    for (name, descriptor) in section {
        let mut parameter = Parameter::new(name.as_str());
        if verbose {
            parameter.parameter_value =
                ParameterMetadata::from_descriptor(name, descriptor)?.annotation();
        }
        parameters.push(parameter);
    }
    parameters.sort_by_key();

    tracing::debug!(count = parameters.len(), "extracted template parameters");
    Ok(parameters)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
