use serde::{Deserialize, Serialize};
use std::fmt;

/// Textual format of a template or parameters document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DocumentFormat {
    #[default]
    Json,
    Yaml,
}

impl DocumentFormat {
    /// Select YAML when the flag is set, JSON otherwise.
    pub fn from_yaml_flag(yaml: bool) -> Self {
        if yaml {
            DocumentFormat::Yaml
        } else {
            DocumentFormat::Json
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentFormat::Json => write!(f, "json"),
            DocumentFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// A single entry of a parameters file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "ParameterKey")]
    pub parameter_key: String,

    #[serde(rename = "ParameterValue", default)]
    pub parameter_value: String,
}

impl Parameter {
    pub fn new<K: Into<String>>(key: K) -> Self {
        Parameter {
            parameter_key: key.into(),
            parameter_value: String::new(),
        }
    }

    pub fn with_value<K: Into<String>, V: Into<String>>(key: K, value: V) -> Self {
        Parameter {
            parameter_key: key.into(),
            parameter_value: value.into(),
        }
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{} {}}}", self.parameter_key, self.parameter_value)
    }
}

/// Ordered collection of parameters as persisted in a parameters file.
///
/// Keys are expected to be unique but uniqueness is not enforced; a hand-edited
/// file with duplicates is carried through as-is.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterList(Vec<Parameter>);

impl ParameterList {
    pub fn new() -> Self {
        ParameterList(Vec::new())
    }

    pub fn push(&mut self, parameter: Parameter) {
        self.0.push(parameter);
    }

    /// Sort by key using byte-wise lexicographic ordering.
    pub fn sort_by_key(&mut self) {
        self.0
            .sort_by(|a, b| a.parameter_key.cmp(&b.parameter_key));
    }

    pub fn is_sorted_by_key(&self) -> bool {
        self.0
            .windows(2)
            .all(|pair| pair[0].parameter_key <= pair[1].parameter_key)
    }

    pub fn get(&self, key: &str) -> Option<&Parameter> {
        self.0.iter().find(|p| p.parameter_key == key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|p| p.parameter_key.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Parameter> {
        self.0.iter()
    }

    pub fn retain<F>(&mut self, f: F)
    where
        F: FnMut(&Parameter) -> bool,
    {
        self.0.retain(f);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Parameter> {
        self.0
    }
}

impl From<Vec<Parameter>> for ParameterList {
    fn from(parameters: Vec<Parameter>) -> Self {
        ParameterList(parameters)
    }
}

impl FromIterator<Parameter> for ParameterList {
    fn from_iter<I: IntoIterator<Item = Parameter>>(iter: I) -> Self {
        ParameterList(iter.into_iter().collect())
    }
}

impl IntoIterator for ParameterList {
    type Item = Parameter;
    type IntoIter = std::vec::IntoIter<Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ParameterList {
    type Item = &'a Parameter;
    type IntoIter = std::slice::Iter<'a, Parameter>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
