use crate::core::types::DocumentFormat;
use anyhow::Result;
use serde::{de::DeserializeOwned, Serialize};

/// Default JSON indentation width.
pub const DEFAULT_INDENT: usize = 2;

pub trait Serializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>>;
    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T>;
}

/// JSON encoder with configurable indentation or minified output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonSerializer {
    pub indent: usize,
    pub minify: bool,
}

impl Default for JsonSerializer {
    fn default() -> Self {
        JsonSerializer {
            indent: DEFAULT_INDENT,
            minify: false,
        }
    }
}

impl Serializer for JsonSerializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>> {
        if self.minify {
            return serde_json::to_vec(data).map_err(Into::into);
        }

        let indent = " ".repeat(self.indent);
        let formatter = serde_json::ser::PrettyFormatter::with_indent(indent.as_bytes());
        let mut out = Vec::new();
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        data.serialize(&mut serializer)?;
        Ok(out)
    }

    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T> {
        serde_json::from_slice(data).map_err(Into::into)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct YamlSerializer;

impl Serializer for YamlSerializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>> {
        Ok(serde_yaml::to_string(data)?.into_bytes())
    }

    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T> {
        serde_yaml::from_slice(data).map_err(Into::into)
    }
}

/// Serializer selected at runtime from a [`DocumentFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentSerializer {
    Json(JsonSerializer),
    Yaml(YamlSerializer),
}

impl DocumentSerializer {
    /// Build the serializer for `format`. Indent and minify only apply to JSON.
    pub fn for_format(format: DocumentFormat, indent: usize, minify: bool) -> Self {
        match format {
            DocumentFormat::Json => DocumentSerializer::Json(JsonSerializer { indent, minify }),
            DocumentFormat::Yaml => DocumentSerializer::Yaml(YamlSerializer),
        }
    }

    pub fn format(&self) -> DocumentFormat {
        match self {
            DocumentSerializer::Json(_) => DocumentFormat::Json,
            DocumentSerializer::Yaml(_) => DocumentFormat::Yaml,
        }
    }

    /// Encode a document for output. JSON output gets its angle bracket
    /// escapes turned back into literal characters.
    pub fn encode<T: Serialize>(&self, data: &T) -> Result<Vec<u8>> {
        let encoded = self.serialize(data)?;
        Ok(match self {
            DocumentSerializer::Json(_) => unescape_brackets(&encoded),
            DocumentSerializer::Yaml(_) => encoded,
        })
    }
}

impl Serializer for DocumentSerializer {
    fn serialize<T: Serialize>(&self, data: &T) -> Result<Vec<u8>> {
        match self {
            DocumentSerializer::Json(json) => json.serialize(data),
            DocumentSerializer::Yaml(yaml) => yaml.serialize(data),
        }
    }

    fn deserialize<T: DeserializeOwned>(&self, data: &[u8]) -> Result<T> {
        match self {
            DocumentSerializer::Json(json) => json.deserialize(data),
            DocumentSerializer::Yaml(yaml) => yaml.deserialize(data),
        }
    }
}

/// Replace `\u003c` and `\u003e` escapes in JSON text with `<` and `>`.
///
/// Placeholders such as `<bucket-name>` are meant to stay readable in the
/// generated file. Other escape sequences, including escaped backslashes, are
/// copied untouched so the output remains valid JSON.
pub fn unescape_brackets(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut i = 0;
    while i < data.len() {
        if data[i] != b'\\' {
            out.push(data[i]);
            i += 1;
            continue;
        }

        if let Some(bracket) = escaped_bracket(&data[i..]) {
            out.push(bracket);
            i += 6;
            continue;
        }

        out.push(b'\\');
        if let Some(&next) = data.get(i + 1) {
            out.push(next);
        }
        i += 2;
    }
    out
}

fn escaped_bracket(rest: &[u8]) -> Option<u8> {
    let sequence = rest.get(..6)?;
    if !sequence.starts_with(b"\\u00") {
        return None;
    }
    match &sequence[4..] {
        b"3c" | b"3C" => Some(b'<'),
        b"3e" | b"3E" => Some(b'>'),
        _ => None,
    }
}
