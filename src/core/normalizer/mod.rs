//! Rewrites generically decoded YAML into string-keyed JSON values.
//!
//! YAML allows mapping keys of any type (integers, floats, booleans, null and
//! even nested mappings) while JSON only allows strings. Templates decoded from
//! YAML are walked recursively and every mapping key is converted to text:
//!
//! - strings pass through unchanged
//! - integers use their decimal representation
//! - floats use scientific notation with shortest round-trip precision
//!   (`1.5` becomes `1.5E+00`)
//! - booleans become `true`/`false`, null becomes the empty string
//!
//! A key that is itself a mapping is not kept as a composite key: its entries
//! are normalized into the mapping currently being built, and the value paired
//! with it is stored under the empty-string key. Templates that rely on YAML
//! complex keys therefore flatten in a surprising way; this mirrors how such
//! documents have always been treated and is kept as-is.
//!
//! Tagged values, as used by CloudFormation short-form intrinsics, are
//! rewritten into their long form (`!Ref X` becomes `{"Ref": "X"}`, `!Sub s`
//! becomes `{"Fn::Sub": "s"}`). Nothing is evaluated.

use crate::core::error::{GenerateError, GenerateResult};
use serde_json::{Map, Value as JsonValue};
use serde_yaml::{Mapping, Number, Value as YamlValue};

/// Tags whose long form is not prefixed with `Fn::`.
const UNPREFIXED_TAGS: &[&str] = &["Ref", "Condition"];

/// Normalize a whole decoded YAML document.
pub fn normalize_document(document: YamlValue) -> GenerateResult<JsonValue> {
    normalize_value(document)
}

/// Normalize `mapping` and merge the result into `out`.
///
/// Entries produced by mapping-typed keys are written first, so on collision
/// the mapping's own entries win.
pub fn normalize_mapping(mapping: Mapping, out: &mut Map<String, JsonValue>) -> GenerateResult<()> {
    let mut own = Map::new();
    for (key, value) in mapping {
        let key = match key {
            YamlValue::Mapping(nested) => {
                normalize_mapping(nested, out)?;
                String::new()
            }
            other => key_text(other)?,
        };
        own.insert(key, normalize_value(value)?);
    }
    out.extend(own);
    Ok(())
}

fn normalize_value(value: YamlValue) -> GenerateResult<JsonValue> {
    Ok(match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(flag) => JsonValue::Bool(flag),
        YamlValue::Number(number) => number_value(&number),
        YamlValue::String(text) => JsonValue::String(text),
        YamlValue::Sequence(items) => JsonValue::Array(
            items
                .into_iter()
                .map(normalize_value)
                .collect::<GenerateResult<Vec<_>>>()?,
        ),
        YamlValue::Mapping(mapping) => {
            let mut out = Map::new();
            normalize_mapping(mapping, &mut out)?;
            JsonValue::Object(out)
        }
        YamlValue::Tagged(tagged) => {
            let tag = tagged.tag.to_string();
            let name = tag.trim_start_matches('!');
            let key = if UNPREFIXED_TAGS.contains(&name) {
                name.to_string()
            } else {
                format!("Fn::{}", name)
            };
            let mut out = Map::new();
            out.insert(key, normalize_value(tagged.value)?);
            JsonValue::Object(out)
        }
    })
}

fn key_text(key: YamlValue) -> GenerateResult<String> {
    match key {
        YamlValue::String(text) => Ok(text),
        YamlValue::Number(number) => Ok(number_key(&number)),
        YamlValue::Bool(flag) => Ok(flag.to_string()),
        YamlValue::Null => Ok(String::new()),
        YamlValue::Tagged(tagged) => key_text(tagged.value),
        YamlValue::Sequence(_) => Err(GenerateError::InputParse(
            "sequence used as a mapping key cannot be converted to a string key".to_string(),
        )),
        // handled by the caller before reaching here
        YamlValue::Mapping(_) => Ok(String::new()),
    }
}

fn number_key(number: &Number) -> String {
    if let Some(value) = number.as_i64() {
        value.to_string()
    } else if let Some(value) = number.as_u64() {
        value.to_string()
    } else {
        float_key(number.as_f64().unwrap_or(f64::NAN))
    }
}

/// Scientific notation with a signed, at least two digit exponent.
pub fn float_key(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    let formatted = format!("{:E}", value);
    match formatted.split_once('E') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            let sign = if exponent < 0 { '-' } else { '+' };
            format!("{}E{}{:02}", mantissa, sign, exponent.abs())
        }
        None => formatted,
    }
}

fn number_value(number: &Number) -> JsonValue {
    if let Some(value) = number.as_i64() {
        JsonValue::from(value)
    } else if let Some(value) = number.as_u64() {
        JsonValue::from(value)
    } else {
        let value = number.as_f64().unwrap_or(f64::NAN);
        // JSON has no NaN or infinity literal
        serde_json::Number::from_f64(value)
            .map(JsonValue::Number)
            .unwrap_or_else(|| JsonValue::String(float_key(value)))
    }
}
