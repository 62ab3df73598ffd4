//! Record model: one row's JSON payload.

use serde::Serialize;
use serde_json::ser::Formatter;
use serde_json::{Map, Value};
use std::io::{self, Write};

/// Flat key/value record parsed from a `data_json` payload.
///
/// Keys keep their input order. A record is never mutated once built;
/// masking produces a new record via [`Record::with_overrides`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Parse a JSON payload. Anything but a JSON object is rejected.
    pub fn parse(payload: &str) -> anyhow::Result<Self> {
        match serde_json::from_str::<Value>(payload)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => anyhow::bail!("expected a JSON object, found {}", json_type(&other)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Whether a field holds a usable value.
    ///
    /// Missing keys, `null`, `""`, `false`, `0` and empty arrays/objects
    /// all count as absent.
    pub fn is_present(&self, key: &str) -> bool {
        self.fields.get(key).is_some_and(is_truthy)
    }

    /// Text form of a present field, as handed to a masker.
    ///
    /// Booleans render as `True`/`False`; numbers keep their source text.
    pub fn text(&self, key: &str) -> Option<String> {
        let value = self.fields.get(key).filter(|v| is_truthy(v))?;
        Some(match value {
            Value::String(s) => s.clone(),
            Value::Bool(true) => "True".to_string(),
            Value::Bool(false) => "False".to_string(),
            other => other.to_string(),
        })
    }

    /// Build a new record with some fields replaced by string values.
    ///
    /// Replaced keys keep their position; unknown keys are appended.
    pub fn with_overrides<I>(&self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields = self.fields.clone();
        for (key, value) in overrides {
            fields.insert(key, Value::String(value));
        }
        Self { fields }
    }

    /// Serialize without whitespace, escaping non-ASCII as `\uXXXX`.
    pub fn to_compact_json(&self) -> anyhow::Result<String> {
        let mut buf = Vec::with_capacity(64);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, AsciiFormatter);
        self.fields.serialize(&mut ser)?;
        Ok(String::from_utf8(buf)?)
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Compact formatter that only ever writes printable ASCII.
struct AsciiFormatter;

impl Formatter for AsciiFormatter {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let bytes = fragment.as_bytes();
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() && ch != '\u{7f}' {
                continue;
            }
            writer.write_all(&bytes[start..i])?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(&bytes[start..])
    }
}
