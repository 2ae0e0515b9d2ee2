//! Path resolution over raw JSON documents
//!
//! Paths are dot separated: `user.address.city`. A backslash escapes the next
//! character so `a\.b` addresses the key `"a.b"`. Numeric segments index into
//! arrays (`items.0.name`) and a final `#` segment yields an array's length
//! (`items.#`).
//!
//! Resolution streams through the document and stops once the addressed value
//! has been read. Only that value is decoded; siblings before it are scanned
//! and skipped, siblings after it are never read. A syntax error ahead of the
//! target still leaves the path unresolved, one behind it does not. When an
//! object repeats a key, the first occurrence wins.

use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value as JsonValue;
use std::borrow::Cow;
use std::fmt;

/// Outcome of resolving a path inside a document
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Resolved {
    value: Option<JsonValue>,
}

/// Resolve `path` inside the JSON `document`
///
/// Empty or undecodable documents, and paths that walk off the document,
/// resolve to a value for which [`Resolved::exists`] is false.
pub fn resolve(document: &[u8], path: &str) -> Resolved {
    if document.is_empty() || path.is_empty() {
        return Resolved::default();
    }

    let segments = split_path(path);
    let mut value = None;
    let mut deserializer = serde_json::Deserializer::from_slice(document);
    // Any error raised after the target was captured comes from input the
    // walk never needed; the captured value stands either way.
    let _ = PathSeed {
        segments: &segments,
        slot: &mut value,
    }
    .deserialize(&mut deserializer);
    Resolved { value }
}

/// Walks one level of the path and stores the addressed value in `slot`
struct PathSeed<'a> {
    segments: &'a [Cow<'a, str>],
    slot: &'a mut Option<JsonValue>,
}

impl<'de> DeserializeSeed<'de> for PathSeed<'_> {
    type Value = ();

    fn deserialize<D>(self, deserializer: D) -> Result<(), D::Error>
    where
        D: Deserializer<'de>,
    {
        if self.segments.is_empty() {
            *self.slot = Some(JsonValue::deserialize(deserializer)?);
            Ok(())
        } else {
            deserializer.deserialize_any(self)
        }
    }
}

impl<'de> Visitor<'de> for PathSeed<'_> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object or array")
    }

    fn visit_map<A>(self, mut map: A) -> Result<(), A::Error>
    where
        A: MapAccess<'de>,
    {
        let Some((segment, rest)) = self.segments.split_first() else {
            return Ok(());
        };
        while let Some(Key(key)) = map.next_key()? {
            if key == *segment {
                return map.next_value_seed(PathSeed {
                    segments: rest,
                    slot: self.slot,
                });
            }
            map.next_value::<IgnoredAny>()?;
        }
        Ok(())
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<(), A::Error>
    where
        A: SeqAccess<'de>,
    {
        let Some((segment, rest)) = self.segments.split_first() else {
            return Ok(());
        };

        if segment == "#" && rest.is_empty() {
            let mut len = 0usize;
            while seq.next_element::<IgnoredAny>()?.is_some() {
                len += 1;
            }
            *self.slot = Some(JsonValue::from(len));
            return Ok(());
        }

        let Ok(index) = segment.parse::<usize>() else {
            return Ok(());
        };
        for _ in 0..index {
            if seq.next_element::<IgnoredAny>()?.is_none() {
                return Ok(());
            }
        }
        seq.next_element_seed(PathSeed {
            segments: rest,
            slot: self.slot,
        })?;
        Ok(())
    }
}

/// Object key, borrowed from the document unless it contains escapes
struct Key<'de>(Cow<'de, str>);

impl<'de> Deserialize<'de> for Key<'de> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct KeyVisitor;

        impl<'de> Visitor<'de> for KeyVisitor {
            type Value = Key<'de>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object key")
            }

            fn visit_borrowed_str<E: de::Error>(self, v: &'de str) -> Result<Key<'de>, E> {
                Ok(Key(Cow::Borrowed(v)))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Key<'de>, E> {
                Ok(Key(Cow::Owned(v.to_owned())))
            }
        }

        deserializer.deserialize_str(KeyVisitor)
    }
}

fn split_path(path: &str) -> Vec<Cow<'_, str>> {
    if !path.contains('\\') {
        return path.split('.').map(Cow::Borrowed).collect();
    }

    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = path.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                if let Some(escaped) = chars.next() {
                    current.push(escaped);
                }
            }
            '.' => segments.push(Cow::Owned(std::mem::take(&mut current))),
            _ => current.push(c),
        }
    }
    segments.push(Cow::Owned(current));
    segments
}

impl Resolved {
    /// Wrap an already-decoded value
    pub fn found(value: JsonValue) -> Self {
        Self { value: Some(value) }
    }

    /// Whether the path addressed anything
    pub fn exists(&self) -> bool {
        self.value.is_some()
    }

    /// Whether the addressed value is JSON null
    pub fn is_null(&self) -> bool {
        matches!(self.value, Some(JsonValue::Null))
    }

    /// Raw decoded value
    pub fn value(&self) -> Option<&JsonValue> {
        self.value.as_ref()
    }

    /// The value if it is a JSON string
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_ref().and_then(JsonValue::as_str)
    }

    /// String form of the value
    ///
    /// Strings are returned verbatim, null and missing values as `""`,
    /// everything else as its compact JSON text.
    pub fn to_text(&self) -> Cow<'_, str> {
        match &self.value {
            None | Some(JsonValue::Null) => Cow::Borrowed(""),
            Some(JsonValue::String(s)) => Cow::Borrowed(s),
            Some(other) => Cow::Owned(other.to_string()),
        }
    }

    /// Coerced boolean
    ///
    /// Numbers are true when non-zero and strings when they spell a true value
    /// (`1`, `t`, `T`, `true`, `TRUE`, `True`).
    pub fn to_bool(&self) -> bool {
        match &self.value {
            Some(JsonValue::Bool(b)) => *b,
            Some(JsonValue::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(JsonValue::String(s)) => {
                matches!(s.as_str(), "1" | "t" | "T" | "true" | "TRUE" | "True")
            }
            _ => false,
        }
    }

    /// Coerced signed integer
    ///
    /// Numbers with a fractional part do not coerce.
    pub fn to_i64(&self) -> Option<i64> {
        match &self.value {
            Some(JsonValue::Bool(b)) => Some(i64::from(*b)),
            Some(JsonValue::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(whole_i64)),
            Some(JsonValue::String(s)) => {
                let s = s.trim();
                s.parse::<i64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(whole_i64))
            }
            _ => None,
        }
    }

    /// Coerced unsigned integer
    ///
    /// Negative values and numbers with a fractional part do not coerce.
    pub fn to_u64(&self) -> Option<u64> {
        match &self.value {
            Some(JsonValue::Bool(b)) => Some(u64::from(*b)),
            Some(JsonValue::Number(n)) => n.as_u64().or_else(|| n.as_f64().and_then(whole_u64)),
            Some(JsonValue::String(s)) => {
                let s = s.trim();
                s.parse::<u64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(whole_u64))
            }
            _ => None,
        }
    }

    /// Coerced float
    pub fn to_f64(&self) -> Option<f64> {
        match &self.value {
            Some(JsonValue::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
            Some(JsonValue::Number(n)) => n.as_f64(),
            Some(JsonValue::String(s)) => s.trim().parse::<f64>().ok(),
            _ => None,
        }
    }
}

fn whole_i64(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    (f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64).then_some(f as i64)
}

fn whole_u64(f: f64) -> Option<u64> {
    (f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64).then_some(f as u64)
}
