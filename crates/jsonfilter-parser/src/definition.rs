//! Typed intermediate representation of a decoded filter definition
//!
//! Decoders produce different shapes: `serde_json` yields string-keyed
//! objects while `serde_yaml_ng` yields mappings keyed by arbitrary YAML
//! values. Both are normalized here into one tree of string-keyed mappings,
//! sequences and scalar literals before the parser looks at any token.

use indexmap::IndexMap;
use jsonfilter_diagnostics::{FilterError, FilterResult};
use jsonfilter_types::Literal;
use serde_json::{Map as JsonMap, Value as JsonValue};
use serde_yaml_ng::{Mapping as YamlMapping, Value as YamlValue};

/// A decoded filter definition node
#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    /// String-keyed mapping, in authoring order
    Mapping(IndexMap<String, Definition>),
    /// Ordered sequence
    Sequence(Vec<Definition>),
    /// Anything else
    Scalar(Literal),
}

impl Definition {
    /// Short name of the node shape, used in configuration errors
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Mapping(_) => "mapping",
            Self::Sequence(_) => "sequence",
            Self::Scalar(literal) => literal.type_name(),
        }
    }

    /// Collapse the node into a literal; containers become structural values
    pub fn into_literal(self) -> Literal {
        match self {
            Self::Scalar(literal) => literal,
            other => Literal::Other(other.into_json()),
        }
    }

    fn into_json(self) -> JsonValue {
        match self {
            Self::Mapping(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(key, value)| (key, value.into_json()))
                    .collect(),
            ),
            Self::Sequence(items) => {
                JsonValue::Array(items.into_iter().map(Self::into_json).collect())
            }
            Self::Scalar(literal) => literal.to_json(),
        }
    }
}

impl From<JsonValue> for Definition {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Object(map) => map.into(),
            JsonValue::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            scalar => Self::Scalar(Literal::from(scalar)),
        }
    }
}

impl From<JsonMap<String, JsonValue>> for Definition {
    fn from(map: JsonMap<String, JsonValue>) -> Self {
        Self::Mapping(
            map.into_iter()
                .map(|(key, value)| (key, Self::from(value)))
                .collect(),
        )
    }
}

impl TryFrom<YamlValue> for Definition {
    type Error = FilterError;

    fn try_from(value: YamlValue) -> FilterResult<Self> {
        Ok(match value {
            YamlValue::Null => Self::Scalar(Literal::Null),
            YamlValue::Bool(b) => Self::Scalar(Literal::Bool(b)),
            YamlValue::Number(n) => Self::Scalar(if let Some(i) = n.as_i64() {
                Literal::Signed(i)
            } else if let Some(u) = n.as_u64() {
                Literal::Unsigned(u)
            } else {
                Literal::Float(n.as_f64().unwrap_or(f64::NAN))
            }),
            YamlValue::String(s) => Self::Scalar(Literal::String(s)),
            YamlValue::Sequence(items) => Self::Sequence(
                items
                    .into_iter()
                    .map(Self::try_from)
                    .collect::<FilterResult<_>>()?,
            ),
            YamlValue::Mapping(mapping) => Self::try_from(mapping)?,
            YamlValue::Tagged(tagged) => Self::try_from(tagged.value)?,
        })
    }
}

impl TryFrom<YamlMapping> for Definition {
    type Error = FilterError;

    fn try_from(mapping: YamlMapping) -> FilterResult<Self> {
        let mut map = IndexMap::with_capacity(mapping.len());
        for (key, value) in mapping {
            let YamlValue::String(key) = key else {
                return Err(FilterError::non_string_key(format!("{key:?}")));
            };
            map.insert(key, Self::try_from(value)?);
        }
        Ok(Self::Mapping(map))
    }
}
