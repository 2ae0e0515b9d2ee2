//! Expected values for comparison operators

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// A literal value a comparison operator tests against
///
/// JSON numbers are tagged as the narrowest fitting variant: `Signed` first,
/// then `Unsigned`, then `Float`. Arrays and objects land in `Other` and are
/// compared structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// Null literal
    Null,
    /// Boolean literal
    Bool(bool),
    /// Signed integer literal (any width, widened to 64 bits)
    Signed(i64),
    /// Unsigned integer literal (any width, widened to 64 bits)
    Unsigned(u64),
    /// Floating point literal
    Float(f64),
    /// String literal
    String(String),
    /// Any other decoded value (arrays, objects)
    Other(JsonValue),
}

impl Literal {
    /// Check if literal is null
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Borrow the string if this is a string literal
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short name of the literal's type, used in configuration errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Signed(_) => "integer",
            Self::Unsigned(_) => "unsigned integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Other(JsonValue::Array(_)) => "array",
            Self::Other(JsonValue::Object(_)) => "object",
            Self::Other(_) => "value",
        }
    }

    /// Convert back into a JSON value
    pub fn to_json(&self) -> JsonValue {
        match self {
            Self::Null => JsonValue::Null,
            Self::Bool(b) => JsonValue::Bool(*b),
            Self::Signed(i) => JsonValue::from(*i),
            Self::Unsigned(u) => JsonValue::from(*u),
            Self::Float(f) => JsonValue::from(*f),
            Self::String(s) => JsonValue::String(s.clone()),
            Self::Other(v) => v.clone(),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => write!(f, "null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Signed(i) => write!(f, "{i}"),
            Self::Unsigned(u) => write!(f, "{u}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::String(s) => write!(f, "{s}"),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty: $($t:ty),*) => {
        $(
            impl From<$t> for Literal {
                fn from(value: $t) -> Self {
                    Self::$variant(<$wide>::from(value))
                }
            }
        )*
    };
}

impl_from_int!(Signed, i64: i8, i16, i32, i64);
impl_from_int!(Unsigned, u64: u8, u16, u32, u64);

impl From<isize> for Literal {
    fn from(value: isize) -> Self {
        // isize is at most 64 bits on every supported target
        Self::Signed(value as i64)
    }
}

impl From<usize> for Literal {
    fn from(value: usize) -> Self {
        Self::Unsigned(value as u64)
    }
}

impl From<f32> for Literal {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<f64> for Literal {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<()> for Literal {
    fn from(_: ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Literal>> From<Option<T>> for Literal {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl From<JsonValue> for Literal {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Self::Null,
            JsonValue::Bool(b) => Self::Bool(b),
            JsonValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Self::Signed(i)
                } else if let Some(u) = n.as_u64() {
                    Self::Unsigned(u)
                } else {
                    // serde_json numbers are always representable as one of the three
                    Self::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            JsonValue::String(s) => Self::String(s),
            other => Self::Other(other),
        }
    }
}
