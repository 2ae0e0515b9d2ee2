//! Filter error types

use crate::{
    ErrorCode, JF0001, JF0002, JF0003, JF0004, JF0005, JF0006, JF0007, JF0008, JF0009, JF0010,
    JF0100, JF0200, JF0300, JF0301, SourceLocation,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Text format a filter definition was authored in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefinitionFormat {
    Json,
    Yaml,
}

impl fmt::Display for DefinitionFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefinitionFormat::Json => write!(f, "json"),
            DefinitionFormat::Yaml => write!(f, "yaml"),
        }
    }
}

/// Main filter error type
///
/// Parsing and construction fail with one of these. Evaluation and
/// validation never do: a non-matching document is a normal outcome carried
/// inside a result record.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    /// Empty or missing field, malformed node, unknown or unimplemented token
    #[error("{code}: {message}")]
    Configuration { code: ErrorCode, message: String },

    /// Regular expression failed to compile
    #[error("{code}: invalid regex pattern {pattern:?}: {message}")]
    Compilation {
        code: ErrorCode,
        pattern: String,
        message: String,
    },

    /// Running node count went past the parser ceiling
    #[error("{code}: filter complexity {complexity} exceeds limit {limit}")]
    ComplexityExceeded {
        code: ErrorCode,
        complexity: usize,
        limit: usize,
    },

    /// Definition text could not be decoded
    #[error("{code}: parse {format}: {message}")]
    Decode {
        code: ErrorCode,
        format: DefinitionFormat,
        message: String,
        location: Option<SourceLocation>,
    },
}

impl FilterError {
    /// Create a configuration error with an explicit code
    pub fn configuration(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Configuration {
            code,
            message: message.into(),
        }
    }

    /// Path expression was empty
    pub fn empty_path() -> Self {
        Self::configuration(JF0001, "json path must not be empty")
    }

    /// Node shape is wrong
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::configuration(JF0002, message)
    }

    /// Node mapping has more than one key; names every key
    pub fn multiple_entries<S: AsRef<str>>(keys: &[S]) -> Self {
        let keys = keys.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(", ");
        Self::malformed(format!(
            "operator definition contains multiple entries: [{keys}]"
        ))
    }

    /// Token is neither a comparison nor a logic operator
    pub fn unsupported_operator(token: impl fmt::Display) -> Self {
        Self::configuration(JF0003, format!("operator {token} is not supported"))
    }

    /// Token is declared but has no implementation
    pub fn not_implemented(token: impl fmt::Display) -> Self {
        Self::configuration(
            JF0004,
            format!("comparison operator {token} is not implemented"),
        )
    }

    /// Operator configuration has the wrong type
    pub fn invalid_type(message: impl Into<String>) -> Self {
        Self::configuration(JF0005, message)
    }

    /// Required attribute absent from a comparison configuration
    pub fn missing_attribute(operator: impl fmt::Display, attribute: &str) -> Self {
        Self::configuration(
            JF0006,
            format!("comparison operator {operator} requires {attribute} attribute"),
        )
    }

    /// Constructed operator failed its own validation
    pub fn invalid_operator(operator: impl fmt::Display, cause: impl fmt::Display) -> Self {
        Self::configuration(JF0007, format!("operator {operator} is invalid: {cause}"))
    }

    /// Root definition was empty or null
    pub fn empty_definition() -> Self {
        Self::configuration(JF0008, "filter definition cannot be empty")
    }

    /// Generic-keyed mapping contained a key that is not a string
    pub fn non_string_key(key: impl fmt::Display) -> Self {
        Self::configuration(JF0009, format!("mapping key {key} is not a string"))
    }

    /// Regex operator received an empty pattern
    pub fn empty_pattern() -> Self {
        Self::configuration(JF0010, "regex pattern must not be empty")
    }

    /// Regex pattern failed to compile
    pub fn invalid_regex(pattern: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Compilation {
            code: JF0100,
            pattern: pattern.into(),
            message: message.into(),
        }
    }

    /// Complexity ceiling exceeded during parsing
    pub fn complexity_exceeded(complexity: usize, limit: usize) -> Self {
        Self::ComplexityExceeded {
            code: JF0200,
            complexity,
            limit,
        }
    }

    /// Definition text failed to decode
    pub fn decode(
        format: DefinitionFormat,
        message: impl Into<String>,
        location: Option<SourceLocation>,
    ) -> Self {
        let code = match format {
            DefinitionFormat::Json => JF0300,
            DefinitionFormat::Yaml => JF0301,
        };
        Self::Decode {
            code,
            format,
            message: message.into(),
            location,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Configuration { code, .. }
            | Self::Compilation { code, .. }
            | Self::ComplexityExceeded { code, .. }
            | Self::Decode { code, .. } => *code,
        }
    }

    /// Short description of the error code
    pub fn description(&self) -> &'static str {
        self.code().info().description
    }

    /// Remediation hint for the error code, if one is registered
    pub fn help(&self) -> Option<&'static str> {
        self.code().info().help
    }

    /// Get the location if available
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            Self::Decode { location, .. } => location.as_ref(),
            _ => None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. })
    }

    pub fn is_compilation(&self) -> bool {
        matches!(self, Self::Compilation { .. })
    }

    pub fn is_complexity_exceeded(&self) -> bool {
        matches!(self, Self::ComplexityExceeded { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_multiple_entries_names_keys() {
        let err = FilterError::multiple_entries(&["eq", "rx"]);
        assert_eq!(
            err.to_string(),
            "JF0002: operator definition contains multiple entries: [eq, rx]"
        );
        assert!(err.is_configuration());
    }

    #[test]
    fn test_not_implemented_is_distinct_from_unsupported() {
        let gap = FilterError::not_implemented("lt");
        let typo = FilterError::unsupported_operator("eqq");
        assert_eq!(gap.code(), JF0004);
        assert_eq!(typo.code(), JF0003);
        assert_ne!(gap.code(), typo.code());
    }

    #[test]
    fn test_complexity_display() {
        let err = FilterError::complexity_exceeded(3, 1);
        assert_eq!(err.to_string(), "JF0200: filter complexity 3 exceeds limit 1");
        assert!(err.code().is_resource_error());
    }

    #[test]
    fn test_help_follows_code() {
        let err = FilterError::complexity_exceeded(3, 1);
        assert_eq!(err.description(), "Filter complexity exceeded");
        assert_eq!(
            err.help(),
            Some("Reduce the number of operators or raise the parser complexity ceiling")
        );

        let err = FilterError::missing_attribute("eq", "field");
        assert!(err.help().is_some_and(|help| help.contains("field and value")));

        assert_eq!(FilterError::empty_definition().help(), None);
    }

    #[test]
    fn test_decode_carries_location() {
        let err = FilterError::decode(
            DefinitionFormat::Yaml,
            "did not find expected key",
            Some(SourceLocation::new(2, 5)),
        );
        assert_eq!(err.code(), JF0301);
        assert_eq!(err.location(), Some(&SourceLocation::new(2, 5)));
        assert!(err.to_string().starts_with("JF0301: parse yaml:"));
    }
}
