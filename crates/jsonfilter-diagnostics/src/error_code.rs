//! Filter error codes following a structured numbering system
//!
//! Error code ranges:
//! - JF0001-JF0099: Configuration errors (definition shape, operator tokens, fields)
//! - JF0100-JF0199: Compilation errors (regular expressions)
//! - JF0200-JF0299: Resource limit errors (complexity ceiling)
//! - JF0300-JF0399: Decoding errors (JSON/YAML text)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a configuration error (0001-0099)
    pub const fn is_configuration_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a compilation error (0100-0199)
    pub const fn is_compilation_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a resource limit error (0200-0299)
    pub const fn is_resource_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }

    /// Check if this is a decoding error (0300-0399)
    pub const fn is_decode_error(&self) -> bool {
        self.0 >= 300 && self.0 < 400
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "JF{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Configuration errors (0001-0099)
    map.insert(1, ErrorInfo::new("Empty path expression"));
    map.insert(2, ErrorInfo::new("Malformed operator definition")
        .with_help("Each node must be a mapping with exactly one operator key"));
    map.insert(3, ErrorInfo::new("Unsupported operator")
        .with_help("Supported tokens: eq, rx, and, or (case-insensitive)"));
    map.insert(4, ErrorInfo::new("Operator not implemented")
        .with_help("The token is reserved but has no implementation registered"));
    map.insert(5, ErrorInfo::new("Invalid operator configuration type"));
    map.insert(6, ErrorInfo::new("Missing required attribute")
        .with_help("Comparison operators need both field and value attributes"));
    map.insert(7, ErrorInfo::new("Operator validation failed"));
    map.insert(8, ErrorInfo::new("Empty filter definition"));
    map.insert(9, ErrorInfo::new("Non-string mapping key"));
    map.insert(10, ErrorInfo::new("Empty regex pattern"));

    // Compilation errors (0100-0199)
    map.insert(100, ErrorInfo::new("Invalid regular expression")
        .with_help("Patterns use the syntax of the regex crate; lookaround and backreferences are not supported"));

    // Resource limit errors (0200-0299)
    map.insert(200, ErrorInfo::new("Filter complexity exceeded")
        .with_help("Reduce the number of operators or raise the parser complexity ceiling"));

    // Decoding errors (0300-0399)
    map.insert(300, ErrorInfo::new("Invalid JSON definition"));
    map.insert(301, ErrorInfo::new("Invalid YAML definition"));

    map
});

// Configuration errors
pub const JF0001: ErrorCode = ErrorCode::new(1);
pub const JF0002: ErrorCode = ErrorCode::new(2);
pub const JF0003: ErrorCode = ErrorCode::new(3);
pub const JF0004: ErrorCode = ErrorCode::new(4);
pub const JF0005: ErrorCode = ErrorCode::new(5);
pub const JF0006: ErrorCode = ErrorCode::new(6);
pub const JF0007: ErrorCode = ErrorCode::new(7);
pub const JF0008: ErrorCode = ErrorCode::new(8);
pub const JF0009: ErrorCode = ErrorCode::new(9);
pub const JF0010: ErrorCode = ErrorCode::new(10);

// Compilation errors
pub const JF0100: ErrorCode = ErrorCode::new(100);

// Resource limit errors
pub const JF0200: ErrorCode = ErrorCode::new(200);

// Decoding errors
pub const JF0300: ErrorCode = ErrorCode::new(300);
pub const JF0301: ErrorCode = ErrorCode::new(301);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(JF0001.to_string(), "JF0001");
        assert_eq!(JF0100.to_string(), "JF0100");
    }

    #[test]
    fn test_error_categories() {
        assert!(JF0003.is_configuration_error());
        assert!(!JF0003.is_compilation_error());

        assert!(JF0100.is_compilation_error());
        assert!(JF0200.is_resource_error());
        assert!(JF0301.is_decode_error());
    }

    #[test]
    fn test_error_info() {
        assert_eq!(JF0004.info().description, "Operator not implemented");
        assert!(JF0200.info().help.is_some());
        assert_eq!(ErrorCode::new(999).info().description, "Unknown error");
    }
}
