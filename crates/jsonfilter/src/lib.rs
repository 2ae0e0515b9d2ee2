//! Boolean filters over JSON documents
//!
//! A filter is a small tree of operators written in JSON or YAML. Leaves
//! compare one value of the document (`eq`, `rx`); `and` / `or` nodes
//! combine them. Definitions are compiled once and the resulting tree can be
//! evaluated against any number of documents, from any number of threads.
//!
//! # Example
//!
//! ```
//! use jsonfilter::Operator;
//!
//! let filter = jsonfilter::from_json(
//!     br#"{"and":[{"eq":{"field":"foo","value":"bar"}},{"rx":{"field":"baz","value":"^qux"}}]}"#,
//! )?;
//!
//! let result = filter.evaluate(br#"{"foo":"bar","baz":"quxa"}"#);
//! assert!(result.is_match());
//!
//! let result = filter.evaluate(br#"{"foo":"bar"}"#);
//! assert_eq!(result.cause(), Some("json path baz not found"));
//! # Ok::<(), jsonfilter::FilterError>(())
//! ```
//!
//! Use [`Parser`] directly to change the complexity ceiling, the envelope
//! key, or the set of comparison operators.

// Re-export all public APIs from internal crates
pub use jsonfilter_diagnostics as diagnostics;
pub use jsonfilter_eval as eval;
pub use jsonfilter_parser as parser;
pub use jsonfilter_types as types;

// Convenience re-exports
pub use jsonfilter_diagnostics::{ErrorCode, FilterError, FilterResult};
pub use jsonfilter_eval::{
    EqualOperator, EvaluationResult, LogicOperator, Operator, OperatorRegistry, RegexOperator,
    ValidationResult,
};
pub use jsonfilter_parser::{Parser, ParserOptions};
pub use jsonfilter_types::Literal;

/// Compile a JSON definition with the default parser
pub fn from_json(payload: &[u8]) -> FilterResult<Box<dyn Operator>> {
    Parser::default().from_json(payload)
}

/// Compile a YAML definition with the default parser
pub fn from_yaml(payload: &[u8]) -> FilterResult<Box<dyn Operator>> {
    Parser::default().from_yaml(payload)
}
