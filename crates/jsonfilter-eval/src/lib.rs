//! jsonfilter evaluation
//!
//! Executable filter trees. Every node implements [`Operator`]:
//!
//! - **Comparison operators** are leaves that test one path inside a document
//!   against a literal ([`EqualOperator`]) or a regular expression
//!   ([`RegexOperator`]).
//! - **Logic operators** ([`LogicOperator`]) combine an ordered list of child
//!   operators with `and` / `or`.
//!
//! # Example
//!
//! ```
//! use jsonfilter_eval::{EqualOperator, LogicOperator, Operator, RegexOperator};
//!
//! let filter = LogicOperator::and(vec![
//!     Box::new(EqualOperator::must_new("foo", "bar")),
//!     Box::new(RegexOperator::must_new("baz", "^qux")),
//! ]);
//!
//! let result = filter.evaluate(br#"{"foo":"bar","baz":"quxa"}"#);
//! assert!(result.is_match());
//! ```
//!
//! # Results
//!
//! Evaluation and validation never fail with an error. Each call yields one
//! [`EvaluationResult`] or [`ValidationResult`]; a negative outcome carries a
//! human readable cause. `and` stops at the first non-matching child and `or`
//! at the first matching one, while validation always visits every child so a
//! single pass reports every configuration defect.

pub mod comparison;
pub mod kind;
pub mod logic;
pub mod operator;
pub mod registry;
pub mod result;

pub use comparison::{EqualOperator, RegexOperator};
pub use kind::{ComparisonKind, LogicKind, OperatorKind};
pub use logic::LogicOperator;
pub use operator::Operator;
pub use registry::{ComparisonFactory, OperatorRegistry};
pub use result::{EvaluationResult, ValidationResult};
