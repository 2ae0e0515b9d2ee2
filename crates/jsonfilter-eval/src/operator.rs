//! The operator abstraction shared by every filter node

use crate::result::{EvaluationResult, ValidationResult};
use std::fmt;

/// A single executable filter node
///
/// Operators are built once when a filter is compiled and are immutable
/// afterwards, so one tree can be evaluated from many threads at once.
pub trait Operator: fmt::Debug + Send + Sync {
    /// Stable identifier of the operator (its token, e.g. `eq` or `and`)
    fn name(&self) -> &str;

    /// Run the operator against a raw JSON document
    fn evaluate(&self, document: &[u8]) -> EvaluationResult;

    /// Check the operator configuration prior to execution
    fn validate(&self) -> ValidationResult;
}

impl<T: Operator + ?Sized> Operator for Box<T> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn evaluate(&self, document: &[u8]) -> EvaluationResult {
        (**self).evaluate(document)
    }

    fn validate(&self) -> ValidationResult {
        (**self).validate()
    }
}
