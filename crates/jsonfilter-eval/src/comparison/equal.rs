use crate::kind::ComparisonKind;
use crate::operator::Operator;
use crate::result::{EvaluationResult, ValidationResult};
use jsonfilter_diagnostics::{FilterError, FilterResult};
use jsonfilter_types::{Literal, Resolved, resolve};

/// Compares the value at a path for equality against an expected literal
///
/// The comparison is directed by the literal's type:
///
/// | literal            | document value is compared as                       |
/// |--------------------|-----------------------------------------------------|
/// | string             | exact string equality (strings only)                |
/// | bool               | coerced boolean                                     |
/// | signed/unsigned    | coerced 64-bit integer, compared exactly            |
/// | float              | coerced float, native `==` (no tolerance)           |
/// | null               | JSON null                                           |
/// | array/object       | structural equality of the decoded value            |
///
/// Float comparison is exact: `0.1 + 0.2` written in a document will not
/// equal a literal `0.3`.
#[derive(Debug, Clone)]
pub struct EqualOperator {
    path: String,
    expected: Literal,
    path_not_found: String,
    mismatch: String,
}

impl EqualOperator {
    /// Build an `eq` operator; the path must not be empty
    pub fn new(path: impl Into<String>, expected: impl Into<Literal>) -> FilterResult<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(FilterError::empty_path());
        }
        let expected = expected.into();
        Ok(Self {
            path_not_found: format!("json path {path} not found"),
            mismatch: format!("value did not equal expected {expected}"),
            path,
            expected,
        })
    }

    /// Build an `eq` operator from static configuration
    ///
    /// # Panics
    ///
    /// Panics if the path is empty.
    pub fn must_new(path: impl Into<String>, expected: impl Into<Literal>) -> Self {
        Self::new(path, expected).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn expected(&self) -> &Literal {
        &self.expected
    }

    fn matches(&self, actual: &Resolved) -> bool {
        match &self.expected {
            Literal::String(expected) => actual.as_str() == Some(expected.as_str()),
            Literal::Bool(expected) => actual.to_bool() == *expected,
            Literal::Signed(expected) => actual.to_i64() == Some(*expected),
            Literal::Unsigned(expected) => actual.to_u64() == Some(*expected),
            Literal::Float(expected) => actual.to_f64() == Some(*expected),
            Literal::Null => !actual.exists() || actual.is_null(),
            Literal::Other(expected) => actual.value() == Some(expected),
        }
    }
}

impl Operator for EqualOperator {
    fn name(&self) -> &str {
        ComparisonKind::Equal.token()
    }

    fn evaluate(&self, document: &[u8]) -> EvaluationResult {
        let actual = resolve(document, &self.path);
        if !actual.exists() {
            return EvaluationResult::no_match(self.name(), self.path_not_found.as_str());
        }

        if self.matches(&actual) {
            EvaluationResult::matched(self.name())
        } else {
            EvaluationResult::no_match(self.name(), self.mismatch.as_str())
        }
    }

    fn validate(&self) -> ValidationResult {
        if self.path.is_empty() {
            return ValidationResult::invalid(self.name(), "json path must not be empty");
        }
        ValidationResult::valid(self.name())
    }
}
