use crate::kind::ComparisonKind;
use crate::operator::Operator;
use crate::result::{EvaluationResult, ValidationResult};
use jsonfilter_diagnostics::{FilterError, FilterResult};
use jsonfilter_types::resolve;
use regex::Regex;

/// Tests the value at a path against a regular expression
///
/// The pattern is compiled once at construction and searched for anywhere in
/// the value's string form; it only behaves as a full match when the pattern
/// anchors itself with `^...$`.
///
/// Strings are matched verbatim and null as `""`. Numbers, booleans, arrays
/// and objects are matched against their compact JSON text, so `^4` matches
/// the number `42`.
#[derive(Debug, Clone)]
pub struct RegexOperator {
    path: String,
    regex: Regex,
    path_not_found: String,
    pattern_mismatch: String,
}

impl RegexOperator {
    /// Build an `rx` operator, compiling `pattern`
    pub fn new(path: impl Into<String>, pattern: &str) -> FilterResult<Self> {
        let path = path.into();
        if path.is_empty() {
            return Err(FilterError::empty_path());
        }
        if pattern.is_empty() {
            return Err(FilterError::empty_pattern());
        }
        let regex =
            Regex::new(pattern).map_err(|err| FilterError::invalid_regex(pattern, err.to_string()))?;
        Ok(Self {
            path_not_found: format!("json path {path} not found"),
            pattern_mismatch: format!("value does not match regex {pattern}"),
            path,
            regex,
        })
    }

    /// Build an `rx` operator from static configuration
    ///
    /// # Panics
    ///
    /// Panics if the path or pattern is empty, or the pattern does not compile.
    pub fn must_new(path: impl Into<String>, pattern: &str) -> Self {
        Self::new(path, pattern).unwrap_or_else(|err| panic!("{err}"))
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn pattern(&self) -> &str {
        self.regex.as_str()
    }
}

impl Operator for RegexOperator {
    fn name(&self) -> &str {
        ComparisonKind::Regex.token()
    }

    fn evaluate(&self, document: &[u8]) -> EvaluationResult {
        let actual = resolve(document, &self.path);
        if !actual.exists() {
            return EvaluationResult::no_match(self.name(), self.path_not_found.as_str());
        }

        if self.regex.is_match(&actual.to_text()) {
            EvaluationResult::matched(self.name())
        } else {
            EvaluationResult::no_match(self.name(), self.pattern_mismatch.as_str())
        }
    }

    fn validate(&self) -> ValidationResult {
        if self.path.is_empty() {
            return ValidationResult::invalid(self.name(), "json path must not be empty");
        }
        if self.regex.as_str().is_empty() {
            return ValidationResult::invalid(
                self.name(),
                "regex operator must have a compiled pattern",
            );
        }
        ValidationResult::valid(self.name())
    }
}
