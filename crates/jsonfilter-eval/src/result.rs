//! Evaluation and validation outcome records
//!
//! Both records serialize with camelCase names so they can be logged or
//! returned to the author of a filter as-is:
//!
//! ```json
//! {"match": false, "operatorName": "and", "causeDescription": "json path foo not found",
//!  "childOperators": [{"match": false, "operatorName": "eq", "causeDescription": "json path foo not found"}]}
//! ```

use serde::{Deserialize, Serialize};

/// Outcome of running an operator against a document
///
/// A non-matching result always carries a cause. Children are only present
/// for logic operators, and only for the children that were actually
/// evaluated before short-circuiting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    #[serde(rename = "match")]
    matched: bool,
    operator_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    child_operators: Vec<EvaluationResult>,
}

impl EvaluationResult {
    /// Successful match for the operator
    pub fn matched(operator_name: impl Into<String>) -> Self {
        Self {
            matched: true,
            operator_name: operator_name.into(),
            cause_description: None,
            child_operators: Vec::new(),
        }
    }

    /// Negative outcome with the reason
    pub fn no_match(operator_name: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            matched: false,
            operator_name: operator_name.into(),
            cause_description: Some(cause.into()),
            child_operators: Vec::new(),
        }
    }

    /// Outcome of a composite operator with its evaluated children
    pub fn aggregate(
        operator_name: impl Into<String>,
        matched: bool,
        children: Vec<EvaluationResult>,
        cause: Option<String>,
    ) -> Self {
        Self {
            matched,
            operator_name: operator_name.into(),
            cause_description: cause,
            child_operators: children,
        }
    }

    pub fn is_match(&self) -> bool {
        self.matched
    }

    pub fn operator_name(&self) -> &str {
        &self.operator_name
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause_description.as_deref()
    }

    pub fn children(&self) -> &[EvaluationResult] {
        &self.child_operators
    }
}

/// Outcome of checking an operator's configuration before execution
///
/// Unlike [`EvaluationResult`], the child list of a logic operator is always
/// complete: validation never short-circuits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    valid: bool,
    operator_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cause_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    child_operators: Vec<ValidationResult>,
}

impl ValidationResult {
    /// Operator configuration is sound
    pub fn valid(operator_name: impl Into<String>) -> Self {
        Self {
            valid: true,
            operator_name: operator_name.into(),
            cause_description: None,
            child_operators: Vec::new(),
        }
    }

    /// Operator configuration is defective
    pub fn invalid(operator_name: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            valid: false,
            operator_name: operator_name.into(),
            cause_description: Some(cause.into()),
            child_operators: Vec::new(),
        }
    }

    /// Validation of a composite operator with every child's validation
    pub fn aggregate(
        operator_name: impl Into<String>,
        valid: bool,
        children: Vec<ValidationResult>,
        cause: Option<String>,
    ) -> Self {
        Self {
            valid,
            operator_name: operator_name.into(),
            cause_description: cause,
            child_operators: children,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn operator_name(&self) -> &str {
        &self.operator_name
    }

    pub fn cause(&self) -> Option<&str> {
        self.cause_description.as_deref()
    }

    pub fn children(&self) -> &[ValidationResult] {
        &self.child_operators
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_evaluation_result_serializes_camel_case() {
        let result = EvaluationResult::aggregate(
            "and",
            false,
            vec![EvaluationResult::no_match("eq", "boom")],
            Some("boom".to_string()),
        );
        assert_eq!(
            serde_json::to_value(&result).unwrap(),
            json!({
                "match": false,
                "operatorName": "and",
                "causeDescription": "boom",
                "childOperators": [
                    {"match": false, "operatorName": "eq", "causeDescription": "boom"}
                ]
            })
        );
    }

    #[test]
    fn test_matched_omits_empty_fields() {
        let value = serde_json::to_value(EvaluationResult::matched("eq")).unwrap();
        assert_eq!(value, json!({"match": true, "operatorName": "eq"}));
    }

    #[test]
    fn test_validation_result_round_trips() {
        let result = ValidationResult::aggregate(
            "or",
            true,
            vec![
                ValidationResult::valid("eq"),
                ValidationResult::invalid("rx", "regex pattern must not be empty"),
            ],
            None,
        );
        let text = serde_json::to_string(&result).unwrap();
        let back: ValidationResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
        assert_eq!(back.children()[1].cause(), Some("regex pattern must not be empty"));
    }
}
