//! Logic operators (`and`, `or`) over ordered child operators

use crate::kind::LogicKind;
use crate::operator::Operator;
use crate::result::{EvaluationResult, ValidationResult};

const NO_CHILDREN: &str = "logic operator requires at least one child";
const CHILD_NO_MATCH: &str = "child operator returned no match";
const OR_NO_MATCH: &str = "no child operator produced a match";
const AND_INVALID: &str = "child operator validation failed";
const OR_INVALID: &str = "no child operator validated successfully";

/// Combines child operators with `and` / `or`
///
/// Children are evaluated in order and evaluation short-circuits: `and` stops
/// at the first child that does not match, `or` at the first one that does.
/// Children after that point are never evaluated. Validation visits every
/// child exactly once.
#[derive(Debug)]
pub struct LogicOperator {
    kind: LogicKind,
    children: Vec<Box<dyn Operator>>,
}

impl LogicOperator {
    /// Build a logic operator owning `children`
    ///
    /// An empty child list is accepted here; both evaluation and validation of
    /// such an operator report that at least one child is required.
    pub fn new(kind: LogicKind, children: Vec<Box<dyn Operator>>) -> Self {
        Self { kind, children }
    }

    pub fn and(children: Vec<Box<dyn Operator>>) -> Self {
        Self::new(LogicKind::And, children)
    }

    pub fn or(children: Vec<Box<dyn Operator>>) -> Self {
        Self::new(LogicKind::Or, children)
    }

    pub fn kind(&self) -> LogicKind {
        self.kind
    }

    pub fn children(&self) -> &[Box<dyn Operator>] {
        &self.children
    }

    fn evaluate_and(&self, document: &[u8]) -> EvaluationResult {
        let mut evaluated = Vec::with_capacity(self.children.len());
        for child in &self.children {
            let result = child.evaluate(document);
            if !result.is_match() {
                let cause = result
                    .cause()
                    .filter(|cause| !cause.is_empty())
                    .unwrap_or(CHILD_NO_MATCH)
                    .to_string();
                evaluated.push(result);
                return EvaluationResult::aggregate(self.name(), false, evaluated, Some(cause));
            }
            evaluated.push(result);
        }
        EvaluationResult::aggregate(self.name(), true, evaluated, None)
    }

    fn evaluate_or(&self, document: &[u8]) -> EvaluationResult {
        let mut evaluated = Vec::with_capacity(self.children.len());
        for child in &self.children {
            let result = child.evaluate(document);
            let matched = result.is_match();
            evaluated.push(result);
            if matched {
                return EvaluationResult::aggregate(self.name(), true, evaluated, None);
            }
        }
        EvaluationResult::aggregate(self.name(), false, evaluated, Some(OR_NO_MATCH.to_string()))
    }

    fn validate_children(&self) -> Vec<ValidationResult> {
        self.children.iter().map(|child| child.validate()).collect()
    }
}

impl Operator for LogicOperator {
    fn name(&self) -> &str {
        self.kind.token()
    }

    fn evaluate(&self, document: &[u8]) -> EvaluationResult {
        if self.children.is_empty() {
            return EvaluationResult::no_match(self.name(), NO_CHILDREN);
        }

        match self.kind {
            LogicKind::And => self.evaluate_and(document),
            LogicKind::Or => self.evaluate_or(document),
        }
    }

    fn validate(&self) -> ValidationResult {
        if self.children.is_empty() {
            return ValidationResult::invalid(self.name(), NO_CHILDREN);
        }

        let children = self.validate_children();
        let (valid, cause) = match self.kind {
            LogicKind::And => (children.iter().all(ValidationResult::is_valid), AND_INVALID),
            LogicKind::Or => (children.iter().any(ValidationResult::is_valid), OR_INVALID),
        };
        let cause = (!valid).then(|| cause.to_string());
        ValidationResult::aggregate(self.name(), valid, children, cause)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparison::{EqualOperator, RegexOperator};

    #[test]
    fn test_empty_children() {
        let op = LogicOperator::and(Vec::new());
        let eval = op.evaluate(b"{}");
        assert!(!eval.is_match());
        assert_eq!(eval.cause(), Some(NO_CHILDREN));

        let val = op.validate();
        assert!(!val.is_valid());
        assert_eq!(val.cause(), Some(NO_CHILDREN));
    }

    #[test]
    fn test_name_is_token() {
        assert_eq!(LogicOperator::and(Vec::new()).name(), "and");
        assert_eq!(LogicOperator::or(Vec::new()).name(), "or");
    }

    #[test]
    fn test_and_propagates_child_cause() {
        let op = LogicOperator::and(vec![
            Box::new(EqualOperator::must_new("foo", "bar")),
            Box::new(RegexOperator::must_new("baz", "^qux")),
        ]);
        let res = op.evaluate(br#"{"foo":"bar","baz":"nope"}"#);
        assert!(!res.is_match());
        assert_eq!(res.cause(), Some("value does not match regex ^qux"));
        assert_eq!(res.children().len(), 2);
    }

    #[test]
    fn test_or_without_match() {
        let op = LogicOperator::or(vec![
            Box::new(EqualOperator::must_new("foo", "a")),
            Box::new(EqualOperator::must_new("foo", "b")),
        ]);
        let res = op.evaluate(br#"{"foo":"c"}"#);
        assert!(!res.is_match());
        assert_eq!(res.cause(), Some(OR_NO_MATCH));
        assert_eq!(res.children().len(), 2);
    }
}
