//! Comparison operators
//!
//! Leaf nodes that resolve one path inside a document and test the value
//! against a literal (`eq`) or a regular expression (`rx`). The remaining
//! comparison tokens are reserved: they parse, but the default registry
//! rejects them as not implemented.

mod equal;
mod regex;

pub use self::equal::EqualOperator;
pub use self::regex::RegexOperator;

use crate::operator::Operator;
use jsonfilter_diagnostics::{FilterError, FilterResult};
use jsonfilter_types::Literal;

/// Factory registered for `eq`
pub fn equal_factory(field: &str, value: Literal) -> FilterResult<Box<dyn Operator>> {
    Ok(Box::new(EqualOperator::new(field, value)?))
}

/// Factory registered for `rx`; the literal must be a string
pub fn regex_factory(field: &str, value: Literal) -> FilterResult<Box<dyn Operator>> {
    match value {
        Literal::String(pattern) => Ok(Box::new(RegexOperator::new(field, &pattern)?)),
        other => Err(FilterError::invalid_type(format!(
            "regex operator expects string value, got {}",
            other.type_name()
        ))),
    }
}
