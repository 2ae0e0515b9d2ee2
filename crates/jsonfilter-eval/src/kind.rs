//! Operator token enumerations

use std::fmt;

/// Comparison operator tokens
///
/// Every token is recognized by the parser. Which ones can actually be built
/// is decided by the [`OperatorRegistry`](crate::OperatorRegistry).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonKind {
    /// `eq`
    Equal,
    /// `ne`
    NotEqual,
    /// `rx`
    Regex,
    /// `lt`
    LessThan,
    /// `le`
    LessEqual,
    /// `gt`
    GreaterThan,
    /// `ge`
    GreaterEqual,
    /// `in`
    In,
    /// `nin`
    NotIn,
    /// `ct`
    Contains,
    /// `nct`
    NotContains,
}

impl ComparisonKind {
    pub const ALL: [ComparisonKind; 11] = [
        Self::Equal,
        Self::NotEqual,
        Self::Regex,
        Self::LessThan,
        Self::LessEqual,
        Self::GreaterThan,
        Self::GreaterEqual,
        Self::In,
        Self::NotIn,
        Self::Contains,
        Self::NotContains,
    ];

    /// Look up a token, ignoring ASCII case
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token().eq_ignore_ascii_case(token))
    }

    /// Get the operator token
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Equal => "eq",
            Self::NotEqual => "ne",
            Self::Regex => "rx",
            Self::LessThan => "lt",
            Self::LessEqual => "le",
            Self::GreaterThan => "gt",
            Self::GreaterEqual => "ge",
            Self::In => "in",
            Self::NotIn => "nin",
            Self::Contains => "ct",
            Self::NotContains => "nct",
        }
    }
}

impl fmt::Display for ComparisonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Logic operator tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogicKind {
    /// `and`
    And,
    /// `or`
    Or,
}

impl LogicKind {
    pub const ALL: [LogicKind; 2] = [Self::And, Self::Or];

    /// Look up a token, ignoring ASCII case
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.token().eq_ignore_ascii_case(token))
    }

    /// Get the operator token
    pub const fn token(&self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
        }
    }
}

impl fmt::Display for LogicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Any operator token, comparison family first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    Comparison(ComparisonKind),
    Logic(LogicKind),
}

impl OperatorKind {
    /// Resolve a token against the comparison family, then the logic family
    pub fn from_token(token: &str) -> Option<Self> {
        ComparisonKind::from_token(token)
            .map(Self::Comparison)
            .or_else(|| LogicKind::from_token(token).map(Self::Logic))
    }

    pub const fn token(&self) -> &'static str {
        match self {
            Self::Comparison(kind) => kind.token(),
            Self::Logic(kind) => kind.token(),
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_round_trip() {
        for kind in ComparisonKind::ALL {
            assert_eq!(ComparisonKind::from_token(kind.token()), Some(kind));
        }
        for kind in LogicKind::ALL {
            assert_eq!(LogicKind::from_token(kind.token()), Some(kind));
        }
    }

    #[test]
    fn test_tokens_ignore_case() {
        assert_eq!(ComparisonKind::from_token("EQ"), Some(ComparisonKind::Equal));
        assert_eq!(ComparisonKind::from_token("Nct"), Some(ComparisonKind::NotContains));
        assert_eq!(LogicKind::from_token("AND"), Some(LogicKind::And));
    }

    #[test]
    fn test_operator_kind_dispatch() {
        assert_eq!(
            OperatorKind::from_token("rx"),
            Some(OperatorKind::Comparison(ComparisonKind::Regex))
        );
        assert_eq!(OperatorKind::from_token("or"), Some(OperatorKind::Logic(LogicKind::Or)));
        assert_eq!(OperatorKind::from_token("xor"), None);
        assert_eq!(OperatorKind::from_token(""), None);
    }
}
