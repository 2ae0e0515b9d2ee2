//! Parser configuration

use crate::parser::Parser;
use jsonfilter_eval::OperatorRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Ceiling applied when none (or a non-positive one) is configured
pub const DEFAULT_MAX_COMPLEXITY: usize = 42;

/// Optional wrapper key around the root node
pub const DEFAULT_ENVELOPE_KEY: &str = "jsonFilter";

/// Serializable parser settings
///
/// Hosts typically embed this in their own configuration file:
///
/// ```yaml
/// filters:
///   maxComplexity: 16
///   envelopeKey: jsonFilter
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParserOptions {
    /// Node-count ceiling; zero or negative selects the default
    pub max_complexity: i64,
    /// Root wrapper key; an empty key disables unwrapping
    pub envelope_key: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            max_complexity: DEFAULT_MAX_COMPLEXITY as i64,
            envelope_key: DEFAULT_ENVELOPE_KEY.to_string(),
        }
    }
}

/// Map a configured ceiling to the effective one
pub fn effective_ceiling(max_complexity: i64) -> usize {
    match usize::try_from(max_complexity) {
        Ok(limit) if limit > 0 => limit,
        _ => {
            log::debug!(
                "complexity ceiling {max_complexity} is not positive, using default {DEFAULT_MAX_COMPLEXITY}"
            );
            DEFAULT_MAX_COMPLEXITY
        }
    }
}

/// Fluent construction of a [`Parser`]
#[derive(Debug, Clone, Default)]
pub struct ParserBuilder {
    options: ParserOptions,
    registry: Option<Arc<OperatorRegistry>>,
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node-count ceiling
    pub fn max_complexity(mut self, max_complexity: i64) -> Self {
        self.options.max_complexity = max_complexity;
        self
    }

    /// Set the root wrapper key
    pub fn envelope_key(mut self, key: impl Into<String>) -> Self {
        self.options.envelope_key = key.into();
        self
    }

    /// Use a custom comparison registry
    pub fn registry(mut self, registry: OperatorRegistry) -> Self {
        self.registry = Some(Arc::new(registry));
        self
    }

    /// Apply a whole set of options
    pub fn options(mut self, options: ParserOptions) -> Self {
        self.options = options;
        self
    }

    pub fn build(self) -> Parser {
        let registry = self
            .registry
            .unwrap_or_else(|| Arc::new(OperatorRegistry::shared().clone()));
        Parser::from_parts(
            effective_ceiling(self.options.max_complexity),
            self.options.envelope_key,
            registry,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 42)]
    #[case(-7, 42)]
    #[case(i64::MIN, 42)]
    #[case(1, 1)]
    #[case(100, 100)]
    fn test_effective_ceiling(#[case] configured: i64, #[case] expected: usize) {
        assert_eq!(effective_ceiling(configured), expected);
    }

    #[test]
    fn test_options_deserialize_partial() {
        let options: ParserOptions = serde_json::from_str(r#"{"maxComplexity": 5}"#).unwrap();
        assert_eq!(options.max_complexity, 5);
        assert_eq!(options.envelope_key, DEFAULT_ENVELOPE_KEY);
    }

    #[test]
    fn test_options_from_yaml() {
        let options: ParserOptions =
            serde_yaml_ng::from_str("maxComplexity: -1\nenvelopeKey: filter\n").unwrap();
        let parser = ParserBuilder::new().options(options).build();
        assert_eq!(parser.max_complexity(), DEFAULT_MAX_COMPLEXITY);
        assert_eq!(parser.envelope_key(), "filter");
    }
}
