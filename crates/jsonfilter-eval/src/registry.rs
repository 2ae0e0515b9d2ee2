//! Comparison operator registry
//!
//! Maps each [`ComparisonKind`] to the factory that builds it. Tokens are a
//! closed set, so a kind without a factory is a known roadmap gap and is
//! reported as "not implemented" rather than "not supported".

use crate::comparison::{equal_factory, regex_factory};
use crate::kind::ComparisonKind;
use crate::operator::Operator;
use jsonfilter_diagnostics::{FilterError, FilterResult};
use jsonfilter_types::Literal;
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Builds a comparison operator from its `field` and `value` configuration
pub type ComparisonFactory = fn(&str, Literal) -> FilterResult<Box<dyn Operator>>;

static DEFAULT_REGISTRY: LazyLock<OperatorRegistry> = LazyLock::new(OperatorRegistry::new);

/// Registry of comparison operator factories
#[derive(Clone)]
pub struct OperatorRegistry {
    comparisons: HashMap<ComparisonKind, ComparisonFactory>,
}

impl OperatorRegistry {
    /// Registry with the built-in `eq` and `rx` factories
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(ComparisonKind::Equal, equal_factory);
        registry.register(ComparisonKind::Regex, regex_factory);
        registry
    }

    /// Registry with no factories at all
    pub fn empty() -> Self {
        Self {
            comparisons: HashMap::new(),
        }
    }

    /// Process-wide default registry
    pub fn shared() -> &'static OperatorRegistry {
        &DEFAULT_REGISTRY
    }

    /// Register (or replace) the factory for a comparison kind
    pub fn register(
        &mut self,
        kind: ComparisonKind,
        factory: ComparisonFactory,
    ) -> Option<ComparisonFactory> {
        self.comparisons.insert(kind, factory)
    }

    /// Whether a factory exists for the kind
    pub fn is_implemented(&self, kind: ComparisonKind) -> bool {
        self.comparisons.contains_key(&kind)
    }

    /// Build a comparison operator
    pub fn instantiate(
        &self,
        kind: ComparisonKind,
        field: &str,
        value: Literal,
    ) -> FilterResult<Box<dyn Operator>> {
        let factory = self
            .comparisons
            .get(&kind)
            .ok_or_else(|| FilterError::not_implemented(kind))?;
        factory(field, value)
    }
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.comparisons.keys().map(ComparisonKind::token).collect();
        kinds.sort_unstable();
        f.debug_struct("OperatorRegistry")
            .field("comparisons", &kinds)
            .finish()
    }
}
