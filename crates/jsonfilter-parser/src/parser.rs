//! Recursive-descent compiler from definitions to operator trees

use crate::definition::Definition;
use crate::options::{ParserBuilder, ParserOptions};
use indexmap::IndexMap;
use jsonfilter_diagnostics::{DefinitionFormat, FilterError, FilterResult, SourceLocation};
use jsonfilter_eval::{
    ComparisonKind, LogicKind, LogicOperator, Operator, OperatorKind, OperatorRegistry,
};
use serde_json::{Map as JsonMap, Value as JsonValue};
use serde_yaml_ng::{Mapping as YamlMapping, Value as YamlValue};
use std::sync::Arc;

const FIELD: &str = "field";
const VALUE: &str = "value";

/// Compiles filter definitions into executable operator trees
///
/// Every node counts 1 toward the complexity of the tree. The count is
/// checked while logic children are parsed, so an oversized definition is
/// rejected before its remaining siblings are even looked at.
///
/// A parser holds only immutable configuration and can be shared between
/// threads.
#[derive(Debug, Clone)]
pub struct Parser {
    max_complexity: usize,
    envelope_key: String,
    registry: Arc<OperatorRegistry>,
}

impl Parser {
    /// Create a parser with the given ceiling; non-positive selects the default
    pub fn new(max_complexity: i64) -> Self {
        Self::builder().max_complexity(max_complexity).build()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self::builder().options(options).build()
    }

    pub fn builder() -> ParserBuilder {
        ParserBuilder::new()
    }

    pub(crate) fn from_parts(
        max_complexity: usize,
        envelope_key: String,
        registry: Arc<OperatorRegistry>,
    ) -> Self {
        Self {
            max_complexity,
            envelope_key,
            registry,
        }
    }

    /// Effective node-count ceiling
    pub fn max_complexity(&self) -> usize {
        self.max_complexity
    }

    pub fn envelope_key(&self) -> &str {
        &self.envelope_key
    }

    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Parse a JSON filter definition
    pub fn from_json(&self, payload: &[u8]) -> FilterResult<Box<dyn Operator>> {
        let value: JsonValue = serde_json::from_slice(payload).map_err(|e| {
            let location = (e.line() > 0).then(|| SourceLocation::new(e.line(), e.column()));
            FilterError::decode(DefinitionFormat::Json, e.to_string(), location)
        })?;
        self.from_definition(Definition::from(value))
    }

    /// Parse a YAML filter definition
    pub fn from_yaml(&self, payload: &[u8]) -> FilterResult<Box<dyn Operator>> {
        let value: YamlValue = serde_yaml_ng::from_slice(payload).map_err(|e| {
            let location = e
                .location()
                .map(|loc| SourceLocation::new(loc.line(), loc.column()));
            FilterError::decode(DefinitionFormat::Yaml, e.to_string(), location)
        })?;
        self.from_definition(Definition::try_from(value)?)
    }

    /// Parse an already decoded JSON object
    pub fn from_map(&self, map: JsonMap<String, JsonValue>) -> FilterResult<Box<dyn Operator>> {
        self.from_definition(Definition::from(map))
    }

    /// Parse an already decoded YAML mapping; keys must be strings
    pub fn from_mapping(&self, mapping: YamlMapping) -> FilterResult<Box<dyn Operator>> {
        self.from_definition(Definition::try_from(mapping)?)
    }

    pub fn from_definition(&self, definition: Definition) -> FilterResult<Box<dyn Operator>> {
        self.parse_with_complexity(definition).map(|(op, _)| op)
    }

    /// Parse a definition and report the number of nodes counted
    pub fn parse_with_complexity(
        &self,
        definition: Definition,
    ) -> FilterResult<(Box<dyn Operator>, usize)> {
        let root = self.unwrap_root(definition)?;
        let (op, complexity) = self.parse_node(root).inspect_err(|err| {
            if err.is_complexity_exceeded() {
                log::debug!("filter rejected: {err}");
            }
        })?;

        log::debug!("parsed filter {} with complexity {complexity}", op.name());
        Ok((op, complexity))
    }

    fn unwrap_root(&self, definition: Definition) -> FilterResult<IndexMap<String, Definition>> {
        let mut root = match definition {
            Definition::Mapping(map) if map.is_empty() => {
                return Err(FilterError::empty_definition());
            }
            Definition::Mapping(map) => map,
            Definition::Scalar(literal) if literal.is_null() => {
                return Err(FilterError::empty_definition());
            }
            other => {
                return Err(FilterError::malformed(format!(
                    "filter definition must be a mapping, got {}",
                    other.kind_name()
                )));
            }
        };

        if root.len() == 1 && !self.envelope_key.is_empty() {
            if let Some(inner) = root.shift_remove(&self.envelope_key) {
                return match inner {
                    Definition::Mapping(map) => Ok(map),
                    other => Err(FilterError::malformed(format!(
                        "{} must contain a mapping, got {}",
                        self.envelope_key,
                        other.kind_name()
                    ))),
                };
            }
        }
        Ok(root)
    }

    fn parse_node(
        &self,
        node: IndexMap<String, Definition>,
    ) -> FilterResult<(Box<dyn Operator>, usize)> {
        if node.len() > 1 {
            let keys: Vec<&String> = node.keys().collect();
            return Err(FilterError::multiple_entries(&keys));
        }
        let Some((token, config)) = node.into_iter().next() else {
            return Err(FilterError::malformed(
                "operator definition must contain exactly one entry",
            ));
        };

        log::trace!("parsing operator {token}");
        match OperatorKind::from_token(&token) {
            Some(OperatorKind::Comparison(kind)) => self.parse_comparison(kind, config),
            Some(OperatorKind::Logic(kind)) => self.parse_logic(kind, config),
            None => Err(FilterError::unsupported_operator(token)),
        }
    }

    fn parse_comparison(
        &self,
        kind: ComparisonKind,
        config: Definition,
    ) -> FilterResult<(Box<dyn Operator>, usize)> {
        let mut config = match config {
            Definition::Mapping(config) => config,
            other => {
                return Err(FilterError::invalid_type(format!(
                    "comparison operator {kind} expects a mapping as value, got {}",
                    other.kind_name()
                )));
            }
        };

        let field = match config.shift_remove(FIELD) {
            Some(Definition::Scalar(literal)) => match literal.as_str() {
                Some(field) if !field.is_empty() => field.to_string(),
                _ => return Err(FilterError::missing_attribute(kind, FIELD)),
            },
            _ => return Err(FilterError::missing_attribute(kind, FIELD)),
        };
        let value = config
            .shift_remove(VALUE)
            .ok_or_else(|| FilterError::missing_attribute(kind, VALUE))?
            .into_literal();

        let op = self.registry.instantiate(kind, &field, value)?;
        check_valid(op.as_ref())?;
        Ok((op, 1))
    }

    fn parse_logic(
        &self,
        kind: LogicKind,
        config: Definition,
    ) -> FilterResult<(Box<dyn Operator>, usize)> {
        let items = match config {
            Definition::Sequence(items) => items,
            other => {
                return Err(FilterError::invalid_type(format!(
                    "logic operator {kind} expects a sequence of child operators, got {}",
                    other.kind_name()
                )));
            }
        };

        let mut children = Vec::with_capacity(items.len());
        let mut complexity = 1;
        for (index, item) in items.into_iter().enumerate() {
            let child = match item {
                Definition::Mapping(child) => child,
                other => {
                    return Err(FilterError::invalid_type(format!(
                        "logic operator {kind} child {index} must be a mapping, got {}",
                        other.kind_name()
                    )));
                }
            };

            let (op, child_complexity) = self.parse_node(child)?;
            complexity += child_complexity;
            if complexity > self.max_complexity {
                return Err(FilterError::complexity_exceeded(
                    complexity,
                    self.max_complexity,
                ));
            }
            children.push(op);
        }

        let op: Box<dyn Operator> = Box::new(LogicOperator::new(kind, children));
        check_valid(op.as_ref())?;
        Ok((op, complexity))
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::builder().build()
    }
}

fn check_valid(op: &dyn Operator) -> FilterResult<()> {
    let validation = op.validate();
    if validation.is_valid() {
        Ok(())
    } else {
        Err(FilterError::invalid_operator(
            op.name(),
            validation.cause().unwrap_or_default(),
        ))
    }
}
