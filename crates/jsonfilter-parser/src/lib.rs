//! jsonfilter parser
//!
//! Compiles filter definitions written in JSON or YAML into executable
//! operator trees.
//!
//! ```text
//! node        := { <operator-token>: <config> }
//! comparison  := { "field": <path>, "value": <literal> }
//! logic       := [ node, node, ... ]
//! envelope    := { "jsonFilter": node }
//! ```
//!
//! Decoding is a separate step: JSON and YAML text are first turned into a
//! [`Definition`], and the recursive-descent core only ever sees that tree.
//!
//! # Example
//!
//! ```
//! use jsonfilter_parser::Parser;
//!
//! let filter = Parser::default()
//!     .from_yaml(b"or:\n  - eq: {field: foo, value: nope}\n  - eq: {field: foo, value: ok}\n")
//!     .unwrap();
//! assert!(filter.evaluate(br#"{"foo":"ok"}"#).is_match());
//! ```

mod definition;
mod options;
mod parser;

pub use definition::Definition;
pub use options::{DEFAULT_ENVELOPE_KEY, DEFAULT_MAX_COMPLEXITY, ParserBuilder, ParserOptions};
pub use parser::Parser;
