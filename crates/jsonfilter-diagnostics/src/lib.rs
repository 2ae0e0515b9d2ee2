//! jsonfilter diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the
//! jsonfilter crates: numbered error codes, the [`FilterError`] taxonomy and
//! source locations for definition decoding failures.

mod error;
mod error_code;
mod location;

pub use error::*;
pub use error_code::*;
pub use location::*;

/// Result type for jsonfilter operations
pub type FilterResult<T> = std::result::Result<T, FilterError>;
