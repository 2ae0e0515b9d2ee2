//! Value model for jsonfilter
//!
//! Two pieces live here:
//!
//! - [`Literal`]: the expected value of a comparison, an explicit sum type over
//!   string, boolean, signed/unsigned integer, float, null and arbitrary JSON.
//! - [`resolve`]: the path-resolution capability operators use to look up a
//!   location inside a raw document buffer, returning a [`Resolved`] value with
//!   typed accessors.

pub mod literal;
pub mod path;

pub use literal::Literal;
pub use path::{Resolved, resolve};
