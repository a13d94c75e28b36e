//! Version value type and its textual form
//!
//! # Modules
//!
//! - [`types`]: the [`Version`](types::Version) value, predicates and formatting
//! - [`parser`]: parsing `"major.minor"` and `"major.minor.patch"` strings
//! - [`error`]: error types for parsing

pub mod error;
pub mod parser;
pub mod types;
