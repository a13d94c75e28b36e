//! Dotted `major.minor.patch` version numbers.
//!
//! ```
//! use dotver::Version;
//!
//! let version: Version = "2024.10".parse().unwrap();
//! assert_eq!(version, Version::new(2024, 10, 0));
//! assert_eq!(version.to_string(), "2024.10.0");
//! ```

pub mod logging;
pub mod version;

pub use version::error::{Component, ParseError};
pub use version::parser::parse;
pub use version::types::Version;
