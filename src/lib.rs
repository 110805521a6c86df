//! Ensure That: guard clauses for validating arguments
//!
//! Guards are small stateless checks run at the top of a function. A passing
//! check hands the argument back unchanged; a failing one returns a
//! [`GuardError`] carrying the kind of failure, a message and the parameter
//! name.
//!
//! # Core Concepts
//!
//! - **Param**: fluent wrapper holding a value, its name and an optional
//!   message customizer
//! - **Enforcers**: groups of checks for presence, sequences and flag enums
//! - **Contracts**: several guards over one value with all failures reported
//!
//! # Example
//!
//! ```rust
//! use ensure_that::core::GuardError;
//! use ensure_that::ensure_that;
//!
//! bitflags::bitflags! {
//!     #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//!     pub struct Permissions: u8 {
//!         const READ = 1;
//!         const WRITE = 2;
//!         const EXECUTE = 4;
//!     }
//! }
//!
//! fn grant(users: &[String], permissions: Permissions) -> Result<usize, GuardError> {
//!     let users = ensure_that!(users).has_items()?.into_value();
//!     ensure_that!(permissions).is_defined_with_flags_support()?;
//!     Ok(users.len())
//! }
//!
//! let users = vec!["ada".to_string()];
//! assert_eq!(grant(&users, Permissions::READ | Permissions::WRITE).unwrap(), 1);
//!
//! let error = grant(&[], Permissions::READ).unwrap_err();
//! assert_eq!(error.to_string(), "Empty collection is not allowed. (Parameter 'users')");
//! ```

pub mod core;
pub mod enforcement;
pub mod enforcers;
mod macros;

// Re-export commonly used types
pub use crate::core::{opts_fn, ErrorKind, GuardError, OptsFn, Param};
pub use enforcement::{Contract, ContractBuilder, GuardViolations};
pub use enforcers::{AnyArg, EnumArg, EnumerableArg, Ensure};
