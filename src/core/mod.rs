//! Core guard types.
//!
//! - [`Param`], the fluent wrapper carried through a chain of checks
//! - [`GuardError`], the error every failing check returns
//! - the factory that formats and logs those errors

pub mod error;
pub mod factory;
pub mod messages;
pub mod param;

pub use error::{ErrorKind, GuardError};
pub use factory::{opts_fn, OptsFn};
pub use param::Param;
