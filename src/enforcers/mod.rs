//! Enforcers: groups of checks for one category of argument.
//!
//! Each enforcer is a stateless unit struct. Its methods take the value,
//! an optional parameter name and an optional message customizer, and
//! return the value unchanged on success. [`Param`](crate::core::Param)
//! exposes the same checks as chain methods.

pub mod any;
pub mod enumerable;
pub mod enums;

pub use any::AnyArg;
pub use enumerable::EnumerableArg;
pub use enums::EnumArg;

use crate::core::Param;

/// Entry point grouping the enforcers.
///
/// # Example
///
/// ```rust
/// use ensure_that::enforcers::Ensure;
///
/// let ids = vec![7, 8];
/// let ids = Ensure::enumerable().has_items(Some(&ids), Some("ids"), None);
/// assert!(ids.is_ok());
///
/// let missing = Ensure::any().is_not_null(None::<u32>, Some("port"), None);
/// assert!(missing.is_err());
///
/// let tags = ["a", "b"];
/// let tags = Ensure::that(&tags).named("tags").size_is(2).unwrap();
/// assert_eq!(tags.into_value().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Ensure;

impl Ensure {
    /// Wrap a value for chained checks.
    pub fn that<'a, T>(value: T) -> Param<'a, T> {
        Param::new(value)
    }

    pub fn any() -> AnyArg {
        AnyArg
    }

    pub fn enumerable() -> EnumerableArg {
        EnumerableArg
    }

    pub fn enums() -> EnumArg {
        EnumArg
    }
}
