//! The fluent parameter wrapper.

use crate::core::error::GuardError;
use crate::core::factory::OptsFn;
use crate::enforcers::AnyArg;
use std::fmt;

/// An argument on its way through a chain of guards.
///
/// Holds the value, the parameter name used in failure messages, and an
/// optional message customizer. Every chain method consumes the wrapper and
/// hands the same value back on success, so checks compose with `?`.
///
/// # Example
///
/// ```rust
/// use ensure_that::core::{GuardError, Param};
///
/// fn total(prices: &[u32]) -> Result<u32, GuardError> {
///     let prices = Param::new(prices)
///         .named("prices")
///         .has_items()?
///         .has_any(|price: &u32| *price > 0)?
///         .into_value();
///     Ok(prices.iter().sum())
/// }
///
/// assert_eq!(total(&[1, 2]).unwrap(), 3);
/// assert!(total(&[]).is_err());
/// ```
#[derive(Clone)]
pub struct Param<'a, T> {
    value: T,
    name: Option<&'a str>,
    opts_fn: Option<&'a OptsFn>,
}

impl<'a, T> Param<'a, T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            name: None,
            opts_fn: None,
        }
    }

    /// Set the parameter name reported in failures.
    pub fn named(self, name: &'a str) -> Self {
        Self {
            name: Some(name),
            ..self
        }
    }

    /// Attach a message customizer.
    pub fn with_opts(self, opts_fn: &'a OptsFn) -> Self {
        Self {
            opts_fn: Some(opts_fn),
            ..self
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn name(&self) -> Option<&'a str> {
        self.name
    }

    pub fn opts_fn(&self) -> Option<&'a OptsFn> {
        self.opts_fn
    }

    pub fn into_value(self) -> T {
        self.value
    }

    /// Run an enforcer against the wrapped value and rewrap what it returns.
    pub(crate) fn enforce<U, F>(self, check: F) -> Result<Param<'a, U>, GuardError>
    where
        F: FnOnce(T, Option<&'a str>, Option<&'a OptsFn>) -> Result<U, GuardError>,
    {
        let Self {
            value,
            name,
            opts_fn,
        } = self;
        let value = check(value, name, opts_fn)?;
        Ok(Param {
            value,
            name,
            opts_fn,
        })
    }
}

impl<'a, T> Param<'a, Option<T>> {
    /// Unwrap a present value, failing with an argument-null error otherwise.
    pub fn is_not_null(self) -> Result<Param<'a, T>, GuardError> {
        self.enforce(|value, name, opts_fn| AnyArg.is_not_null(value, name, opts_fn))
    }
}

impl<T: fmt::Debug> fmt::Debug for Param<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Param")
            .field("value", &self.value)
            .field("name", &self.name)
            .field("opts_fn", &self.opts_fn.map(|_| "<fn>"))
            .finish()
    }
}
