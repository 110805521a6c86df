//! Checks for sequences.
//!
//! Sequences are taken by reference and iterated through `&S: IntoIterator`,
//! so every check may walk the whole collection and chained checks walk it
//! again. Collections, slices and maps all qualify; a one-shot iterator does
//! not.

use crate::core::error::GuardError;
use crate::core::factory::{self, OptsFn};
use crate::core::messages;
use crate::core::param::Param;
use crate::enforcers::any::AnyArg;
use std::fmt::Display;

/// Enforcer for collections and other re-iterable sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumerableArg;

impl EnumerableArg {
    /// Fail unless the sequence yields at least one element.
    pub fn has_items<'v, S>(
        &self,
        value: Option<&'v S>,
        param_name: Option<&str>,
        opts_fn: Option<&OptsFn>,
    ) -> Result<&'v S, GuardError>
    where
        S: ?Sized,
        for<'s> &'s S: IntoIterator,
    {
        let value = AnyArg.is_not_null(value, param_name, opts_fn)?;

        if value.into_iter().next().is_none() {
            return Err(factory::argument_error(
                messages::HAS_ITEMS_FAILED,
                param_name,
                opts_fn,
            ));
        }

        Ok(value)
    }

    /// Fail unless the sequence has exactly `expected` elements.
    pub fn size_is<'v, S>(
        &self,
        value: Option<&'v S>,
        expected: i32,
        param_name: Option<&str>,
        opts_fn: Option<&OptsFn>,
    ) -> Result<&'v S, GuardError>
    where
        S: ?Sized,
        for<'s> &'s S: IntoIterator,
    {
        let value = AnyArg.is_not_null(value, param_name, opts_fn)?;
        check_count(
            value.into_iter().count(),
            expected,
            usize::try_from(expected).ok(),
            param_name,
            opts_fn,
        )?;

        Ok(value)
    }

    /// [`size_is`](Self::size_is) for a 64-bit expected count.
    pub fn size_is_i64<'v, S>(
        &self,
        value: Option<&'v S>,
        expected: i64,
        param_name: Option<&str>,
        opts_fn: Option<&OptsFn>,
    ) -> Result<&'v S, GuardError>
    where
        S: ?Sized,
        for<'s> &'s S: IntoIterator,
    {
        let value = AnyArg.is_not_null(value, param_name, opts_fn)?;
        check_count(
            value.into_iter().count(),
            expected,
            usize::try_from(expected).ok(),
            param_name,
            opts_fn,
        )?;

        Ok(value)
    }

    /// Fail unless some element satisfies `predicate`.
    pub fn has_any<'v, S, T, F>(
        &self,
        value: Option<&'v S>,
        mut predicate: F,
        param_name: Option<&str>,
        opts_fn: Option<&OptsFn>,
    ) -> Result<&'v S, GuardError>
    where
        S: ?Sized,
        for<'s> &'s S: IntoIterator<Item = &'s T>,
        F: FnMut(&T) -> bool,
    {
        let value = AnyArg.is_not_null(value, param_name, opts_fn)?;

        if !value.into_iter().any(|item| predicate(item)) {
            return Err(factory::argument_error(
                messages::HAS_ANY_FAILED,
                param_name,
                opts_fn,
            ));
        }

        Ok(value)
    }
}

/// `expected_count` is `None` when `expected` has no `usize` equivalent, so
/// it never matches.
fn check_count(
    count: usize,
    expected: impl Display,
    expected_count: Option<usize>,
    param_name: Option<&str>,
    opts_fn: Option<&OptsFn>,
) -> Result<(), GuardError> {
    if expected_count == Some(count) {
        return Ok(());
    }

    Err(factory::argument_error(
        &messages::size_is_failed(expected, count),
        param_name,
        opts_fn,
    ))
}

impl<'a, 'v, S> Param<'a, &'v S>
where
    S: ?Sized,
    for<'s> &'s S: IntoIterator,
{
    pub fn has_items(self) -> Result<Self, GuardError> {
        self.enforce(|value, name, opts_fn| EnumerableArg.has_items(Some(value), name, opts_fn))
    }

    pub fn size_is(self, expected: i32) -> Result<Self, GuardError> {
        self.enforce(|value, name, opts_fn| {
            EnumerableArg.size_is(Some(value), expected, name, opts_fn)
        })
    }

    pub fn size_is_i64(self, expected: i64) -> Result<Self, GuardError> {
        self.enforce(|value, name, opts_fn| {
            EnumerableArg.size_is_i64(Some(value), expected, name, opts_fn)
        })
    }
}

impl<'a, 'v, S: ?Sized> Param<'a, &'v S> {
    pub fn has_any<T, F>(self, predicate: F) -> Result<Self, GuardError>
    where
        for<'s> &'s S: IntoIterator<Item = &'s T>,
        F: FnMut(&T) -> bool,
    {
        self.enforce(|value, name, opts_fn| {
            EnumerableArg.has_any(Some(value), predicate, name, opts_fn)
        })
    }
}
