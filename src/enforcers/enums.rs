//! Membership checks for flag-style enums.
//!
//! The set of named values comes from the `FLAGS` table that `bitflags!`
//! generates for the type. Unnamed entries (`const _ = ...`) are ignored.

use crate::core::error::GuardError;
use crate::core::factory::{self, OptsFn};
use crate::core::messages;
use crate::core::param::Param;
use bitflags::{Bits, Flags};
use std::any;
use std::fmt::Display;

/// Enforcer for values of `bitflags!` types.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumArg;

impl EnumArg {
    /// Fail unless `value` is exactly one of the named values of `T`.
    ///
    /// A combination of valid flags passes only when the combined value has
    /// a name of its own. Given
    ///
    /// ```text
    /// A = 1, B = 2, C = 4, AB = 3
    /// ```
    ///
    /// `A | B` passes because of `AB`, while `A | C` fails. Use
    /// [`is_defined_with_flags_support`](Self::is_defined_with_flags_support)
    /// for combinations.
    pub fn is_defined<T>(
        &self,
        value: T,
        param_name: Option<&str>,
        opts_fn: Option<&OptsFn>,
    ) -> Result<T, GuardError>
    where
        T: Flags,
        T::Bits: Display,
    {
        if is_named(&value) {
            Ok(value)
        } else {
            Err(undefined(&value, param_name, opts_fn))
        }
    }

    /// Fail unless `value` is a named value of `T` or an exact union of
    /// named non-zero flags.
    ///
    /// Any bit not covered by a named flag contained in `value` fails. Zero
    /// passes only when `T` names a zero value.
    pub fn is_defined_with_flags_support<T>(
        &self,
        value: T,
        param_name: Option<&str>,
        opts_fn: Option<&OptsFn>,
    ) -> Result<T, GuardError>
    where
        T: Flags,
        T::Bits: Display,
    {
        if is_named(&value) || decomposes(&value) {
            Ok(value)
        } else {
            Err(undefined(&value, param_name, opts_fn))
        }
    }
}

impl<'a, T> Param<'a, T>
where
    T: Flags,
    T::Bits: Display,
{
    /// Chain form of [`EnumArg::is_defined`].
    pub fn is_defined(self) -> Result<Self, GuardError> {
        self.enforce(|value, name, opts_fn| EnumArg.is_defined(value, name, opts_fn))
    }

    /// Chain form of [`EnumArg::is_defined_with_flags_support`].
    pub fn is_defined_with_flags_support(self) -> Result<Self, GuardError> {
        self.enforce(|value, name, opts_fn| {
            EnumArg.is_defined_with_flags_support(value, name, opts_fn)
        })
    }
}

fn named_bits<T: Flags>() -> impl Iterator<Item = T::Bits> {
    T::FLAGS
        .iter()
        .filter(|flag| flag.is_named())
        .map(|flag| flag.value().bits())
}

fn is_named<T: Flags>(value: &T) -> bool {
    let bits = value.bits();
    named_bits::<T>().any(|named| named == bits)
}

fn decomposes<T: Flags>(value: &T) -> bool {
    let bits = value.bits();
    if bits == <T::Bits as Bits>::EMPTY {
        return false;
    }

    let covered = named_bits::<T>()
        .filter(|named| *named != <T::Bits as Bits>::EMPTY && (*named & bits) == *named)
        .fold(<T::Bits as Bits>::EMPTY, |acc, named| acc | named);

    covered == bits
}

fn undefined<T>(value: &T, param_name: Option<&str>, opts_fn: Option<&OptsFn>) -> GuardError
where
    T: Flags,
    T::Bits: Display,
{
    let message = messages::enum_is_defined_failed(value.bits(), short_type_name::<T>());
    factory::argument_error(&message, param_name, opts_fn)
}

fn short_type_name<T>() -> &'static str {
    let full = any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::core::factory::opts_fn;

    bitflags::bitflags! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct Abc: u32 {
            const A = 1;
            const B = 2;
            const C = 4;
            const AB = 3;
        }
    }

    bitflags::bitflags! {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct Access: u8 {
            const NONE = 0;
            const READ_WRITE = 3;
            const EXECUTE = 4;
        }
    }

    #[test]
    fn is_defined_accepts_named_members() {
        for value in [Abc::A, Abc::B, Abc::C, Abc::AB] {
            assert_eq!(EnumArg.is_defined(value, None, None), Ok(value));
        }
    }

    #[test]
    fn is_defined_accepts_combination_with_its_own_name() {
        assert!(EnumArg.is_defined(Abc::A | Abc::B, None, None).is_ok());
    }

    #[test]
    fn is_defined_rejects_unnamed_combination() {
        let error = EnumArg
            .is_defined(Abc::A | Abc::C, Some("mode"), None)
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Argument);
        assert_eq!(
            error.message(),
            "The value '5' is not defined in 'Abc'. (Parameter 'mode')"
        );
    }

    #[test]
    fn is_defined_rejects_unnamed_zero() {
        assert!(EnumArg.is_defined(Abc::empty(), None, None).is_err());
        assert!(EnumArg.is_defined(Access::NONE, None, None).is_ok());
    }

    #[test]
    fn flags_support_accepts_unions_of_named_flags() {
        assert!(EnumArg
            .is_defined_with_flags_support(Abc::A | Abc::C, None, None)
            .is_ok());
        assert!(EnumArg
            .is_defined_with_flags_support(Abc::all(), None, None)
            .is_ok());
    }

    #[test]
    fn flags_support_rejects_bits_outside_named_flags() {
        let stray = Abc::from_bits_retain(8);
        assert!(EnumArg.is_defined_with_flags_support(stray, None, None).is_err());

        let mixed = Abc::from_bits_retain(1 | 8);
        assert!(EnumArg.is_defined_with_flags_support(mixed, None, None).is_err());
    }

    #[test]
    fn flags_support_requires_exact_decomposition() {
        // 1 is inside READ_WRITE's bits but is not a union of named flags.
        let partial = Access::from_bits_retain(1);
        assert!(EnumArg
            .is_defined_with_flags_support(partial, None, None)
            .is_err());

        let combined = Access::READ_WRITE | Access::EXECUTE;
        assert!(EnumArg
            .is_defined_with_flags_support(combined, None, None)
            .is_ok());
    }

    #[test]
    fn flags_support_zero_needs_a_name() {
        assert!(EnumArg
            .is_defined_with_flags_support(Abc::empty(), None, None)
            .is_err());
        assert!(EnumArg
            .is_defined_with_flags_support(Access::empty(), None, None)
            .is_ok());
    }

    #[test]
    fn param_chain_returns_same_wrapper() {
        let checked = Param::new(Abc::AB)
            .named("abc")
            .is_defined()
            .and_then(Param::is_defined_with_flags_support)
            .unwrap();

        assert_eq!(checked.name(), Some("abc"));
        assert_eq!(checked.into_value(), Abc::AB);
    }

    #[test]
    fn param_chain_uses_customizer() {
        let opts = opts_fn(|_, name| format!("unsupported {}", name.unwrap_or("flag")));

        let error = Param::new(Abc::A | Abc::C)
            .named("abc")
            .with_opts(&opts)
            .is_defined()
            .unwrap_err();

        assert_eq!(error.message(), "unsupported abc");
    }
}
