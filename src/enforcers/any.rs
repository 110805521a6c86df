//! Checks that apply to a value of any type.

use crate::core::error::GuardError;
use crate::core::factory::{self, OptsFn};
use crate::core::messages;

/// Enforcer shared by every other enforcer for the presence check.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyArg;

impl AnyArg {
    /// Return the contained value, or an argument-null error for `None`.
    pub fn is_not_null<T>(
        &self,
        value: Option<T>,
        param_name: Option<&str>,
        opts_fn: Option<&OptsFn>,
    ) -> Result<T, GuardError> {
        value.ok_or_else(|| {
            factory::argument_null_error(messages::IS_NOT_NULL_FAILED, param_name, opts_fn)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn present_value_is_returned() {
        assert_eq!(AnyArg.is_not_null(Some(7), Some("n"), None), Ok(7));
    }

    #[test]
    fn absent_value_fails_with_null_kind() {
        let error = AnyArg.is_not_null::<u8>(None, Some("n"), None).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ArgumentNull);
        assert_eq!(error.message(), "Value can not be null. (Parameter 'n')");
    }
}
