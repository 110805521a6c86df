//! Construction of [`GuardError`] values.
//!
//! Every enforcer builds its failures here, so default formatting, caller
//! customization and logging happen in one place.

use crate::core::error::{ErrorKind, GuardError};
use std::sync::Arc;

/// Caller-supplied message customizer.
///
/// Called with the default message and the parameter name; the returned
/// string becomes the error message verbatim.
pub type OptsFn = Arc<dyn Fn(&str, Option<&str>) -> String + Send + Sync>;

/// Wrap a closure as an [`OptsFn`].
///
/// # Example
///
/// ```rust
/// use ensure_that::core::opts_fn;
///
/// let opts = opts_fn(|_message, name| format!("{} is required", name.unwrap_or("value")));
/// assert_eq!(opts("ignored", Some("user")), "user is required");
/// ```
pub fn opts_fn<F>(f: F) -> OptsFn
where
    F: Fn(&str, Option<&str>) -> String + Send + Sync + 'static,
{
    Arc::new(f)
}

pub fn argument_null_error(
    message: &str,
    param_name: Option<&str>,
    opts_fn: Option<&OptsFn>,
) -> GuardError {
    let message = format_message(message, param_name, opts_fn);
    log_failure(ErrorKind::ArgumentNull, param_name, &message);

    GuardError::ArgumentNull {
        param_name: param_name.map(str::to_owned),
        message,
    }
}

pub fn argument_error(
    message: &str,
    param_name: Option<&str>,
    opts_fn: Option<&OptsFn>,
) -> GuardError {
    let message = format_message(message, param_name, opts_fn);
    log_failure(ErrorKind::Argument, param_name, &message);

    GuardError::Argument {
        param_name: param_name.map(str::to_owned),
        message,
    }
}

fn format_message(message: &str, param_name: Option<&str>, opts_fn: Option<&OptsFn>) -> String {
    match (opts_fn, param_name) {
        (Some(customize), _) => customize(message, param_name),
        (None, Some(name)) => format!("{message} (Parameter '{name}')"),
        (None, None) => message.to_owned(),
    }
}

fn log_failure(kind: ErrorKind, param_name: Option<&str>, message: &str) {
    tracing::debug!(kind = ?kind, param = ?param_name, message, "guard failed");
}
