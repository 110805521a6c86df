//! The error returned by every failing guard.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which category of precondition was violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A required value was absent.
    ArgumentNull,

    /// A present value failed a semantic check.
    Argument,
}

/// A violated precondition.
///
/// The message is either the library's default text (with the parameter
/// name appended when known) or the verbatim output of a caller-supplied
/// [`OptsFn`](crate::core::OptsFn).
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardError {
    #[error("{message}")]
    ArgumentNull {
        param_name: Option<String>,
        message: String,
    },

    #[error("{message}")]
    Argument {
        param_name: Option<String>,
        message: String,
    },
}

impl GuardError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ArgumentNull { .. } => ErrorKind::ArgumentNull,
            Self::Argument { .. } => ErrorKind::Argument,
        }
    }

    /// Name of the offending parameter, if the call site supplied one.
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Self::ArgumentNull { param_name, .. } | Self::Argument { param_name, .. } => {
                param_name.as_deref()
            }
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::ArgumentNull { message, .. } | Self::Argument { message, .. } => message,
        }
    }
}
