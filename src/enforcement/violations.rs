//! Accumulated guard failures.

use crate::core::error::GuardError;
use thiserror::Error;

/// Every failure reported by one contract, in registration order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{} guard(s) failed: {}", .errors.len(), join_messages(.errors))]
pub struct GuardViolations {
    errors: Vec<GuardError>,
}

impl GuardViolations {
    pub(crate) fn new(errors: Vec<GuardError>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &[GuardError] {
        &self.errors
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<GuardError> {
        self.errors
    }
}

fn join_messages(errors: &[GuardError]) -> String {
    errors
        .iter()
        .map(GuardError::message)
        .collect::<Vec<_>>()
        .join("; ")
}
