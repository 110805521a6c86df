//! Builder API for creating contracts.

use crate::core::error::GuardError;
use crate::core::factory;
use crate::enforcement::rules::{Contract, GuardCheck};

/// Builder for [`Contract`]s.
pub struct ContractBuilder<T: ?Sized> {
    name: Option<String>,
    checks: Vec<GuardCheck<T>>,
}

impl<T: ?Sized> ContractBuilder<T> {
    pub fn new() -> Self {
        Self {
            name: None,
            checks: Vec::new(),
        }
    }

    /// Parameter name reported by predicate failures
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add a guard, typically a call into one of the enforcers
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&T) -> Result<(), GuardError> + Send + Sync + 'static,
    {
        self.checks.push(Box::new(move |value: &T, _name: Option<&str>| check(value)));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, message: impl Into<String>) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let message = message.into();
        let check = move |value: &T, name: Option<&str>| {
            if predicate(value) {
                Ok(())
            } else {
                Err(factory::argument_error(&message, name, None))
            }
        };
        self.checks.push(Box::new(check));
        self
    }

    /// Build the contract
    pub fn build(self) -> Contract<T> {
        Contract {
            name: self.name,
            checks: self.checks,
        }
    }
}

impl<T: ?Sized> Default for ContractBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
