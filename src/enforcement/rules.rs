//! Contracts: several guards over one value, with accumulated failures.

use crate::core::error::GuardError;
use crate::enforcement::violations::GuardViolations;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// A check registered on a contract. Receives the value and the contract's
/// parameter name.
pub type GuardCheck<T> = Box<dyn Fn(&T, Option<&str>) -> Result<(), GuardError> + Send + Sync>;

/// A set of guards over values of type `T`.
///
/// Unlike a chain of `?` checks, enforcing a contract runs every check and
/// reports all failures.
pub struct Contract<T: ?Sized> {
    pub(crate) name: Option<String>,
    pub(crate) checks: Vec<GuardCheck<T>>,
}

impl<T: ?Sized> Contract<T> {
    /// Run every check, accumulating ALL failures.
    pub fn enforce(&self, value: &T) -> Validation<(), NonEmptyVec<GuardError>> {
        let name = self.name.as_deref();
        let checks: Vec<Validation<(), NonEmptyVec<GuardError>>> = self
            .checks
            .iter()
            .map(|check| match check(value, name) {
                Ok(()) => Validation::success(()),
                Err(error) => Validation::fail(error),
            })
            .collect();

        let outcome = Validation::all_vec(checks).map(|_| ());

        if let Validation::Failure(errors) = &outcome {
            tracing::debug!(
                param = ?name,
                checks = self.checks.len(),
                violations = errors.len(),
                "contract violated"
            );
        }

        outcome
    }

    /// [`enforce`](Self::enforce) as a `Result`.
    pub fn verify(&self, value: &T) -> Result<(), GuardViolations> {
        match self.enforce(value) {
            Validation::Success(()) => Ok(()),
            Validation::Failure(errors) => Err(GuardViolations::new(
                errors.iter().cloned().collect(),
            )),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::enforcement::builder::ContractBuilder;
    use crate::enforcers::{AnyArg, EnumerableArg};

    #[test]
    fn enforcement_accumulates_all_violations() {
        let contract = ContractBuilder::<Vec<i32>>::new()
            .named("scores")
            .require(|v: &Vec<i32>| EnumerableArg.size_is(Some(v), 3, None, None).map(|_| ()))
            .require_pred(|v: &Vec<i32>| v.iter().all(|n| *n >= 0), "Scores must not be negative")
            .require(|v: &Vec<i32>| {
                EnumerableArg
                    .has_any(Some(v), |n: &i32| *n > 100, None, None)
                    .map(|_| ())
            })
            .build();

        let result = contract.enforce(&vec![-1]);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors.iter().all(|e| e.kind() == ErrorKind::Argument));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn enforcement_succeeds_when_all_checks_pass() {
        let contract = ContractBuilder::<Vec<i32>>::new()
            .require(|v: &Vec<i32>| EnumerableArg.has_items(Some(v), None, None).map(|_| ()))
            .require_pred(|v: &Vec<i32>| v.len() < 10, "Too many scores")
            .build();

        assert!(contract.enforce(&vec![1, 2]).is_success());
        assert!(contract.verify(&vec![1, 2]).is_ok());
    }

    #[test]
    fn verify_keeps_registration_order() {
        let contract = ContractBuilder::<Option<String>>::new()
            .named("title")
            .require(|v: &Option<String>| {
                AnyArg.is_not_null(v.as_ref(), Some("title"), None).map(|_| ())
            })
            .require_pred(|v: &Option<String>| v.is_some(), "A title is required")
            .build();

        let violations = contract.verify(&None).unwrap_err();

        assert_eq!(violations.len(), 2);
        assert_eq!(violations.errors()[0].kind(), ErrorKind::ArgumentNull);
        assert_eq!(
            violations.errors()[1].message(),
            "A title is required (Parameter 'title')"
        );
    }

    #[test]
    fn empty_contract_always_passes() {
        let contract: Contract<str> = ContractBuilder::new().build();

        assert!(contract.is_empty());
        assert!(contract.enforce("anything").is_success());
    }
}
