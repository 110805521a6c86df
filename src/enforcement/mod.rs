//! Validation-based enforcement of several guards at once.
//!
//! A chain of `?` checks stops at the first failure. A [`Contract`] runs
//! every registered guard against a value and uses Stillwater's
//! `Validation` type to accumulate ALL failures.
//!
//! # Example
//!
//! ```rust
//! use ensure_that::enforcement::ContractBuilder;
//! use ensure_that::enforcers::EnumerableArg;
//!
//! let contract = ContractBuilder::<Vec<u32>>::new()
//!     .named("ports")
//!     .require(|ports: &Vec<u32>| {
//!         EnumerableArg.has_items(Some(ports), Some("ports"), None).map(|_| ())
//!     })
//!     .require_pred(|ports: &Vec<u32>| ports.iter().all(|p| *p < 65536), "Port out of range")
//!     .build();
//!
//! assert!(contract.verify(&vec![80, 443]).is_ok());
//!
//! let violations = contract.verify(&Vec::new()).unwrap_err();
//! assert_eq!(violations.len(), 1);
//! ```

pub mod builder;
pub mod rules;
pub mod violations;

pub use builder::ContractBuilder;
pub use rules::{Contract, GuardCheck};
pub use violations::GuardViolations;
