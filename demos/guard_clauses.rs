//! Guard Clauses
//!
//! This example demonstrates validating arguments at the top of a function.
//!
//! Key concepts:
//! - Fluent checks with `ensure_that!` and `?`
//! - Strict vs flags-aware enum membership
//! - Custom failure messages
//! - Contracts that report every failure at once
//!
//! Run with: cargo run --example guard_clauses

use ensure_that::core::{opts_fn, GuardError};
use ensure_that::enforcement::ContractBuilder;
use ensure_that::enforcers::EnumerableArg;
use ensure_that::ensure_that;

bitflags::bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    struct Channel: u8 {
        const EMAIL = 1;
        const SMS = 2;
        const PUSH = 4;
        const MESSAGING = 3;
    }
}

fn notify(recipients: &[String], channel: Channel) -> Result<usize, GuardError> {
    let recipients = ensure_that!(recipients)
        .has_items()?
        .has_any(|r: &String| r.contains('@'))?
        .into_value();
    ensure_that!(channel).is_defined_with_flags_support()?;

    Ok(recipients.len())
}

fn main() {
    println!("=== Guard Clauses Example ===\n");

    // Example 1: Passing checks return the argument
    println!("Example 1: Chained checks");
    let recipients = vec!["ops@example.com".to_string(), "oncall".to_string()];
    match notify(&recipients, Channel::EMAIL | Channel::PUSH) {
        Ok(count) => println!("  Notified {count} recipients\n"),
        Err(e) => println!("  Rejected: {e}\n"),
    }

    // Example 2: Failing checks carry the parameter name
    println!("Example 2: Empty collection");
    if let Err(e) = notify(&[], Channel::SMS) {
        println!("  Rejected: {e}\n");
    }

    // Example 3: Strict membership
    println!("Example 3: Strict vs flags-aware membership");
    let combined = Channel::EMAIL | Channel::PUSH;
    let strict = ensure_that!(combined).is_defined();
    let flags = ensure_that!(combined).is_defined_with_flags_support();
    println!("  is_defined(EMAIL | PUSH): {}", strict.is_ok());
    println!("  is_defined_with_flags_support(EMAIL | PUSH): {}\n", flags.is_ok());

    // Example 4: Custom messages
    println!("Example 4: Custom message");
    let opts = opts_fn(|_, name| format!("{} needs at least one entry", name.unwrap_or("input")));
    let empty: Vec<String> = Vec::new();
    if let Err(e) = ensure_that!(&empty, &opts).has_items() {
        println!("  Rejected: {e}\n");
    }

    // Example 5: Contracts collect every failure
    println!("Example 5: Contracts");
    let contract = ContractBuilder::<Vec<String>>::new()
        .named("recipients")
        .require(|v: &Vec<String>| EnumerableArg.size_is(Some(v), 2, None, None).map(|_| ()))
        .require_pred(
            |v: &Vec<String>| v.iter().all(|r| r.contains('@')),
            "Every recipient needs an address",
        )
        .build();
    match contract.verify(&vec!["nobody".to_string()]) {
        Ok(()) => println!("  Contract satisfied"),
        Err(violations) => {
            for error in violations.errors() {
                println!("  - {error}");
            }
        }
    }

    println!("\n=== Example Complete ===");
}
