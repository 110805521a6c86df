//! Default failure messages.
//!
//! Templates with placeholders are formatted by the enforcer that owns them;
//! the factory only appends the parameter name.

pub const IS_NOT_NULL_FAILED: &str = "Value can not be null.";

pub const HAS_ITEMS_FAILED: &str = "Empty collection is not allowed.";

pub const HAS_ANY_FAILED: &str = "The predicate did not match any elements.";

pub fn size_is_failed(expected: impl std::fmt::Display, actual: usize) -> String {
    format!("Expected an item count of '{expected}' but found '{actual}'.")
}

pub fn enum_is_defined_failed(value: impl std::fmt::Display, type_name: &str) -> String {
    format!("The value '{value}' is not defined in '{type_name}'.")
}
