//! Macros for ergonomic guard clauses.

/// Wrap an argument in a [`Param`](crate::core::Param) named after the
/// expression that produced it.
///
/// A leading `&` is dropped from the name, so `ensure_that!(&items)` reports
/// `items` and `ensure_that!(&config.hosts)` reports `config.hosts`. An
/// optional second argument attaches a message customizer.
///
/// # Example
///
/// ```
/// use ensure_that::ensure_that;
///
/// let hosts = vec!["a.example", "b.example"];
/// let hosts = ensure_that!(&hosts).has_items().unwrap().into_value();
/// assert_eq!(hosts.len(), 2);
///
/// let empty: Vec<&str> = Vec::new();
/// let error = ensure_that!(&empty).has_items().unwrap_err();
/// assert_eq!(error.param_name(), Some("empty"));
/// ```
#[macro_export]
macro_rules! ensure_that {
    (& $value:expr $(,)?) => {
        $crate::core::Param::new(&$value).named(stringify!($value))
    };
    (& $value:expr, $opts:expr $(,)?) => {
        $crate::core::Param::new(&$value)
            .named(stringify!($value))
            .with_opts($opts)
    };
    ($value:expr $(,)?) => {
        $crate::core::Param::new($value).named(stringify!($value))
    };
    ($value:expr, $opts:expr $(,)?) => {
        $crate::core::Param::new($value)
            .named(stringify!($value))
            .with_opts($opts)
    };
}
