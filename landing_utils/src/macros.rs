/// Asserts that an expression matches a pattern, optionally guarded by a
/// predicate, and prints the value on failure.
///
/// #### Example
/// ```rust
/// # use landing_utils::assert_matches;
/// let status: Result<u16, ()> = Ok(400);
/// assert_matches!(status, Ok(400..=499));
/// assert_matches!(status, Ok(code) if *code != 200);
/// ```
#[macro_export]
macro_rules! assert_matches {
    ($expr:expr, $pat:pat $(,)?) => {
        match ($expr) {
            $pat => (),
            val => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    };
    ($expr:expr, $pat:pat if $pred:expr $(,)?) => {{
        let val = $expr;
        match (&val) {
            $pat if $pred => (),
            #[allow(unused_variables, reason = "bindings are only used by the guard")]
            $pat => ::core::panic!(
                "Assertion failed: Value {val:?} does not match predicate {}",
                ::core::stringify!($pred)
            ),
            _ => ::core::panic!(
                "Assertion failed: Value {val:?} did not match pattern {}",
                ::core::stringify!($pat)
            ),
        }
    }};
}
