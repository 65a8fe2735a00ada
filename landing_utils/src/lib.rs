pub mod macros;

/// Returns the version string reported by the binary and sent as part of the
/// http user agent.
pub fn landing_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

pub trait Apply {
    /// Applies the function `f` only if `value` is `Some(...)` and provides the
    /// contained value to `f`.
    ///
    /// #### Example
    /// ```rust
    /// # use landing_utils::Apply;
    /// fn with_phone(body: String, phone: Option<&str>) -> String {
    ///     body.apply_map(phone, |body, phone| format!("{body} ({phone})"))
    /// }
    /// assert_eq!(with_phone("Maria".into(), None), "Maria");
    /// assert_eq!(with_phone("Maria".into(), Some("(11) 9")), "Maria ((11) 9)");
    /// ```
    fn apply_map<U>(self, value: Option<U>, f: impl FnOnce(Self, U) -> Self) -> Self
    where
        Self: Sized,
    {
        if let Some(value) = value {
            f(self, value)
        } else {
            self
        }
    }
}

impl<T> Apply for T {}
