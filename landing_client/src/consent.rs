//! Cookie consent banner.

use std::{collections::BTreeMap, time::Duration};

pub const CONSENT_COOKIE: &str = "cookie_consent";

/// One year.
pub const CONSENT_MAX_AGE: Duration = Duration::from_secs(31_536_000);

/// Access to the cookies of the current document, modelled after
/// `document.cookie`.
pub trait CookieStorage {
    /// All cookies as `name=value` pairs separated by `"; "`.
    fn cookies(&self) -> String;

    /// Stores a single cookie given in `Set-Cookie` syntax.
    fn set_cookie(&mut self, cookie: &str);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentState {
    Unset,
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentChoice {
    Accepted,
    Rejected,
}

impl ConsentChoice {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }

    fn cookie(self) -> String {
        format!(
            "{CONSENT_COOKIE}={}; max-age={}; path=/; samesite=lax",
            self.as_str(),
            CONSENT_MAX_AGE.as_secs()
        )
    }
}

#[derive(Debug)]
pub struct ConsentStore<S> {
    storage: S,
    state: ConsentState,
}

impl<S: CookieStorage> ConsentStore<S> {
    /// Reads the stored choice, if any, on page load.
    pub fn load(storage: S) -> Self {
        let state = read_consent(&storage.cookies());
        Self { storage, state }
    }

    pub fn state(&self) -> ConsentState {
        self.state
    }

    /// The banner is only shown until the visitor made a choice.
    pub fn is_banner_visible(&self) -> bool {
        self.state == ConsentState::Unset
    }

    pub fn accept(&mut self) {
        self.choose(ConsentChoice::Accepted);
    }

    pub fn reject(&mut self) {
        self.choose(ConsentChoice::Rejected);
    }

    pub fn choose(&mut self, choice: ConsentChoice) {
        self.storage.set_cookie(&choice.cookie());
        self.state = match choice {
            ConsentChoice::Accepted => ConsentState::Accepted,
            ConsentChoice::Rejected => ConsentState::Rejected,
        };
    }

    pub fn into_storage(self) -> S {
        self.storage
    }
}

/// Any value other than `accepted` counts as a rejection.
fn read_consent(cookies: &str) -> ConsentState {
    let value = cookies
        .split(';')
        .filter_map(|cookie| cookie.trim().split_once('='))
        .find_map(|(name, value)| (name == CONSENT_COOKIE).then_some(value));

    match value {
        None => ConsentState::Unset,
        Some("accepted") => ConsentState::Accepted,
        Some(_) => ConsentState::Rejected,
    }
}

/// In-memory cookie jar that keeps the latest value per cookie name and
/// ignores attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryCookieStorage {
    cookies: BTreeMap<String, String>,
    /// Raw `Set-Cookie` strings in the order they were written.
    pub written: Vec<String>,
}

impl MemoryCookieStorage {
    pub fn with_cookie(mut self, name: &str, value: &str) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }
}

impl CookieStorage for MemoryCookieStorage {
    fn cookies(&self) -> String {
        self.cookies
            .iter()
            .map(|(name, value)| format!("{name}={value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn set_cookie(&mut self, cookie: &str) {
        self.written.push(cookie.into());
        let pair = cookie.split(';').next().unwrap_or_default();
        if let Some((name, value)) = pair.split_once('=') {
            self.cookies.insert(name.trim().into(), value.trim().into());
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn first_visit_shows_banner() {
        let storage = MemoryCookieStorage::default().with_cookie("theme", "dark");
        let sut = ConsentStore::load(storage);

        assert_eq!(sut.state(), ConsentState::Unset);
        assert!(sut.is_banner_visible());
    }

    #[test]
    fn accept() {
        let mut sut = ConsentStore::load(MemoryCookieStorage::default());

        sut.accept();

        assert_eq!(sut.state(), ConsentState::Accepted);
        assert!(!sut.is_banner_visible());
        assert_eq!(
            sut.into_storage().written,
            ["cookie_consent=accepted; max-age=31536000; path=/; samesite=lax"]
        );
    }

    #[test]
    fn reject() {
        let mut sut = ConsentStore::load(MemoryCookieStorage::default());

        sut.reject();

        assert_eq!(sut.state(), ConsentState::Rejected);
        assert!(!sut.is_banner_visible());
        assert_eq!(
            sut.into_storage().written,
            ["cookie_consent=rejected; max-age=31536000; path=/; samesite=lax"]
        );
    }

    #[test]
    fn choice_survives_reload() {
        for (choice, state) in [
            (ConsentChoice::Accepted, ConsentState::Accepted),
            (ConsentChoice::Rejected, ConsentState::Rejected),
        ] {
            let mut first = ConsentStore::load(MemoryCookieStorage::default());
            first.choose(choice);

            let second = ConsentStore::load(first.into_storage());

            assert_eq!(second.state(), state);
            assert!(!second.is_banner_visible());
        }
    }

    #[test]
    fn unknown_value_counts_as_rejected() {
        let storage = MemoryCookieStorage::default().with_cookie(CONSENT_COOKIE, "maybe");
        let sut = ConsentStore::load(storage);

        assert_eq!(sut.state(), ConsentState::Rejected);
        assert!(!sut.is_banner_visible());
    }

    #[test]
    fn parse_document_cookie() {
        assert_eq!(read_consent(""), ConsentState::Unset);
        assert_eq!(
            read_consent("a=1; cookie_consent=accepted; b=2"),
            ConsentState::Accepted
        );
        assert_eq!(read_consent("xcookie_consent=accepted"), ConsentState::Unset);
        assert_eq!(read_consent("cookie_consent=rejected"), ConsentState::Rejected);
    }
}
