use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A bare address, e.g. the submitter's `maria@example.com`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddress(pub lettre::Address);

/// An address with an optional display name, e.g. `Site <no-reply@example.com>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAddressWithName(pub lettre::message::Mailbox);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        self.0.as_ref()
    }

    /// Returns whether `s` follows the `local@domain` address grammar.
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Self>().is_ok()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for EmailAddressWithName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for EmailAddress {
    type Err = <lettre::Address as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl FromStr for EmailAddressWithName {
    type Err = <lettre::message::Mailbox as FromStr>::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid() {
        for s in ["a@b.com", "maria.silva@example.com.br", "x+tag@sub.example.org"] {
            assert!(EmailAddress::is_valid(s), "{s}");
        }
    }

    #[test]
    fn invalid() {
        for s in ["", "foo", "foo@", "@example.com", "a b@example.com", "a@@b.com"] {
            assert!(!EmailAddress::is_valid(s), "{s}");
        }
    }

    #[test]
    fn mailbox_with_display_name() {
        let mailbox = "Site <no-reply@example.com>"
            .parse::<EmailAddressWithName>()
            .unwrap();
        assert_eq!(mailbox.0.name.as_deref(), Some("Site"));
        assert_eq!(mailbox.0.email.to_string(), "no-reply@example.com");
    }
}
