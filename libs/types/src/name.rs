//! Username and currency identifiers
//!
//! Both are case-sensitive, byte-compared strings: `"USD"` and `"usd"` are
//! distinct currencies. The only structural requirement is non-emptiness,
//! enforced at construction.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// A registered user's name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Try to create a Username, returning None if empty
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let s = name.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Username {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A currency designator, e.g. `"USD"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    /// Try to create a Currency, returning None if empty
    pub fn try_new(code: impl Into<String>) -> Option<Self> {
        let s = code.into();
        if s.is_empty() {
            None
        } else {
            Some(Self(s))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Currency {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_empty() {
        assert!(Username::try_new("").is_none());
        assert!(Username::try_new("alice").is_some());
    }

    #[test]
    fn test_currency_rejects_empty() {
        assert!(Currency::try_new("").is_none());
        assert_eq!(Currency::try_new("USD").unwrap().as_str(), "USD");
    }

    #[test]
    fn test_currency_is_case_sensitive() {
        assert_ne!(Currency::try_new("USD"), Currency::try_new("usd"));
    }

    #[test]
    fn test_username_serialization() {
        let name = Username::try_new("alice").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"alice\"");

        let back: Username = serde_json::from_str(&json).unwrap();
        assert_eq!(name, back);
    }
}
