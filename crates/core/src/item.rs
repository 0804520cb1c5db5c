//! Item identifiers.

use core::borrow::Borrow;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Name of a stocked item.
///
/// Non-empty and case-sensitive. No trimming or case folding is applied:
/// `"Apple"`, `"apple"` and `" apple"` are three different items.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::validation("item name cannot be empty"));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ItemName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for ItemName {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl FromStr for ItemName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_rejected() {
        assert_eq!(
            ItemName::new(""),
            Err(DomainError::validation("item name cannot be empty"))
        );
    }

    #[test]
    fn names_are_case_sensitive_and_untrimmed() {
        let lower: ItemName = "apple".parse().unwrap();
        let upper: ItemName = "Apple".parse().unwrap();
        let padded: ItemName = " apple".parse().unwrap();

        assert_ne!(lower, upper);
        assert_ne!(lower, padded);
        assert_eq!(padded.as_str(), " apple");
    }

    #[test]
    fn serde_is_transparent_and_validating() {
        let name = ItemName::new("orange").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"orange\"");

        let back: ItemName = serde_json::from_str("\"orange\"").unwrap();
        assert_eq!(back, name);

        assert!(serde_json::from_str::<ItemName>("\"\"").is_err());
    }
}
