//! Newtype wrapper for product identifiers, providing compile-time type safety.
//!
//! Serializes/deserializes as a plain string.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Deref;

/// Catalog-scoped product identifier of the form `PID001`, `PID002`, ...
///
/// Generated sequentially by [`crate::CartManager`]; identifiers are never
/// reused and never deleted from the catalog.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create a new instance from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Format the identifier for the given counter value (`1` → `PID001`).
    ///
    /// Padding widens naturally past 999.
    pub fn from_counter(n: u32) -> Self {
        Self(format!("PID{n:03}"))
    }

    /// Return the inner string as a slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume self and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Deref for ProductId {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ProductId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ProductId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for ProductId {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_display_and_as_ref() {
        let id = ProductId::new("PID001");
        assert_eq!(id.to_string(), "PID001");
        assert_eq!(id.as_str(), "PID001");
        assert_eq!(AsRef::<str>::as_ref(&id), "PID001");
    }

    #[test]
    fn from_counter_zero_pads_to_three_digits() {
        assert_eq!(ProductId::from_counter(1), "PID001");
        assert_eq!(ProductId::from_counter(42), "PID042");
        assert_eq!(ProductId::from_counter(999), "PID999");
    }

    #[test]
    fn from_counter_widens_past_three_digits() {
        assert_eq!(ProductId::from_counter(1000), "PID1000");
    }

    #[test]
    fn serde_transparent_round_trip() {
        let id = ProductId::new("PID007");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"PID007\"");
        let back: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
