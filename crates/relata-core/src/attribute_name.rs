//! Strongly-typed attribute name wrapper.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;
use std::ops::Deref;

/// Strongly-typed wrapper for attribute names.
///
/// Names are trimmed of surrounding whitespace at construction and compared
/// case-sensitively, so `"qty"` and `" qty "` name the same attribute while
/// `"qty"` and `"QTY"` do not. Prevents accidental mixing of attribute names
/// with other string types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct AttributeName(String);

impl AttributeName {
    /// Create a new `AttributeName`, panicking in debug builds if the name is
    /// blank after trimming.
    ///
    /// Prefer [`try_new`](Self::try_new) when handling untrusted input.
    pub fn new(name: impl Into<String>) -> Self {
        let s = name.into();
        let trimmed = s.trim();
        debug_assert!(!trimmed.is_empty(), "AttributeName must not be blank");
        if trimmed.len() == s.len() {
            Self(s)
        } else {
            Self(trimmed.to_string())
        }
    }

    /// Try to create a new `AttributeName`, returning `None` if the name is
    /// blank after trimming.
    pub fn try_new(name: impl Into<String>) -> Option<Self> {
        let s = name.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(Self(s))
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Return the underlying name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner `String`.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for AttributeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AttributeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for AttributeName {
    type Target = str;
    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for AttributeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<String> for AttributeName {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AttributeName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq<str> for AttributeName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for AttributeName {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl PartialEq<String> for AttributeName {
    fn eq(&self, other: &String) -> bool {
        self.0 == *other
    }
}

impl<'de> Deserialize<'de> for AttributeName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        AttributeName::try_new(s)
            .ok_or_else(|| serde::de::Error::custom("attribute name must not be blank"))
    }
}
