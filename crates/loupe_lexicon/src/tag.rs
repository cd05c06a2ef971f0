//! Normalized tag names.

use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A tag name reduced to its comparison key.
///
/// Vue resolves `<my-widget>`, `<MyWidget>` and `<mywidget>` to the same
/// component, so every membership test goes through this form: hyphens are
/// stripped and the result is lower-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagName(CompactString);

impl TagName {
    /// Normalize a raw tag name.
    pub fn new(raw: &str) -> Self {
        let mut key = CompactString::with_capacity(raw.len());
        for ch in raw.chars().filter(|&c| c != '-') {
            key.extend(ch.to_lowercase());
        }
        Self(key)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TagName {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl AsRef<str> for TagName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_hyphens_and_lowercases() {
        assert_eq!(TagName::new("Foo-Bar").as_str(), "foobar");
        assert_eq!(TagName::new("v-date-input").as_str(), "vdateinput");
        assert_eq!(TagName::new("RouterView").as_str(), "routerview");
    }

    #[test]
    fn test_kebab_and_pascal_share_a_key() {
        assert_eq!(TagName::new("Foo-Bar"), TagName::new("foobar"));
        assert_eq!(TagName::new("keep-alive"), TagName::new("KeepAlive"));
        assert_ne!(TagName::new("foo-bar"), TagName::new("foo_bar"));
    }

    #[test]
    fn test_empty() {
        assert!(TagName::new("").is_empty());
        assert!(TagName::new("---").is_empty());
    }
}
