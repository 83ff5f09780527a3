use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The short identifier a URL is stored under.
///
/// Lookups accept any string verbatim, so there is no validating
/// constructor: a hash that was never generated simply resolves to nothing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hash(String);

impl Hash {
    /// Creates a `Hash` without any checks.
    ///
    /// Generators use this for codes they produced themselves.
    pub fn new_unchecked(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Returns the hash as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Builds the public short URL for this hash under `base_url`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }
}

impl From<String> for Hash {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Hash {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl AsRef<str> for Hash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Hash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_raw_hash() {
        let hash = Hash::new_unchecked("abc1234");
        assert_eq!(hash.to_string(), "abc1234");
        assert_eq!(hash.as_str(), "abc1234");
    }

    #[test]
    fn to_url_trims_trailing_slash() {
        let hash = Hash::from("abc1234");
        assert_eq!(hash.to_url("https://bur.row"), "https://bur.row/abc1234");
        assert_eq!(hash.to_url("https://bur.row/"), "https://bur.row/abc1234");
    }

    #[test]
    fn serializes_as_plain_string() {
        let hash = Hash::from("xyz0001");
        assert_eq!(serde_json::to_string(&hash).unwrap(), "\"xyz0001\"");

        let back: Hash = serde_json::from_str("\"xyz0001\"").unwrap();
        assert_eq!(back, hash);
    }
}
