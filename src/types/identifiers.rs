use std::fmt;

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use md5::{Digest, Md5};

/// Hex characters of the phrase digest appended to the slug.
const FINGERPRINT_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeywordId(String);

impl KeywordId {
    /// Derive the id of a phrase: `<slug>_<fingerprint>`.
    ///
    /// The slug is the lowercased phrase with spaces and hyphens turned into
    /// underscores. The fingerprint is the leading hex of the MD5 digest of
    /// the phrase exactly as given, so phrases that slug identically
    /// ("Call-Center" / "call center") still get distinct ids, and ids match
    /// the ones already stored in existing snapshots. Same phrase, same id.
    pub fn from_phrase(phrase: &str) -> Self {
        let slug = slugify(phrase);

        let mut hasher = Md5::new();
        hasher.update(phrase.as_bytes());
        let digest = hex::encode(hasher.finalize());

        KeywordId(format!("{slug}_{}", &digest[..FINGERPRINT_LEN]))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for KeywordId {
    fn from(value: &str) -> Self {
        KeywordId(value.to_string())
    }
}

impl fmt::Display for KeywordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn slugify(phrase: &str) -> String {
    phrase.to_lowercase().replace([' ', '-'], "_")
}

/// ISO-8601 UTC timestamp kept as text.
///
/// Fixed microsecond precision with a `Z` suffix, so values produced here
/// order the same lexicographically and chronologically. Loaded values are
/// kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(String);

impl Timestamp {
    pub fn now() -> Self {
        Timestamp(Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
