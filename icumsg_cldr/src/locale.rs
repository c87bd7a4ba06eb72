//! Locale tags.
//!
//! A [`Locale`] is a normalized BCP-47-style tag (`en`, `en-US`,
//! `zh-Hans-CN`). Parsing is deliberately shallow: it validates subtag
//! shapes and normalizes case and separators, but does not canonicalize
//! aliases or validate against the IANA registry — the plural-form lookup
//! only ever needs the exact tag and the base language.

use std::fmt;
use std::str::FromStr;

/// A normalized locale tag.
///
/// Construction normalizes `_` separators to `-`, lowercases the language
/// subtag, titlecases 4-letter (script) subtags, and uppercases 2-letter
/// region subtags, so `"EN_us"`, `"en-US"` and `"en_US"` all compare equal.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Normalized tag, subtags joined with `-`.
    tag: String,
    /// Byte length of the primary language subtag within `tag`.
    base_len: u8,
}

impl Locale {
    /// Parse and normalize a locale tag.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError`] if the tag is empty, a subtag is empty or
    /// longer than 8 bytes, a subtag contains non-alphanumeric ASCII, or the
    /// language subtag is not 2–8 ASCII letters.
    pub fn new(tag: &str) -> Result<Self, LocaleError> {
        if tag.is_empty() {
            return Err(LocaleError::Empty);
        }
        let mut normalized = String::with_capacity(tag.len());
        let mut base_len = 0u8;
        for (i, subtag) in tag.split(['-', '_']).enumerate() {
            if subtag.is_empty() || subtag.len() > 8 {
                return Err(LocaleError::InvalidSubtag(subtag.to_owned()));
            }
            if !subtag.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(LocaleError::InvalidSubtag(subtag.to_owned()));
            }
            if i == 0 {
                if subtag.len() < 2 || !subtag.bytes().all(|b| b.is_ascii_alphabetic()) {
                    return Err(LocaleError::InvalidSubtag(subtag.to_owned()));
                }
                #[allow(
                    clippy::cast_possible_truncation,
                    reason = "subtag length is at most 8"
                )]
                {
                    base_len = subtag.len() as u8;
                }
            } else {
                normalized.push('-');
            }
            push_normalized(&mut normalized, i, subtag);
        }
        Ok(Self {
            tag: normalized,
            base_len,
        })
    }

    /// The full normalized tag, e.g. `"zh-Hans-CN"`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.tag
    }

    /// The primary language subtag, e.g. `"zh"` for `"zh-Hans-CN"`.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.tag[..usize::from(self.base_len)]
    }
}

/// Append `subtag` to `out` with position-dependent case normalization.
fn push_normalized(out: &mut String, index: usize, subtag: &str) {
    let is_alpha = subtag.bytes().all(|b| b.is_ascii_alphabetic());
    if index == 0 {
        // Language subtag: lowercase.
        out.extend(subtag.chars().map(|c| c.to_ascii_lowercase()));
    } else if subtag.len() == 4 && is_alpha {
        // Script subtag: titlecase.
        let mut chars = subtag.chars();
        if let Some(first) = chars.next() {
            out.push(first.to_ascii_uppercase());
        }
        out.extend(chars.map(|c| c.to_ascii_lowercase()));
    } else if subtag.len() == 2 && is_alpha {
        // Region subtag: uppercase.
        out.extend(subtag.chars().map(|c| c.to_ascii_uppercase()));
    } else {
        // Numeric region, variants, extensions: lowercase.
        out.extend(subtag.chars().map(|c| c.to_ascii_lowercase()));
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tag)
    }
}

impl FromStr for Locale {
    type Err = LocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Error parsing a locale tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LocaleError {
    /// The tag was the empty string.
    Empty,
    /// A subtag was empty, too long, non-alphanumeric, or the language
    /// subtag was not 2–8 ASCII letters.
    InvalidSubtag(String),
}

impl fmt::Display for LocaleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty locale tag"),
            Self::InvalidSubtag(s) => write!(f, "invalid locale subtag {s:?}"),
        }
    }
}

impl std::error::Error for LocaleError {}
