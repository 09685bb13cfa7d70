//! Validated email address value type

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::mail::error::AddressError;

/// Domain suffixes accepted by [`EmailAddress::parse`].
pub const ALLOWED_SUFFIXES: [&str; 3] = [".com", ".ru", ".net"];

/// A validated, normalized email address.
///
/// Construction goes through [`EmailAddress::parse`], which trims and
/// lowercases the input and rejects anything empty, missing an `@`, or
/// ending in a suffix outside [`ALLOWED_SUFFIXES`]. Once built, the
/// address is immutable.
#[derive(Debug, Clone)]
pub struct EmailAddress {
    /// The raw input, kept for diagnostics
    original: String,
    /// Lowercased, whitespace-trimmed form. All comparisons and
    /// derived views use this.
    normalized: String,
}

impl EmailAddress {
    /// Parse and validate a raw address string.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use outbox::EmailAddress;
    ///
    /// let addr = EmailAddress::parse("  Alice@Example.COM ").unwrap();
    /// assert_eq!(addr.as_str(), "alice@example.com");
    ///
    /// assert!(EmailAddress::parse("alice@example.org").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, AddressError> {
        let normalized = Self::normalize(raw);
        Self::validate(&normalized)?;

        Ok(Self {
            original: raw.to_string(),
            normalized,
        })
    }

    fn normalize(raw: &str) -> String {
        raw.trim().to_lowercase()
    }

    fn validate(normalized: &str) -> Result<(), AddressError> {
        if normalized.is_empty() {
            return Err(AddressError::Empty);
        }

        if !normalized.contains('@') {
            return Err(AddressError::MissingAtSymbol(normalized.to_string()));
        }

        if !ALLOWED_SUFFIXES
            .iter()
            .any(|suffix| normalized.ends_with(suffix))
        {
            return Err(AddressError::UnsupportedDomain(normalized.to_string()));
        }

        Ok(())
    }

    /// The normalized address
    pub fn as_str(&self) -> &str {
        &self.normalized
    }

    /// The raw input the address was parsed from
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The part before the first `@`
    pub fn login(&self) -> &str {
        match self.normalized.split_once('@') {
            Some((login, _)) => login,
            None => "",
        }
    }

    /// The part after the first `@`
    pub fn domain(&self) -> &str {
        match self.normalized.split_once('@') {
            Some((_, domain)) => domain,
            None => "",
        }
    }

    /// Display form hiding all but the first two characters of the
    /// login, e.g. `ab***@example.com`. Logins shorter than two
    /// characters are kept whole before the `***`.
    pub fn masked(&self) -> String {
        // Unreachable after validation, but don't panic on it.
        let Some((login, domain)) = self.normalized.split_once('@') else {
            return self.normalized.clone();
        };

        let visible: String = login.chars().take(2).collect();
        format!("{visible}***@{domain}")
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.normalized)
    }
}

impl FromStr for EmailAddress {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Addresses compare by normalized form; the original spelling is
/// ignored.
impl PartialEq for EmailAddress {
    fn eq(&self, other: &Self) -> bool {
        self.normalized == other.normalized
    }
}

impl Eq for EmailAddress {}

impl Hash for EmailAddress {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.normalized.hash(state);
    }
}

/// A raw string operand is normalized before comparing.
impl PartialEq<str> for EmailAddress {
    fn eq(&self, other: &str) -> bool {
        self.normalized == Self::normalize(other)
    }
}

impl PartialEq<&str> for EmailAddress {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
