//! People currently assigned to a spacecraft.
//!
//! A [`PersonRecord`] is an immutable snapshot produced by the data layer.
//! The front-end never mutates it; every refresh of the feed replaces the
//! whole collection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

// ---------------------------------------------------------------------------
// PersonName
// ---------------------------------------------------------------------------

/// The name of a person in space. Unique key of a [`PersonRecord`].
///
/// Use [`TryFrom`] or [`FromStr`] for validated construction, or
/// [`new`](Self::new) when the value is already known to be non-empty.
///
/// # Examples
///
/// ```
/// use peopleinspace_models::PersonName;
///
/// let name: PersonName = "Sunita Williams".parse().unwrap();
/// assert_eq!(name.as_str(), "Sunita Williams");
///
/// assert!("".parse::<PersonName>().is_err());
/// assert!("   ".parse::<PersonName>().is_err());
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct PersonName(String);

impl PersonName {
    /// Create a new name **without validation**.
    ///
    /// Prefer [`TryFrom`] or [`FromStr`] when the input is untrusted.
    pub fn new(name: &str) -> Self {
        Self(name.to_string())
    }

    /// Return the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(s: &str) -> Result<(), ModelError> {
        if s.trim().is_empty() {
            return Err(ModelError::InvalidPersonName {
                value: s.to_string(),
                reason: "must not be blank".into(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for PersonName {
    type Error = ModelError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::validate(s)?;
        Ok(Self(s.to_string()))
    }
}

impl TryFrom<String> for PersonName {
    type Error = ModelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::validate(&s)?;
        Ok(Self(s))
    }
}

impl FromStr for PersonName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<PersonName> for String {
    fn from(name: PersonName) -> Self {
        name.0
    }
}

impl PartialEq<str> for PersonName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

// ---------------------------------------------------------------------------
// PersonRecord
// ---------------------------------------------------------------------------

/// One person currently in space and the craft they are assigned to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PersonRecord {
    name: PersonName,
    craft: String,
}

impl PersonRecord {
    /// Build a record from an already validated name.
    pub fn new(name: PersonName, craft: impl Into<String>) -> Self {
        Self {
            name,
            craft: craft.into(),
        }
    }

    /// Validate `name` and build a record.
    ///
    /// ```
    /// use peopleinspace_models::PersonRecord;
    ///
    /// let p = PersonRecord::try_new("Alice", "Soyuz").unwrap();
    /// assert_eq!(p.craft(), "Soyuz");
    /// assert!(PersonRecord::try_new("", "ISS").is_err());
    /// ```
    pub fn try_new(name: &str, craft: &str) -> Result<Self, ModelError> {
        Ok(Self::new(name.parse()?, craft))
    }

    /// The person's name.
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    /// The craft the person is assigned to.
    pub fn craft(&self) -> &str {
        &self.craft
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
