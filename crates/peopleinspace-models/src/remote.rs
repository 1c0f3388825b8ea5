//! Wire formats of the open-notify endpoints.
//!
//! These types mirror the JSON bodies exactly and are converted into
//! [`PersonRecord`] / [`PositionRecord`] before anything else sees them.
//!
//! ```text
//! GET /astros.json
//! {"message": "success", "number": 2,
//!  "people": [{"name": "Alice", "craft": "Soyuz"}, {"name": "Bob", "craft": "Dragon"}]}
//!
//! GET /iss-now.json
//! {"message": "success", "timestamp": 1700000000,
//!  "iss_position": {"latitude": "1.0", "longitude": "2.0"}}
//! ```

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::person::{PersonName, PersonRecord};
use crate::position::{format_coordinate, parse_coordinate, PositionRecord};

/// Value of the `message` field on a successful response.
pub const SUCCESS_MESSAGE: &str = "success";

// ---------------------------------------------------------------------------
// /astros.json
// ---------------------------------------------------------------------------

/// One entry of the `people` array, as sent by the API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    /// Person name. May be empty on the wire.
    pub name: String,
    /// Craft name.
    pub craft: String,
}

/// Body of `GET /astros.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AstrosResponse {
    /// `"success"` when the request succeeded.
    pub message: String,
    /// Head count reported by the API.
    #[serde(default)]
    pub number: u32,
    /// Assignments in feed order.
    #[serde(default)]
    pub people: Vec<Assignment>,
}

impl AstrosResponse {
    /// Whether the API reported success.
    pub fn is_success(&self) -> bool {
        self.message == SUCCESS_MESSAGE
    }

    /// Convert the assignments into records, keeping feed order.
    ///
    /// Entries with a blank name are dropped. When a name repeats, the
    /// first occurrence wins.
    pub fn into_people(self) -> Vec<PersonRecord> {
        let mut seen = HashSet::new();
        self.people
            .into_iter()
            .filter_map(|a| {
                let name = PersonName::try_from(a.name).ok()?;
                seen.insert(name.clone())
                    .then(|| PersonRecord::new(name, a.craft))
            })
            .collect()
    }
}

// ---------------------------------------------------------------------------
// /iss-now.json
// ---------------------------------------------------------------------------

/// The `iss_position` object. Coordinates travel as decimal strings.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct IssPosition {
    /// Latitude in decimal degrees.
    #[serde(serialize_with = "coordinate_out", deserialize_with = "coordinate_in")]
    pub latitude: f64,
    /// Longitude in decimal degrees.
    #[serde(serialize_with = "coordinate_out", deserialize_with = "coordinate_in")]
    pub longitude: f64,
}

/// Body of `GET /iss-now.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct IssNowResponse {
    /// `"success"` when the request succeeded.
    pub message: String,
    /// Time of the fix.
    #[serde(with = "chrono::serde::ts_seconds")]
    pub timestamp: DateTime<Utc>,
    /// The fix itself.
    pub iss_position: IssPosition,
}

impl IssNowResponse {
    /// Whether the API reported success.
    pub fn is_success(&self) -> bool {
        self.message == SUCCESS_MESSAGE
    }

    /// The reported position.
    pub fn position(&self) -> PositionRecord {
        PositionRecord::new(self.iss_position.latitude, self.iss_position.longitude)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CoordinateRepr {
    Text(String),
    Number(f64),
}

fn coordinate_in<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match CoordinateRepr::deserialize(deserializer)? {
        CoordinateRepr::Text(s) => parse_coordinate(&s).map_err(serde::de::Error::custom),
        CoordinateRepr::Number(n) if n.is_finite() => Ok(n),
        CoordinateRepr::Number(n) => Err(serde::de::Error::custom(format!(
            "coordinate must be finite, got {n}"
        ))),
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde passes fields by reference
fn coordinate_out<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_coordinate(*value))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
