//! Station position.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A geodetic coordinate pair giving the station's current position.
///
/// A fresh value replaces the previous one on every update; no history is
/// kept. The default is `(0.0, 0.0)`, which is what subscribers see before
/// the first update arrives.
///
/// # Examples
///
/// ```
/// use peopleinspace_models::PositionRecord;
///
/// let p = PositionRecord::new(1.0, 2.0);
/// assert_eq!(p.to_string(), "(1.0, 2.0)");
/// assert_eq!(PositionRecord::default().to_string(), "(0.0, 0.0)");
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionRecord {
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

impl PositionRecord {
    /// Create a position from decimal degrees.
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Parse a position from the decimal strings the remote API sends.
    pub fn parse(latitude: &str, longitude: &str) -> Result<Self, ModelError> {
        Ok(Self::new(
            parse_coordinate(latitude)?,
            parse_coordinate(longitude)?,
        ))
    }
}

impl fmt::Display for PositionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {})",
            format_coordinate(self.latitude),
            format_coordinate(self.longitude)
        )
    }
}

/// Format a coordinate the way a JVM `Double` prints.
///
/// `1.0` prints as `"1.0"`, `-12.5` as `"-12.5"`, `51.6416` as `"51.6416"`.
/// Magnitudes below `1e-3` or from `1e7` up use computerized scientific
/// notation: `0.0005` prints as `"5.0E-4"`, `1e7` as `"1.0E7"`.
pub fn format_coordinate(value: f64) -> String {
    if value.is_nan() {
        return "NaN".into();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.into();
    }
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e7).contains(&magnitude) {
        let text = format!("{value:e}");
        let (mantissa, exponent) = text.split_once('e').unwrap_or((text.as_str(), "0"));
        return format!("{}E{exponent}", with_fraction_digit(mantissa));
    }
    with_fraction_digit(&value.to_string())
}

fn with_fraction_digit(text: &str) -> String {
    if text.contains('.') {
        text.to_string()
    } else {
        format!("{text}.0")
    }
}

/// Parse a decimal coordinate, rejecting anything that is not finite.
pub fn parse_coordinate(value: &str) -> Result<f64, ModelError> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| ModelError::InvalidCoordinate {
            value: value.to_string(),
            reason: "not a decimal number".into(),
        })?;
    if !parsed.is_finite() {
        return Err(ModelError::InvalidCoordinate {
            value: value.to_string(),
            reason: "must be finite".into(),
        });
    }
    Ok(parsed)
}
