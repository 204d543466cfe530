//! Decoder for the structured vendor's text payload.
//!
//! The structured sensor reports its measurements as a small fixed-schema
//! text blob:
//!
//! ```text
//! {
//! "SensorType" : "BrandJAirQualitySensor",
//! "AirQualityIndex" : 65,
//! "CO2Level" : 2180,
//! "Temperature" : 21,
//! "Humidity" : 23
//! }
//! ```
//!
//! This is not a JSON parser. It scans for one of the four known labels
//! ([`BlobField`]), skips the `:` connector and reads the integer that
//! follows. Anything else in the blob is ignored.
//!
//! # Example
//!
//! ```
//! use airq_core::blob::{BlobField, extract_field};
//!
//! let blob = r#"{"SensorType":"X","AirQualityIndex":65,"CO2Level":2180,"Temperature":21,"Humidity":23}"#;
//! assert_eq!(extract_field(BlobField::Co2Level, blob).unwrap(), 2180);
//! ```

use core::fmt;

use airq_types::{ParseError, ParseResult};

/// The four fields the structured vendor reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlobField {
    /// `"AirQualityIndex"`
    AirQualityIndex,
    /// `"CO2Level"`
    Co2Level,
    /// `"Temperature"`
    Temperature,
    /// `"Humidity"`
    Humidity,
}

impl BlobField {
    /// All fields in payload order.
    pub const ALL: [BlobField; 4] = [
        BlobField::AirQualityIndex,
        BlobField::Co2Level,
        BlobField::Temperature,
        BlobField::Humidity,
    ];

    /// The label as it appears (quoted) in the payload.
    pub fn label(&self) -> &'static str {
        match self {
            BlobField::AirQualityIndex => "AirQualityIndex",
            BlobField::Co2Level => "CO2Level",
            BlobField::Temperature => "Temperature",
            BlobField::Humidity => "Humidity",
        }
    }
}

impl fmt::Display for BlobField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// All four values decoded from one payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlobValues {
    pub air_quality_index: i32,
    pub co2_level: i32,
    pub temperature: i32,
    pub humidity: i32,
}

/// Extract the integer value of `field` from `blob`.
///
/// The first occurrence of the quoted label that is followed by `:` is
/// used; whitespace around the connector is optional. The value must be a
/// base-10 integer (optionally signed) ending at `,`, `}`, whitespace or the
/// end of the blob.
///
/// # Errors
///
/// - [`ParseError::MissingField`] if the label never appears as a key.
/// - [`ParseError::InvalidValue`] if the text after the connector is not an
///   `i32`.
pub fn extract_field(field: BlobField, blob: &str) -> ParseResult<i32> {
    let label = field.label();
    let quoted = format!("\"{}\"", label);

    for (start, _) in blob.match_indices(&quoted) {
        let after_label = blob[start + quoted.len()..].trim_start();
        if let Some(value) = after_label.strip_prefix(':') {
            return parse_value(label, value.trim_start());
        }
    }

    Err(ParseError::missing_field(label))
}

fn parse_value(label: &str, text: &str) -> ParseResult<i32> {
    let end = text
        .find(|c: char| c == ',' || c == '}' || c.is_whitespace())
        .unwrap_or(text.len());
    let raw = &text[..end];
    raw.parse::<i32>()
        .map_err(|_| ParseError::invalid_value(label, raw))
}

/// Decode all four fields from `blob`.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered, in [`BlobField::ALL`] order.
pub fn parse_blob(blob: &str) -> ParseResult<BlobValues> {
    Ok(BlobValues {
        air_quality_index: extract_field(BlobField::AirQualityIndex, blob)?,
        co2_level: extract_field(BlobField::Co2Level, blob)?,
        temperature: extract_field(BlobField::Temperature, blob)?,
        humidity: extract_field(BlobField::Humidity, blob)?,
    })
}
