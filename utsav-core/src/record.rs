//! Dataset record types.
//!
//! These types mirror the hand-curated JSON payload one-to-one. Handlers
//! serialize them directly, so field names and optional-field omission
//! here define the wire format.

use serde::{Deserialize, Serialize};

/// A festival: a named cultural, religious or civic observance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Festival {
    pub name: String,
    /// Category label, open vocabulary (e.g. "Harvest Festival")
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    /// Occurrence date for the reference year, `YYYY-MM-DD`.
    /// Lunar-calendar festivals carry their (approximate) Gregorian date.
    pub date: String,
    /// Applicable regions; "All India" is a literal value, never expanded
    pub regions: Vec<String>,
    pub public_holiday: bool,
}

/// A recurring or region-specific cultural event.
///
/// Same shape as [`Festival`] minus the public-holiday flag; recurring
/// non-annual events carry `frequency`/`next_occurrence` instead of a
/// fixed `date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalEvent {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub regions: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_days: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_occurrence: Option<String>,
}

/// Descriptive fields about the dataset itself, returned verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    pub title: String,
    pub description: String,
    pub country: String,
    pub year: i32,
    pub version: String,
    pub last_updated: String,
    pub note: String,
}
