use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[cfg(feature = "entity-conversions")]
mod conv;

#[cfg(feature = "entity-conversions")]
pub use conv::*;

/// Events keyed by their id, as written by the dataset generator.
pub type EventsDataset = BTreeMap<String, EventData>;

/// Start date, start time, end date and end time of an occurrence.
pub type DatetimeTuple = (String, Option<String>, Option<String>, Option<String>);

#[rustfmt::skip]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventData {
    #[serde(default)]
    pub event_url              : Option<String>,
    #[serde(default)]
    pub title                  : String,
    #[serde(default)]
    pub perex                  : Option<String>,
    #[serde(default)]
    pub location               : Option<String>,
    /// Published coordinate as `"lat,lng"`.
    #[serde(default)]
    pub gps                    : Option<String>,
    #[serde(default)]
    pub organizer              : Option<String>,
    #[serde(default)]
    pub types                  : Vec<String>,
    #[serde(default)]
    pub keywords               : Vec<String>,
    #[serde(default)]
    pub datetimes              : Vec<DatetimeTuple>,
    #[serde(default)]
    pub online                 : bool,
    #[serde(default)]
    pub has_default            : bool,
    /// Coordinate derived from the location as `"lat,lng"`.
    #[serde(default)]
    pub geocoded_gps           : Option<String>,
    #[serde(default)]
    pub default_location       : Option<String>,
    #[serde(default)]
    pub municipality           : Option<String>,
    #[serde(default)]
    pub district               : Option<String>,
    #[serde(default)]
    pub calendar_url           : Option<String>,
    #[serde(default)]
    pub calendar_downloaded_at : Option<String>,
}

/// An entry of the event type hierarchy file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDefinition {
    #[serde(rename = "type")]
    pub event_type: String,
    #[serde(default)]
    pub supertypes: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// A row of the result table.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    pub id                   : String,
    pub table_title          : String,
    pub table_location       : Option<String>,
    pub table_start_datetime : String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table_end_datetime   : Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat                  : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lng                  : Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km          : Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccurrenceLabel {
    pub start: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id          : String,
    pub title       : String,
    pub lat         : f64,
    pub lng         : f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance_km : Option<f64>,
    pub occurrences : Vec<OccurrenceLabel>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub results: Vec<EventRow>,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub types: Vec<String>,
    pub keywords: Vec<String>,
}
