use chrono::NaiveDateTime;
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One person record as fetched from the API. Wire names are camelCase.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(deserialize_with = "deserialize_dob")]
    pub dob: NaiveDateTime,
    // null or absent colour counts as its own "" key downstream
    #[serde(default, deserialize_with = "null_to_empty")]
    pub favourite_colour: String,
}

/// Full fetched payload: header metadata plus the record sequence.
/// The header fields are opaque to the transform; only `data` is read.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub details: String,
    #[serde(default)]
    pub request_type: String,
    #[serde(default)]
    pub uri_to_submit: String,
    #[serde(default)]
    pub object_layout: String,
    #[serde(default)]
    pub data: Vec<PersonRecord>,
}

/// Colour → count entries ordered by descending count, ties in first-seen
/// order. Serialized as a JSON object in that order (a plain map type would
/// not keep it).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColourRanking {
    entries: Vec<(String, u32)>,
}

impl ColourRanking {
    pub fn new(entries: Vec<(String, u32)>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[(String, u32)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_count(&self) -> u32 {
        self.entries.iter().map(|(_, n)| n).sum()
    }
}

impl Serialize for ColourRanking {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (colour, count) in &self.entries {
            map.serialize_entry(colour, count)?;
        }
        map.end()
    }
}

/// The derived result submitted back to the server.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    #[serde(rename = "AgePlus20")]
    pub age_plus_20: Vec<i32>,
    #[serde(rename = "TopColours")]
    pub top_colours: ColourRanking,
}

// dob arrives as an ISO-8601 date-time string; some payloads carry a UTC
// offset ("Z"), some are bare naive timestamps. Accept both.
fn deserialize_dob<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.naive_utc());
    }
    raw.parse::<NaiveDateTime>().map_err(serde::de::Error::custom)
}

fn null_to_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
