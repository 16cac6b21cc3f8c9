use serde::{Deserialize, Serialize, Serializer};

/// A single work-day record as returned by the entries API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Assigned by the server, absent until the entry is persisted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// ISO `YYYY-MM-DD`. Used as the lookup key for edit, search and delete.
    pub date: String,
    /// Weekday display name, derived when the entry was created.
    #[serde(default)]
    pub day: String,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    #[serde(default)]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub pay: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
}

impl Entry {
    /// Build the stored form of a create payload, as the server would echo it back.
    pub fn from_new(new_entry: &NewEntry, id: Option<i64>) -> Self {
        Self {
            id,
            date: new_entry.date.clone(),
            day: new_entry.day.clone(),
            start_time: new_entry.start.clone(),
            end_time: new_entry.end.clone(),
            total_hours: Some(round_to_cents(new_entry.total_hours)),
            pay: Some(round_to_cents(new_entry.pay)),
            note: Some(new_entry.note.clone()),
        }
    }
}

/// Body of `POST /api/entries`.
///
/// `totalHours` and `pay` go over the wire as 2-decimal strings; the backend
/// converts them with a float parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntry {
    pub date: String,
    pub day: String,
    pub start: String,
    pub end: String,
    #[serde(serialize_with = "two_decimals")]
    pub total_hours: f64,
    #[serde(serialize_with = "two_decimals")]
    pub pay: f64,
    pub note: String,
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{:.2}", value))
}
