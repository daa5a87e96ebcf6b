// Wire types for the conditioner fleet API (camelCase JSON).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A managed air-conditioning unit.
///
/// Server-assigned `id` and timestamps; three foreign keys into the lookup
/// collections. Descriptive fields are optional on the wire — a record with
/// a missing field is displayed with a placeholder and simply never matches
/// a search on that field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conditioner {
    pub id: i64,
    pub name: Option<String>,
    pub model: Option<String>,
    pub serial_number: Option<String>,
    pub location: Option<String>,
    pub installation_date: Option<NaiveDate>,
    pub status_id: Option<i64>,
    pub type_id: Option<i64>,
    pub manufacturer_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Create/update request body: every data field required, no id or
/// timestamps (the server assigns those). Update is a full replace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionerDraft {
    pub name: String,
    pub model: String,
    pub serial_number: String,
    pub location: String,
    pub installation_date: NaiveDate,
    pub status_id: i64,
    pub type_id: i64,
    pub manufacturer_id: i64,
}

/// Operational status reference entry (e.g. "Active", "In repair").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Status {
    pub id: i64,
    pub name: String,
}

/// Unit type reference entry (e.g. "Split", "Cassette").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConditionerType {
    pub id: i64,
    pub name: String,
}

/// Manufacturer reference entry. Carries more than a display name, so
/// consumers resolve it as a whole record rather than a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manufacturer {
    pub id: i64,
    pub name: String,
    pub country: Option<String>,
}

/// The three reference collections, fetched together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupBundle {
    pub statuses: Vec<Status>,
    pub types: Vec<ConditionerType>,
    pub manufacturers: Vec<Manufacturer>,
}
