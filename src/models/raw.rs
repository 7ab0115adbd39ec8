use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Storage form of a [`super::WorkSession`]: absolute begin/end instants,
/// the month's hourly wage and the description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkSessionRaw {
    #[serde(deserialize_with = "instant")]
    pub begin_date: DateTime<Utc>,
    #[serde(deserialize_with = "instant")]
    pub end_date: DateTime<Utc>,
    /// Absent in the oldest documents.
    #[serde(default)]
    pub hourly_wage: u32,
    #[serde(default)]
    pub description: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum InstantRepr {
    Text(DateTime<Utc>),
    EpochMillis(i64),
}

/// ISO-8601 text, or epoch milliseconds as written by older documents.
fn instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    match InstantRepr::deserialize(deserializer)? {
        InstantRepr::Text(dt) => Ok(dt),
        InstantRepr::EpochMillis(ms) => DateTime::from_timestamp_millis(ms)
            .ok_or_else(|| serde::de::Error::custom(format!("timestamp out of range: {ms}"))),
    }
}
