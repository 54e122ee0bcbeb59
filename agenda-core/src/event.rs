//! Agenda event types.
//!
//! These types represent agenda entries in the form they are persisted:
//! one record per concrete occurrence, with plain calendar dates and
//! wall-clock HH:MM times carrying no zone offset.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::AgendaError;

/// Icons the event dialog offers. Advisory: records accept any tag.
pub const ICON_CHOICES: [&str; 9] = [
    "event",
    "cake",
    "work",
    "school",
    "schedule",
    "favorite",
    "restaurant",
    "sports_soccer",
    "group",
];

/// How an event series repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Repeat {
    #[default]
    None,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Repeat {
    pub fn is_repeating(self) -> bool {
        !matches!(self, Repeat::None)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Repeat::None => "none",
            Repeat::Daily => "daily",
            Repeat::Weekly => "weekly",
            Repeat::Monthly => "monthly",
            Repeat::Yearly => "yearly",
        }
    }
}

impl fmt::Display for Repeat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Repeat {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Repeat::None),
            "daily" => Ok(Repeat::Daily),
            "weekly" => Ok(Repeat::Weekly),
            "monthly" => Ok(Repeat::Monthly),
            "yearly" => Ok(Repeat::Yearly),
            other => Err(AgendaError::UnknownRepeat(other.to_string())),
        }
    }
}

/// The fields copied verbatim into every record of a series.
#[derive(Debug, Clone)]
pub struct EventTemplate {
    pub title: String,
    pub location: Option<String>,
    pub icon: String,
}

/// A single dated agenda entry.
///
/// `start_date`/`end_date` are the bounds of one concrete occurrence, not
/// of the series that produced it. Every record carries the repeat rule it
/// belongs to; all records from one expansion share a `series_id`, while
/// `id` stays unique per record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: Uuid,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub icon: String,
    #[serde(default, with = "hhmm_option", skip_serializing_if = "Option::is_none")]
    pub start_time: Option<NaiveTime>,
    #[serde(default, with = "hhmm_option", skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveTime>,
    pub repeat: Repeat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series_id: Option<Uuid>,
}

impl EventRecord {
    /// No defined start or end time.
    pub fn is_all_day(&self) -> bool {
        self.start_time.is_none() && self.end_time.is_none()
    }

    /// Case-insensitive substring match against title, location and the
    /// formatted start/end dates; a hit on any one field counts.
    pub fn matches_search(&self, query: &str) -> bool {
        let q = query.to_lowercase();
        self.title.to_lowercase().contains(&q)
            || self
                .location
                .as_deref()
                .is_some_and(|loc| loc.to_lowercase().contains(&q))
            || self.start_date.to_string().contains(&q)
            || self.end_date.to_string().contains(&q)
    }
}

impl fmt::Display for EventRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Serialize `Option<NaiveTime>` as a bare "HH:MM" string.
mod hhmm_option {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%H:%M";

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_some(&time.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) => NaiveTime::parse_from_str(&s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
