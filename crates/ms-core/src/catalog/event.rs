//! Event records that make up the catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for an event
pub type EventId = String;

/// The kind of gathering an event is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Conference,
    Symposium,
    Workshop,
    Webinar,
}

impl EventType {
    /// All event types in display order
    pub const ALL: [EventType; 4] = [
        EventType::Conference,
        EventType::Symposium,
        EventType::Workshop,
        EventType::Webinar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Conference => "Conference",
            EventType::Symposium => "Symposium",
            EventType::Workshop => "Workshop",
            EventType::Webinar => "Webinar",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown event type '{}'", s))
    }
}

/// A speaker appearing at an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub name: String,
    pub role: String,
    /// Portrait image reference
    pub image: String,
}

/// A programme slot within an event
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Display time, e.g. "09:00"
    pub time: String,
    pub title: String,
    pub room: String,
}

/// A medical event listed in the directory
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier
    pub id: EventId,

    pub title: String,

    #[serde(rename = "type")]
    pub event_type: EventType,

    /// Medical specialty label, e.g. "Neurology"
    pub category: String,

    /// Display date, kept verbatim
    pub date: String,

    pub location: String,

    /// Expected number of attendees
    #[serde(rename = "attendees")]
    pub attendee_count: u32,

    /// Display price, kept verbatim
    pub price: String,

    /// Cover image reference
    pub image: String,

    pub description: String,

    pub contact_email: String,

    pub contact_phone: String,

    #[serde(default)]
    pub speakers: Vec<Speaker>,

    /// Scientific committee member names
    #[serde(default)]
    pub committee: Vec<String>,

    #[serde(default)]
    pub sessions: Vec<Session>,

    /// Past events are shown under the archived tab only
    #[serde(default)]
    pub is_archived: bool,
}

impl Event {
    /// Whether the lowercase `needle` occurs in any searchable field
    ///
    /// The caller lowercases once per query; fields are lowercased here.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        [&self.title, &self.category, &self.location, &self.description]
            .iter()
            .any(|field| field.to_lowercase().contains(needle_lower))
    }
}
