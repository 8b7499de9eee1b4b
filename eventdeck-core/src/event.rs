//! Community event types.
//!
//! An `Event` owns its speakers. Attendance is tracked as a plain counter
//! that only the store's RSVP bookkeeping changes.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// How attendees join an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    Virtual,
    Presential,
    Hybrid,
}

impl EventType {
    pub const ALL: [EventType; 3] = [EventType::Virtual, EventType::Presential, EventType::Hybrid];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Virtual => "virtual",
            EventType::Presential => "presential",
            EventType::Hybrid => "hybrid",
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
            .ok_or_else(|| format!("Unknown event type '{}'. Expected one of: virtual, presential, hybrid", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Webinar,
    Workshop,
    Meetup,
    Hackathon,
    Conference,
    Launch,
    Training,
    OfficeHours,
}

impl EventCategory {
    pub const ALL: [EventCategory; 8] = [
        EventCategory::Webinar,
        EventCategory::Workshop,
        EventCategory::Meetup,
        EventCategory::Hackathon,
        EventCategory::Conference,
        EventCategory::Launch,
        EventCategory::Training,
        EventCategory::OfficeHours,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Webinar => "webinar",
            EventCategory::Workshop => "workshop",
            EventCategory::Meetup => "meetup",
            EventCategory::Hackathon => "hackathon",
            EventCategory::Conference => "conference",
            EventCategory::Launch => "launch",
            EventCategory::Training => "training",
            EventCategory::OfficeHours => "office_hours",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept the CLI spelling "office-hours" too
        let normalized = s.replace('-', "_");
        EventCategory::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| {
                let expected: Vec<_> = EventCategory::ALL.iter().map(|c| c.as_str()).collect();
                format!("Unknown category '{}'. Expected one of: {}", s, expected.join(", "))
            })
    }
}

/// A speaker, embedded in exactly one event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Speaker {
    pub id: String,
    pub name: String,
    pub role: String,
    pub avatar_emoji: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// A community event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub category: EventCategory,
    pub cover_emoji: String,

    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// IANA timezone label, e.g. "America/Santiago"
    pub timezone: String,

    /// Physical venue (presential and hybrid events)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Join link (virtual and hybrid events)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    pub current_attendees: u32,

    #[serde(default)]
    pub speakers: Vec<Speaker>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub is_recurring: bool,
    /// e.g. "weekly", "monthly"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_pattern: Option<String>,

    pub created_at: DateTime<Utc>,
}

impl Event {
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.start_date > now
    }

    /// True when a capacity is set and has been reached.
    pub fn is_full(&self) -> bool {
        self.max_attendees
            .is_some_and(|max| self.current_attendees >= max)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Everything needed to create an event; the store fills in id,
/// attendee count and creation time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub event_type: EventType,
    pub category: EventCategory,
    pub cover_emoji: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub timezone: String,
    pub location: Option<String>,
    pub virtual_url: Option<String>,
    pub max_attendees: Option<u32>,
    pub speakers: Vec<Speaker>,
    pub tags: Vec<String>,
    pub is_featured: bool,
    pub is_recurring: bool,
    pub recurring_pattern: Option<String>,
}

impl NewEvent {
    pub(crate) fn into_event(self, id: String, created_at: DateTime<Utc>) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            event_type: self.event_type,
            category: self.category,
            cover_emoji: self.cover_emoji,
            start_date: self.start_date,
            end_date: self.end_date,
            timezone: self.timezone,
            location: self.location,
            virtual_url: self.virtual_url,
            max_attendees: self.max_attendees,
            current_attendees: 0,
            speakers: self.speakers,
            tags: self.tags,
            is_featured: self.is_featured,
            is_recurring: self.is_recurring,
            recurring_pattern: self.recurring_pattern,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_parses_cli_spelling() {
        assert_eq!("office-hours".parse::<EventCategory>(), Ok(EventCategory::OfficeHours));
        assert_eq!("office_hours".parse::<EventCategory>(), Ok(EventCategory::OfficeHours));
        assert!("party".parse::<EventCategory>().is_err());
    }

    #[test]
    fn event_type_serializes_snake_case() {
        let json = serde_json::to_string(&EventType::Presential).unwrap();
        assert_eq!(json, "\"presential\"");
        let json = serde_json::to_string(&EventCategory::OfficeHours).unwrap();
        assert_eq!(json, "\"office_hours\"");
    }
}
