//! Compact event summary for the dashboard grid.

use chrono::{DateTime, Utc};

use crate::catalog::{CategoryInfo, TypeInfo};
use crate::event::{Event, EventType};
use crate::rsvp::{RsvpStatus, UserRsvp};
use crate::time::{days_until, format_short_date, format_time, relative_badge};

/// Cards show at most this many speaker avatars.
const MAX_AVATARS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpBadge {
    Going,
    Interested,
}

impl RsvpBadge {
    fn for_status(status: RsvpStatus) -> Option<Self> {
        match status {
            RsvpStatus::Going => Some(RsvpBadge::Going),
            RsvpStatus::Interested => Some(RsvpBadge::Interested),
            RsvpStatus::NotGoing | RsvpStatus::None => None,
        }
    }

    pub fn text(&self) -> &'static str {
        match self {
            RsvpBadge::Going => "✅ Inscrito",
            RsvpBadge::Interested => "⭐ Interesado",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventCard {
    pub id: String,
    pub title: String,
    pub cover_emoji: String,
    pub type_info: TypeInfo,
    pub category_info: CategoryInfo,
    pub is_featured: bool,
    pub is_recurring: bool,
    pub date: String,
    pub time: String,
    /// "Evento virtual" for virtual events, otherwise the venue
    pub place: String,
    pub is_virtual: bool,
    pub speaker_avatars: Vec<String>,
    pub attendees: u32,
    pub rsvp_badge: Option<RsvpBadge>,
    /// "Mañana" / "En N días", only within a week
    pub days_badge: Option<String>,
}

impl EventCard {
    pub fn build(event: &Event, rsvp: Option<&UserRsvp>, now: DateTime<Utc>) -> Self {
        let is_virtual = event.event_type == EventType::Virtual;
        let place = if is_virtual {
            "Evento virtual".to_string()
        } else {
            event.location.clone().unwrap_or_default()
        };

        EventCard {
            id: event.id.clone(),
            title: event.title.clone(),
            cover_emoji: event.cover_emoji.clone(),
            type_info: event.event_type.info(),
            category_info: event.category.info(),
            is_featured: event.is_featured,
            is_recurring: event.is_recurring,
            date: format_short_date(event.start_date, &event.timezone),
            time: format_time(event.start_date, &event.timezone),
            place,
            is_virtual,
            speaker_avatars: event
                .speakers
                .iter()
                .take(MAX_AVATARS)
                .map(|s| s.avatar_emoji.clone())
                .collect(),
            attendees: event.current_attendees,
            rsvp_badge: rsvp.and_then(|r| RsvpBadge::for_status(r.status)),
            days_badge: relative_badge(days_until(event.start_date, now)),
        }
    }
}
