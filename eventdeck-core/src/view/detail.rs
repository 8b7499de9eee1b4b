//! Full event view.

use crate::catalog::{CategoryInfo, TypeInfo};
use crate::event::{Event, EventType, Speaker};
use crate::rsvp::UserRsvp;
use crate::time::{format_duration, format_full_date, format_time};
use crate::view::rsvp_control::{RsvpControl, RsvpMenu};

/// Occupancy at or above this share of capacity counts as almost full.
const ALMOST_FULL_RATIO: f64 = 0.8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapacityTier {
    Full,
    AlmostFull,
    Available,
}

impl CapacityTier {
    pub fn for_counts(current: u32, max: u32) -> Self {
        if current >= max {
            CapacityTier::Full
        } else if f64::from(current) >= f64::from(max) * ALMOST_FULL_RATIO {
            CapacityTier::AlmostFull
        } else {
            CapacityTier::Available
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CapacityBar {
    pub max: u32,
    /// 0..=100
    pub percent: f64,
    pub remaining: u32,
    pub tier: CapacityTier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Capacity {
    pub current: u32,
    /// Only when the event has a maximum
    pub bar: Option<CapacityBar>,
}

impl Capacity {
    pub fn for_event(event: &Event) -> Self {
        let current = event.current_attendees;
        let bar = event.max_attendees.map(|max| {
            let percent = if max == 0 {
                100.0
            } else {
                (f64::from(current) / f64::from(max) * 100.0).min(100.0)
            };
            CapacityBar {
                max,
                percent,
                remaining: max.saturating_sub(current),
                tier: CapacityTier::for_counts(current, max),
            }
        });

        Capacity { current, bar }
    }

    /// "de 30 lugares" or "asistentes"
    pub fn caption(&self) -> String {
        match &self.bar {
            Some(bar) => format!("de {} lugares", bar.max),
            None => "asistentes".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Venue {
    Virtual {
        join_url: Option<String>,
    },
    Physical {
        location: Option<String>,
        /// A hybrid or presential event that also has a join link
        also_virtual: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventDetail {
    pub id: String,
    pub title: String,
    pub description: String,
    pub cover_emoji: String,
    pub type_info: TypeInfo,
    pub category_info: CategoryInfo,
    pub is_featured: bool,
    /// Recurrence pattern, when the event repeats
    pub recurrence: Option<String>,
    pub full_date: String,
    pub start_time: String,
    pub end_time: String,
    pub duration: String,
    pub timezone: String,
    pub venue: Venue,
    pub speakers: Vec<Speaker>,
    pub tags: Vec<String>,
    pub capacity: Capacity,
    pub rsvp: RsvpControl,
}

impl EventDetail {
    pub fn build(event: &Event, rsvp: Option<&UserRsvp>, menu: &RsvpMenu) -> Self {
        let venue = if event.event_type == EventType::Virtual {
            Venue::Virtual {
                join_url: event.virtual_url.clone(),
            }
        } else {
            Venue::Physical {
                location: event.location.clone(),
                also_virtual: event.virtual_url.is_some(),
            }
        };

        let recurrence = event
            .is_recurring
            .then(|| event.recurring_pattern.clone().unwrap_or_default());

        EventDetail {
            id: event.id.clone(),
            title: event.title.clone(),
            description: event.description.clone(),
            cover_emoji: event.cover_emoji.clone(),
            type_info: event.event_type.info(),
            category_info: event.category.info(),
            is_featured: event.is_featured,
            recurrence,
            full_date: format_full_date(event.start_date, &event.timezone),
            start_time: format_time(event.start_date, &event.timezone),
            end_time: format_time(event.end_date, &event.timezone),
            duration: format_duration(event.start_date, event.end_date),
            timezone: event.timezone.clone(),
            venue,
            speakers: event.speakers.clone(),
            tags: event.tags.clone(),
            capacity: Capacity::for_event(event),
            rsvp: RsvpControl::build(event, rsvp, menu),
        }
    }
}
