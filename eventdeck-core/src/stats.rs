//! Aggregate counts over the event catalog. Never persisted.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};

use crate::event::{Event, EventCategory, EventType};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventStats {
    pub total: usize,
    pub upcoming: usize,
    /// Starting within the next 7 days
    pub this_week: usize,
    /// Starting within the next 30 days
    pub this_month: usize,
    pub by_type: BTreeMap<EventType, usize>,
    pub by_category: BTreeMap<EventCategory, usize>,
}

impl EventStats {
    pub fn compute(events: &[Event], now: DateTime<Utc>) -> Self {
        let week_from_now = now + Duration::days(7);
        let month_from_now = now + Duration::days(30);

        let mut stats = EventStats {
            total: events.len(),
            ..Default::default()
        };

        for event in events {
            *stats.by_type.entry(event.event_type).or_default() += 1;
            *stats.by_category.entry(event.category).or_default() += 1;

            if event.is_upcoming(now) {
                stats.upcoming += 1;
                if event.start_date <= week_from_now {
                    stats.this_week += 1;
                }
                if event.start_date <= month_from_now {
                    stats.this_month += 1;
                }
            }
        }

        stats
    }

    pub fn count_for_type(&self, event_type: EventType) -> usize {
        self.by_type.get(&event_type).copied().unwrap_or(0)
    }

    pub fn count_for_category(&self, category: EventCategory) -> usize {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}
