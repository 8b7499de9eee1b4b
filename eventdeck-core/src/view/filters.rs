//! Type and category filters.

use crate::catalog::AccentColor;
use crate::event::{Event, EventCategory, EventType};

/// Two independent single-select filters; `None` shows everything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub event_type: Option<EventType>,
    pub category: Option<EventCategory>,
}

impl EventFilter {
    pub fn matches(&self, event: &Event) -> bool {
        self.event_type.is_none_or(|t| event.event_type == t)
            && self.category.is_none_or(|c| event.category == c)
    }

    pub fn apply<'a>(&self, events: Vec<&'a Event>) -> Vec<&'a Event> {
        events.into_iter().filter(|e| self.matches(e)).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.event_type.is_none() && self.category.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub label: &'static str,
    pub emoji: Option<&'static str>,
    pub selected: bool,
    /// Highlight used when selected
    pub colors: (AccentColor, AccentColor),
}

const ALL_COLORS: (AccentColor, AccentColor) = (AccentColor::Cyan, AccentColor::Blue);
const CATEGORY_COLORS: (AccentColor, AccentColor) = (AccentColor::Magenta, AccentColor::Red);

/// The filter bar: an "all" option followed by one option per value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterBar {
    pub types: Vec<FilterOption>,
    pub categories: Vec<FilterOption>,
}

impl FilterBar {
    pub fn new(filter: &EventFilter) -> Self {
        let mut types = vec![FilterOption {
            label: "Todos",
            emoji: None,
            selected: filter.event_type.is_none(),
            colors: ALL_COLORS,
        }];
        types.extend(EventType::ALL.iter().map(|t| {
            let info = t.info();
            FilterOption {
                label: info.label,
                emoji: Some(info.emoji),
                selected: filter.event_type == Some(*t),
                colors: info.colors,
            }
        }));

        let mut categories = vec![FilterOption {
            label: "Todas",
            emoji: None,
            selected: filter.category.is_none(),
            colors: ALL_COLORS,
        }];
        categories.extend(EventCategory::ALL.iter().map(|c| {
            let info = c.info();
            FilterOption {
                label: info.label,
                emoji: Some(info.emoji),
                selected: filter.category == Some(*c),
                colors: CATEGORY_COLORS,
            }
        }));

        FilterBar { types, categories }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_events;
    use chrono::{TimeZone, Utc};

    #[test]
    fn default_filter_shows_all() {
        let events = demo_events(Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap());
        let filter = EventFilter::default();
        assert!(filter.is_empty());
        assert_eq!(filter.apply(events.iter().collect()).len(), events.len());
    }

    #[test]
    fn filters_combine() {
        let events = demo_events(Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap());
        let filter = EventFilter {
            event_type: Some(EventType::Virtual),
            category: Some(EventCategory::Launch),
        };
        let ids: Vec<_> = filter.apply(events.iter().collect()).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["evt-6"]);
    }

    #[test]
    fn bar_marks_exactly_one_selected_per_group() {
        let bar = FilterBar::new(&EventFilter {
            event_type: Some(EventType::Hybrid),
            category: None,
        });
        assert_eq!(bar.types.len(), 4);
        assert_eq!(bar.categories.len(), 9);
        assert_eq!(bar.types.iter().filter(|o| o.selected).count(), 1);
        assert!(bar.types[3].selected);
        assert!(bar.categories[0].selected);
        assert_eq!(bar.categories[0].label, "Todas");
    }
}
