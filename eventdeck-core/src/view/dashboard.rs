//! Page state: active tab, filters and the selected event.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::event::{Event, EventCategory, EventType};
use crate::stats::EventStats;
use crate::store::EventStore;
use crate::view::card::EventCard;
use crate::view::detail::EventDetail;
use crate::view::filters::{EventFilter, FilterBar};
use crate::view::rsvp_control::RsvpMenu;

pub const EMPTY_TITLE: &str = "No hay eventos en esta categoría";
pub const EMPTY_HINT: &str = "Prueba cambiando los filtros";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Upcoming,
    MyEvents,
    Featured,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Upcoming, Tab::MyEvents, Tab::Featured];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Upcoming => "Próximos",
            Tab::MyEvents => "Mis Eventos",
            Tab::Featured => "Destacados",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Tab::Upcoming => "📅",
            Tab::MyEvents => "🎟️",
            Tab::Featured => "⭐",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Upcoming => "upcoming",
            Tab::MyEvents => "my-events",
            Tab::Featured => "featured",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|t| t.as_str() == s.replace('_', "-"))
            .ok_or_else(|| format!("Unknown tab '{}'. Expected one of: upcoming, my-events, featured", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub tab: Tab,
    pub count: usize,
    pub active: bool,
}

/// Numbers for the header and the summary panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub this_week: usize,
    pub this_month: usize,
    pub virtual_count: usize,
    pub presential_count: usize,
    pub hybrid_count: usize,
    pub total: usize,
}

impl From<&EventStats> for Summary {
    fn from(stats: &EventStats) -> Self {
        Summary {
            this_week: stats.this_week,
            this_month: stats.this_month,
            virtual_count: stats.count_for_type(EventType::Virtual),
            presential_count: stats.count_for_type(EventType::Presential),
            hybrid_count: stats.count_for_type(EventType::Hybrid),
            total: stats.total,
        }
    }
}

/// Transient UI selection. The store holds everything else.
#[derive(Debug, Clone, Default)]
pub struct Dashboard {
    pub active_tab: Tab,
    pub filter: EventFilter,
    selected: Option<String>,
    pub rsvp_menu: RsvpMenu,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
    }

    pub fn set_type_filter(&mut self, event_type: Option<EventType>) {
        self.filter.event_type = event_type;
    }

    pub fn set_category_filter(&mut self, category: Option<EventCategory>) {
        self.filter.category = category;
    }

    /// Open the detail view for an event.
    pub fn select(&mut self, event_id: &str) {
        self.selected = Some(event_id.to_string());
        self.rsvp_menu = RsvpMenu::default();
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    fn tab_events<'a>(&self, store: &'a EventStore, now: DateTime<Utc>) -> Vec<&'a Event> {
        match self.active_tab {
            Tab::Upcoming => store.upcoming_events_at(now),
            Tab::MyEvents => store.my_events(),
            Tab::Featured => store.featured_events(),
        }
    }

    /// The active tab's collection, narrowed by the filters.
    pub fn visible_events<'a>(&self, store: &'a EventStore, now: DateTime<Utc>) -> Vec<&'a Event> {
        self.filter.apply(self.tab_events(store, now))
    }

    pub fn cards(&self, store: &EventStore, now: DateTime<Utc>) -> Vec<EventCard> {
        self.visible_events(store, now)
            .into_iter()
            .map(|e| EventCard::build(e, store.user_rsvp(&e.id), now))
            .collect()
    }

    /// Tab counts ignore the filters.
    pub fn tabs(&self, store: &EventStore, now: DateTime<Utc>) -> Vec<TabView> {
        let stats = store.stats_at(now);
        Tab::ALL
            .into_iter()
            .map(|tab| TabView {
                tab,
                count: match tab {
                    Tab::Upcoming => stats.upcoming,
                    Tab::MyEvents => store.my_events().len(),
                    Tab::Featured => store.featured_events().len(),
                },
                active: tab == self.active_tab,
            })
            .collect()
    }

    pub fn filter_bar(&self) -> FilterBar {
        FilterBar::new(&self.filter)
    }

    pub fn summary(&self, store: &EventStore, now: DateTime<Utc>) -> Summary {
        Summary::from(&store.stats_at(now))
    }

    /// Detail of the selected event, re-read from the store so it reflects
    /// RSVP changes made while it is open. `None` if nothing is selected or
    /// the id is unknown.
    pub fn detail(&self, store: &EventStore) -> Option<EventDetail> {
        let event = store.event(self.selected.as_deref()?)?;
        Some(EventDetail::build(event, store.user_rsvp(&event.id), &self.rsvp_menu))
    }
}
