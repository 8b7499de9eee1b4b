//! The event store: catalog + RSVP records, mutations and derived queries.
//!
//! The store is constructed explicitly and handed around by reference.
//! Storage and the notification bus are optional, injected capabilities.
//! Every mutation writes the full snapshot; a failed write or publish is
//! logged and does not undo the mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::EventDeckResult;
use crate::event::{Event, EventCategory, EventType, NewEvent};
use crate::notify::{BusMessage, RsvpChanged, RsvpNotifier};
use crate::rsvp::{RsvpStatus, UserRsvp, attendee_delta};
use crate::stats::EventStats;
use crate::storage::{Snapshot, SnapshotStorage, StoreState};

/// What happens when someone tries to join a full event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CapacityPolicy {
    /// Refuse new "going" RSVPs once `max_attendees` is reached.
    #[default]
    Enforce,
    /// Only keep the count from going below zero.
    FloorOnly,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsvpOutcome {
    Updated {
        previous: Option<RsvpStatus>,
        status: RsvpStatus,
        /// Attendee count after the change; `None` for unknown events.
        attendees: Option<u32>,
    },
    /// Nothing changed: the event is at capacity.
    EventFull { event_id: String },
}

pub struct EventStore {
    state: StoreState,
    storage: Option<Box<dyn SnapshotStorage>>,
    notifier: Option<Box<dyn RsvpNotifier>>,
    capacity_policy: CapacityPolicy,
}

impl EventStore {
    pub fn new(state: StoreState) -> Self {
        EventStore {
            state,
            storage: None,
            notifier: None,
            capacity_policy: CapacityPolicy::default(),
        }
    }

    /// Load the persisted snapshot, or start from `seed` when there is none.
    pub fn open(
        storage: Box<dyn SnapshotStorage>,
        seed: impl FnOnce() -> StoreState,
    ) -> EventDeckResult<Self> {
        let state = match storage.load()? {
            Some(snapshot) => snapshot.state,
            None => {
                debug!("No saved snapshot, starting from seed data");
                seed()
            }
        };

        Ok(EventStore::new(state).with_storage(storage))
    }

    pub fn with_storage(mut self, storage: Box<dyn SnapshotStorage>) -> Self {
        self.storage = Some(storage);
        self
    }

    pub fn with_notifier(mut self, notifier: Box<dyn RsvpNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    pub fn with_capacity_policy(mut self, policy: CapacityPolicy) -> Self {
        self.capacity_policy = policy;
        self
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create an event from `new_event` and put it first in the catalog.
    ///
    /// Dates and capacity are taken as given.
    pub fn add_event(&mut self, new_event: NewEvent) -> &Event {
        let id = format!("evt-{}", uuid::Uuid::new_v4().simple());
        let event = new_event.into_event(id, Utc::now());
        debug!(event_id = %event.id, title = %event.title, "Adding event");

        self.state.events.insert(0, event);
        self.persist();
        &self.state.events[0]
    }

    /// Set the user's RSVP for an event and adjust its attendee count.
    ///
    /// An RSVP for an unknown event id is still recorded, there is just no
    /// count to adjust and nothing is published.
    pub fn update_rsvp(&mut self, event_id: &str, status: RsvpStatus, reminder: bool) -> RsvpOutcome {
        let previous = self.user_rsvp(event_id).map(|r| r.status);
        let delta = attendee_delta(previous, status);

        let policy = self.capacity_policy;
        let event = self.state.events.iter_mut().find(|e| e.id == event_id);

        if delta > 0 && policy == CapacityPolicy::Enforce && event.as_ref().is_some_and(|e| e.is_full()) {
            debug!(event_id, "Event is full, RSVP refused");
            return RsvpOutcome::EventFull {
                event_id: event_id.to_string(),
            };
        }

        let attendees = event.map(|e| {
            e.current_attendees = apply_delta(e.current_attendees, delta);
            e.current_attendees
        });

        match self.state.user_rsvps.iter_mut().find(|r| r.event_id == event_id) {
            Some(rsvp) => {
                rsvp.status = status;
                rsvp.reminder = reminder;
            }
            None => self.state.user_rsvps.push(UserRsvp {
                event_id: event_id.to_string(),
                status,
                registered_at: Utc::now(),
                reminder,
            }),
        }

        debug!(event_id, %status, reminder, delta, "RSVP updated");
        self.persist();
        self.notify_rsvp(event_id, status, reminder);

        RsvpOutcome::Updated {
            previous,
            status,
            attendees,
        }
    }

    /// Flip the reminder flag. Returns the new value, or `None` (and changes
    /// nothing) when there is no RSVP for the event.
    pub fn toggle_reminder(&mut self, event_id: &str) -> Option<bool> {
        let rsvp = self.state.user_rsvps.iter_mut().find(|r| r.event_id == event_id)?;
        rsvp.reminder = !rsvp.reminder;
        let reminder = rsvp.reminder;

        debug!(event_id, reminder, "Reminder toggled");
        self.persist();
        Some(reminder)
    }

    /// Replace the whole state (e.g. back to the demo seed).
    pub fn reset(&mut self, state: StoreState) {
        self.state = state;
        self.persist();
    }

    fn persist(&self) {
        let Some(storage) = &self.storage else {
            return;
        };

        if let Err(e) = storage.save(&self.snapshot()) {
            warn!(error = %e, "Could not persist event snapshot");
        }
    }

    fn notify_rsvp(&self, event_id: &str, status: RsvpStatus, reminder: bool) {
        let Some(notifier) = &self.notifier else {
            return;
        };
        let Some(event) = self.event(event_id) else {
            return;
        };
        if !notifier.is_ready() {
            debug!("Notification bus not ready, skipping RSVP notification");
            return;
        }

        let message = BusMessage::rsvp_changed(RsvpChanged {
            event_id: event.id.clone(),
            event_title: event.title.clone(),
            status,
            reminder,
            start_date: event.start_date.to_rfc3339(),
        });

        if let Err(e) = notifier.publish(&message) {
            warn!(error = %e, event_id, "Could not publish RSVP notification");
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn events(&self) -> &[Event] {
        &self.state.events
    }

    pub fn rsvps(&self) -> &[UserRsvp] {
        &self.state.user_rsvps
    }

    pub fn event(&self, event_id: &str) -> Option<&Event> {
        self.state.events.iter().find(|e| e.id == event_id)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.state.clone())
    }

    pub fn upcoming_events(&self) -> Vec<&Event> {
        self.upcoming_events_at(Utc::now())
    }

    /// Events starting after `now`, soonest first.
    pub fn upcoming_events_at(&self, now: DateTime<Utc>) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.state.events.iter().filter(|e| e.is_upcoming(now)).collect();
        events.sort_by_key(|e| e.start_date);
        events
    }

    pub fn events_by_type(&self, event_type: EventType) -> Vec<&Event> {
        self.state.events.iter().filter(|e| e.event_type == event_type).collect()
    }

    pub fn events_by_category(&self, category: EventCategory) -> Vec<&Event> {
        self.state.events.iter().filter(|e| e.category == category).collect()
    }

    pub fn featured_events(&self) -> Vec<&Event> {
        self.state.events.iter().filter(|e| e.is_featured).collect()
    }

    pub fn user_rsvp(&self, event_id: &str) -> Option<&UserRsvp> {
        self.state.user_rsvps.iter().find(|r| r.event_id == event_id)
    }

    /// Events the user marked "going", in catalog order.
    pub fn my_events(&self) -> Vec<&Event> {
        self.state
            .events
            .iter()
            .filter(|e| self.user_rsvp(&e.id).is_some_and(|r| r.status.is_going()))
            .collect()
    }

    pub fn stats(&self) -> EventStats {
        self.stats_at(Utc::now())
    }

    pub fn stats_at(&self, now: DateTime<Utc>) -> EventStats {
        EventStats::compute(&self.state.events, now)
    }
}

fn apply_delta(count: u32, delta: i64) -> u32 {
    match delta {
        d if d > 0 => count.saturating_add(1),
        d if d < 0 => count.saturating_sub(1),
        _ => count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo::demo_state;
    use crate::error::EventDeckError;
    use crate::storage::MemoryStorage;
    use chrono::{Duration, TimeZone};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 20, 12, 0, 0).unwrap()
    }

    fn demo_store() -> EventStore {
        EventStore::new(demo_state(now()))
    }

    fn attendees(store: &EventStore, id: &str) -> u32 {
        store.event(id).unwrap().current_attendees
    }

    /// Records every published message; readiness is switchable.
    #[derive(Default)]
    struct RecordingNotifier {
        ready: bool,
        fail: bool,
        sent: RefCell<Vec<BusMessage>>,
    }

    impl RsvpNotifier for Rc<RecordingNotifier> {
        fn is_ready(&self) -> bool {
            self.ready
        }

        fn publish(&self, message: &BusMessage) -> EventDeckResult<()> {
            if self.fail {
                return Err(EventDeckError::Notify("bus down".into()));
            }
            self.sent.borrow_mut().push(message.clone());
            Ok(())
        }
    }

    fn new_event(title: &str) -> NewEvent {
        NewEvent {
            title: title.into(),
            description: "".into(),
            event_type: EventType::Virtual,
            category: EventCategory::Training,
            cover_emoji: "📚".into(),
            start_date: now() + Duration::days(3),
            end_date: now() + Duration::days(3) + Duration::hours(1),
            timezone: "UTC".into(),
            location: None,
            virtual_url: None,
            max_attendees: Some(10),
            speakers: vec![],
            tags: vec![],
            is_featured: false,
            is_recurring: false,
            recurring_pattern: None,
        }
    }

    #[test]
    fn upcoming_is_future_only_and_sorted() {
        let mut state = demo_state(now());
        state.events[4].start_date = now() - Duration::days(1);
        let store = EventStore::new(state);

        let upcoming = store.upcoming_events_at(now());
        assert!(upcoming.iter().all(|e| e.start_date > now()));
        assert!(upcoming.windows(2).all(|w| w[0].start_date <= w[1].start_date));
        assert_eq!(upcoming.len(), 5);
        assert_eq!(upcoming[0].id, "evt-3");
    }

    #[test]
    fn event_starting_exactly_now_is_not_upcoming() {
        let mut state = demo_state(now());
        state.events[0].start_date = now();
        let store = EventStore::new(state);
        assert!(store.upcoming_events_at(now()).iter().all(|e| e.id != "evt-1"));
    }

    #[test]
    fn going_on_fresh_event_adds_attendee() {
        let mut store = demo_store();
        let before = attendees(&store, "evt-5");

        store.update_rsvp("evt-5", RsvpStatus::Going, false);

        assert_eq!(attendees(&store, "evt-5"), before + 1);
        assert!(store.my_events().iter().any(|e| e.id == "evt-5"));
    }

    #[test]
    fn going_then_not_going_restores_count() {
        let mut store = demo_store();
        let before = attendees(&store, "evt-5");

        store.update_rsvp("evt-5", RsvpStatus::Going, true);
        store.update_rsvp("evt-5", RsvpStatus::NotGoing, false);

        assert_eq!(attendees(&store, "evt-5"), before);
        assert!(store.my_events().iter().all(|e| e.id != "evt-5"));
        // The record stays around with its final status
        assert_eq!(store.user_rsvp("evt-5").unwrap().status, RsvpStatus::NotGoing);
    }

    #[test]
    fn repeated_interested_never_moves_count() {
        let mut store = demo_store();
        let before = attendees(&store, "evt-6");

        for _ in 0..3 {
            store.update_rsvp("evt-6", RsvpStatus::Interested, false);
        }

        assert_eq!(attendees(&store, "evt-6"), before);
        assert_eq!(store.rsvps().iter().filter(|r| r.event_id == "evt-6").count(), 1);
    }

    #[test]
    fn count_never_goes_below_zero() {
        let mut state = demo_state(now());
        state.events[0].current_attendees = 0; // evt-1, user is already going
        let mut store = EventStore::new(state);

        store.update_rsvp("evt-1", RsvpStatus::NotGoing, false);
        assert_eq!(attendees(&store, "evt-1"), 0);

        store.update_rsvp("evt-1", RsvpStatus::Going, false);
        store.update_rsvp("evt-1", RsvpStatus::Interested, false);
        store.update_rsvp("evt-1", RsvpStatus::None, false);
        assert_eq!(attendees(&store, "evt-1"), 0);
    }

    #[test]
    fn update_keeps_registration_time() {
        let mut store = demo_store();
        let registered = store.user_rsvp("evt-2").unwrap().registered_at;

        store.update_rsvp("evt-2", RsvpStatus::Going, true);

        let rsvp = store.user_rsvp("evt-2").unwrap();
        assert_eq!(rsvp.registered_at, registered);
        assert!(rsvp.reminder);
    }

    #[test]
    fn rsvp_for_unknown_event_is_recorded_silently() {
        let mut store = demo_store();
        let outcome = store.update_rsvp("evt-missing", RsvpStatus::Going, false);

        assert_eq!(
            outcome,
            RsvpOutcome::Updated {
                previous: None,
                status: RsvpStatus::Going,
                attendees: None,
            }
        );
        assert!(store.user_rsvp("evt-missing").is_some());
        assert!(store.my_events().iter().all(|e| e.id != "evt-missing"));
    }

    #[test]
    fn toggle_reminder_flips_and_restores() {
        let mut store = demo_store();
        let original = store.user_rsvp("evt-1").unwrap().reminder;

        assert_eq!(store.toggle_reminder("evt-1"), Some(!original));
        assert_eq!(store.toggle_reminder("evt-1"), Some(original));
        assert_eq!(store.user_rsvp("evt-1").unwrap().reminder, original);
    }

    #[test]
    fn toggle_reminder_without_rsvp_changes_nothing() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = demo_store().with_storage(Box::new(storage.clone()));
        let before = store.snapshot();

        assert_eq!(store.toggle_reminder("evt-5"), None);
        assert_eq!(store.snapshot(), before);
        assert!(storage.json().is_none(), "no-op must not persist");
    }

    #[test]
    fn stats_groupings_sum_to_total() {
        let store = demo_store();
        let stats = store.stats_at(now());

        assert_eq!(stats.total, 6);
        assert_eq!(stats.by_type.values().sum::<usize>(), stats.total);
        assert_eq!(stats.by_category.values().sum::<usize>(), stats.total);
        assert_eq!(stats.upcoming, 6);
        // evt-1 (2d), evt-2 (7d), evt-3 (1d), evt-4 (5d)
        assert_eq!(stats.this_week, 4);
        assert_eq!(stats.this_month, 6);
        assert_eq!(stats.count_for_type(EventType::Virtual), 3);
        assert_eq!(stats.count_for_category(EventCategory::Conference), 0);
    }

    #[test]
    fn add_event_prepends_with_zero_attendees() {
        let mut store = demo_store();
        let added = store.add_event(new_event("Rust 101")).clone();

        assert!(added.id.starts_with("evt-"));
        assert_eq!(added.current_attendees, 0);
        assert_eq!(store.events()[0].id, added.id);
        assert_eq!(store.events().len(), 7);
    }

    #[test]
    fn full_event_refuses_new_attendee() {
        let mut store = demo_store();
        store.add_event(new_event("Full"));
        let id = store.events()[0].id.clone();
        let mut state = store.snapshot().state;
        state.events[0].current_attendees = 10;
        let mut store = EventStore::new(state);

        let outcome = store.update_rsvp(&id, RsvpStatus::Going, false);

        assert_eq!(outcome, RsvpOutcome::EventFull { event_id: id.clone() });
        assert_eq!(attendees(&store, &id), 10);
        assert!(store.user_rsvp(&id).is_none());

        // Interest does not take a seat, so it is still allowed
        store.update_rsvp(&id, RsvpStatus::Interested, false);
        assert_eq!(store.user_rsvp(&id).unwrap().status, RsvpStatus::Interested);
    }

    #[test]
    fn floor_only_policy_lets_count_exceed_capacity() {
        let mut state = demo_state(now());
        state.events[3].current_attendees = 30; // evt-4, max 30
        let mut store = EventStore::new(state).with_capacity_policy(CapacityPolicy::FloorOnly);

        store.update_rsvp("evt-4", RsvpStatus::Going, false);
        assert_eq!(attendees(&store, "evt-4"), 31);
    }

    #[test]
    fn going_user_can_leave_a_full_event() {
        let mut state = demo_state(now());
        state.events[0].current_attendees = 100; // evt-1 full, user going
        let mut store = EventStore::new(state);

        store.update_rsvp("evt-1", RsvpStatus::NotGoing, false);
        assert_eq!(attendees(&store, "evt-1"), 99);
    }

    #[test]
    fn every_mutation_persists_and_reloads() {
        let storage = Rc::new(MemoryStorage::new());
        let mut store = demo_store().with_storage(Box::new(storage.clone()));

        store.update_rsvp("evt-4", RsvpStatus::Going, true);
        store.toggle_reminder("evt-4");

        let reloaded = EventStore::open(Box::new(storage.clone()), || panic!("seed not expected")).unwrap();
        assert_eq!(reloaded.events(), store.events());
        assert_eq!(reloaded.rsvps(), store.rsvps());
        assert!(!reloaded.user_rsvp("evt-4").unwrap().reminder);
    }

    #[test]
    fn open_without_snapshot_uses_seed() {
        let store = EventStore::open(Box::new(MemoryStorage::new()), || demo_state(now())).unwrap();
        assert_eq!(store.events().len(), 6);
        assert_eq!(store.rsvps().len(), 2);
    }

    #[test]
    fn publishes_rsvp_change_when_bus_ready() {
        let bus = Rc::new(RecordingNotifier {
            ready: true,
            ..Default::default()
        });
        let mut store = demo_store().with_notifier(Box::new(bus.clone()));

        store.update_rsvp("evt-6", RsvpStatus::Interested, false);

        let sent = bus.sent.borrow();
        assert_eq!(sent.len(), 1);
        let payload = &sent[0].payload;
        assert_eq!(payload.event_id, "evt-6");
        assert_eq!(payload.event_title, "Lanzamiento: NewCool Science");
        assert_eq!(payload.status, RsvpStatus::Interested);
        assert_eq!(payload.start_date, (now() + Duration::days(10)).to_rfc3339());
    }

    #[test]
    fn skips_publishing_when_bus_not_ready_or_event_unknown() {
        let bus = Rc::new(RecordingNotifier::default());
        let mut store = demo_store().with_notifier(Box::new(bus.clone()));
        store.update_rsvp("evt-6", RsvpStatus::Going, false);
        assert!(bus.sent.borrow().is_empty());

        let bus = Rc::new(RecordingNotifier {
            ready: true,
            ..Default::default()
        });
        let mut store = demo_store().with_notifier(Box::new(bus.clone()));
        store.update_rsvp("evt-nope", RsvpStatus::Going, false);
        assert!(bus.sent.borrow().is_empty());
    }

    #[test]
    fn failed_publish_does_not_undo_mutation() {
        let bus = Rc::new(RecordingNotifier {
            ready: true,
            fail: true,
            ..Default::default()
        });
        let mut store = demo_store().with_notifier(Box::new(bus.clone()));
        let before = attendees(&store, "evt-6");

        store.update_rsvp("evt-6", RsvpStatus::Going, false);
        assert_eq!(attendees(&store, "evt-6"), before + 1);
    }
}
