//! Core library for eventdeck, a local community-events dashboard.
//!
//! - `event`, `rsvp` and `catalog` for the domain model and its display metadata
//! - `store` for the event store (RSVP bookkeeping and derived queries)
//! - `storage` and `notify` for the injected persistence and bus capabilities
//! - `view` for the headless card, detail, filter and RSVP view models

pub mod catalog;
pub mod config;
pub mod demo;
pub mod error;
pub mod event;
pub mod notify;
pub mod rsvp;
pub mod stats;
pub mod storage;
pub mod store;
pub mod time;
pub mod view;

pub use error::{EventDeckError, EventDeckResult};
pub use event::{Event, EventCategory, EventType, NewEvent, Speaker};
pub use rsvp::{RsvpStatus, UserRsvp};
pub use store::{CapacityPolicy, EventStore, RsvpOutcome};
