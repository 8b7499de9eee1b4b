//! Headless view models for the dashboard.
//!
//! These are plain data derived from the store; front-ends only render
//! them and route user actions back through `RsvpMenu` and `Dashboard`.

pub mod card;
pub mod dashboard;
pub mod detail;
pub mod filters;
pub mod rsvp_control;

pub use card::{EventCard, RsvpBadge};
pub use dashboard::{Dashboard, Summary, Tab, TabView};
pub use detail::{Capacity, CapacityBar, CapacityTier, EventDetail, Venue};
pub use filters::{EventFilter, FilterBar, FilterOption};
pub use rsvp_control::{PickerLabel, RsvpControl, RsvpMenu, RsvpOption};
