//! RSVP records for the single local user.
//!
//! Records are keyed only by event id; there is no user id. Supporting more
//! than one user would need a composite key here and in the store.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RsvpStatus {
    Going,
    Interested,
    NotGoing,
    #[default]
    None,
}

impl RsvpStatus {
    /// The statuses a user can pick, in menu order.
    pub const CHOICES: [RsvpStatus; 3] = [RsvpStatus::Going, RsvpStatus::Interested, RsvpStatus::NotGoing];

    pub fn as_str(&self) -> &'static str {
        match self {
            RsvpStatus::Going => "going",
            RsvpStatus::Interested => "interested",
            RsvpStatus::NotGoing => "not_going",
            RsvpStatus::None => "none",
        }
    }

    pub fn is_going(&self) -> bool {
        matches!(self, RsvpStatus::Going)
    }
}

impl fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RsvpStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.replace('-', "_").as_str() {
            "going" => Ok(RsvpStatus::Going),
            "interested" => Ok(RsvpStatus::Interested),
            "not_going" => Ok(RsvpStatus::NotGoing),
            "none" => Ok(RsvpStatus::None),
            _ => Err(format!(
                "Unknown RSVP status '{}'. Expected one of: going, interested, not-going",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRsvp {
    pub event_id: String,
    pub status: RsvpStatus,
    pub registered_at: DateTime<Utc>,
    pub reminder: bool,
}

/// Attendee-count change caused by moving from `previous` to `next`.
///
/// Only transitions into or out of "going" move the count.
pub fn attendee_delta(previous: Option<RsvpStatus>, next: RsvpStatus) -> i64 {
    let was_going = previous.is_some_and(|s| s.is_going());
    match (was_going, next.is_going()) {
        (false, true) => 1,
        (true, false) => -1,
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_only_counts_going_transitions() {
        assert_eq!(attendee_delta(None, RsvpStatus::Going), 1);
        assert_eq!(attendee_delta(Some(RsvpStatus::Interested), RsvpStatus::Going), 1);
        assert_eq!(attendee_delta(Some(RsvpStatus::Going), RsvpStatus::Going), 0);
        assert_eq!(attendee_delta(Some(RsvpStatus::Going), RsvpStatus::NotGoing), -1);
        assert_eq!(attendee_delta(Some(RsvpStatus::Going), RsvpStatus::Interested), -1);
        assert_eq!(attendee_delta(None, RsvpStatus::Interested), 0);
        assert_eq!(attendee_delta(Some(RsvpStatus::NotGoing), RsvpStatus::None), 0);
    }

    #[test]
    fn status_parses_dashed_form() {
        assert_eq!("not-going".parse::<RsvpStatus>(), Ok(RsvpStatus::NotGoing));
        assert!("maybe".parse::<RsvpStatus>().is_err());
    }
}
