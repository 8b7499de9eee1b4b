//! The RSVP control shown at the bottom of the detail view.
//!
//! Until the user is going, the control is a button that opens a menu of
//! statuses. Once going, it turns into a confirmation with a reminder
//! toggle and a cancel action.

use crate::event::Event;
use crate::rsvp::{RsvpStatus, UserRsvp};
use crate::store::{EventStore, RsvpOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerLabel {
    Full,
    Interested,
    SignUp,
}

impl PickerLabel {
    pub fn text(&self) -> &'static str {
        match self {
            PickerLabel::Full => "🚫 Evento lleno",
            PickerLabel::Interested => "⭐ Interesado",
            PickerLabel::SignUp => "🎟️ Inscribirse",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsvpOption {
    pub status: RsvpStatus,
    pub label: &'static str,
    pub emoji: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RsvpControl {
    Confirmed {
        reminder: bool,
    },
    Picker {
        label: PickerLabel,
        /// Full event and no RSVP yet
        disabled: bool,
        full: bool,
        /// Only populated while the menu is open and the event is not full
        options: Vec<RsvpOption>,
    },
}

impl RsvpControl {
    pub fn build(event: &Event, rsvp: Option<&UserRsvp>, menu: &RsvpMenu) -> Self {
        let status = rsvp.map(|r| r.status);
        if let Some(r) = rsvp.filter(|r| r.status.is_going()) {
            return RsvpControl::Confirmed { reminder: r.reminder };
        }

        let full = event.is_full();
        let label = if full {
            PickerLabel::Full
        } else if status == Some(RsvpStatus::Interested) {
            PickerLabel::Interested
        } else {
            PickerLabel::SignUp
        };

        let options = if menu.is_open() && !full {
            RsvpStatus::CHOICES
                .iter()
                .filter_map(|s| {
                    s.info().map(|info| RsvpOption {
                        status: *s,
                        label: info.label,
                        emoji: info.emoji,
                    })
                })
                .collect()
        } else {
            Vec::new()
        };

        RsvpControl::Picker {
            label,
            disabled: full && rsvp.is_none(),
            full,
            options,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, RsvpControl::Picker { disabled: true, .. })
    }

    pub fn reminder_title(reminder: bool) -> &'static str {
        if reminder {
            "Recordatorio activo"
        } else {
            "Activar recordatorio"
        }
    }
}

/// Open/closed state of the status menu. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RsvpMenu {
    open: bool,
}

impl RsvpMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Pick a status from the menu. Going turns the reminder on.
    pub fn choose(&mut self, store: &mut EventStore, event_id: &str, status: RsvpStatus) -> RsvpOutcome {
        let outcome = store.update_rsvp(event_id, status, status.is_going());
        self.open = false;
        outcome
    }

    /// The "cancel registration" action of the confirmed view.
    pub fn cancel(&mut self, store: &mut EventStore, event_id: &str) -> RsvpOutcome {
        self.choose(store, event_id, RsvpStatus::NotGoing)
    }
}
