//! Display metadata for event types, categories and RSVP statuses.

use crate::event::{EventCategory, EventType};
use crate::rsvp::RsvpStatus;

/// Accent colours, as terminal colour names. Gradients use two of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccentColor {
    Blue,
    Cyan,
    Green,
    Yellow,
    Red,
    Magenta,
    Gray,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    pub label: &'static str,
    pub emoji: &'static str,
    /// Gradient (from, to)
    pub colors: (AccentColor, AccentColor),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryInfo {
    pub label: &'static str,
    pub emoji: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RsvpInfo {
    pub label: &'static str,
    pub emoji: &'static str,
    pub color: AccentColor,
}

impl EventType {
    pub fn info(&self) -> TypeInfo {
        match self {
            EventType::Virtual => TypeInfo {
                label: "Virtual",
                emoji: "💻",
                colors: (AccentColor::Blue, AccentColor::Cyan),
            },
            EventType::Presential => TypeInfo {
                label: "Presencial",
                emoji: "📍",
                colors: (AccentColor::Green, AccentColor::Green),
            },
            EventType::Hybrid => TypeInfo {
                label: "Híbrido",
                emoji: "🔄",
                colors: (AccentColor::Magenta, AccentColor::Red),
            },
        }
    }
}

impl EventCategory {
    pub fn info(&self) -> CategoryInfo {
        let (label, emoji) = match self {
            EventCategory::Webinar => ("Webinar", "🎥"),
            EventCategory::Workshop => ("Taller", "🛠️"),
            EventCategory::Meetup => ("Meetup", "👥"),
            EventCategory::Hackathon => ("Hackathon", "💡"),
            EventCategory::Conference => ("Conferencia", "🎤"),
            EventCategory::Launch => ("Lanzamiento", "🚀"),
            EventCategory::Training => ("Capacitación", "📚"),
            EventCategory::OfficeHours => ("Office Hours", "☕"),
        };
        CategoryInfo { label, emoji }
    }
}

impl RsvpStatus {
    /// Menu metadata. `None` has no menu entry.
    pub fn info(&self) -> Option<RsvpInfo> {
        match self {
            RsvpStatus::Going => Some(RsvpInfo {
                label: "Asistiré",
                emoji: "✅",
                color: AccentColor::Green,
            }),
            RsvpStatus::Interested => Some(RsvpInfo {
                label: "Interesado",
                emoji: "⭐",
                color: AccentColor::Yellow,
            }),
            RsvpStatus::NotGoing => Some(RsvpInfo {
                label: "No asistiré",
                emoji: "❌",
                color: AccentColor::Gray,
            }),
            RsvpStatus::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_choice_has_menu_metadata() {
        for status in RsvpStatus::CHOICES {
            assert!(status.info().is_some(), "{status} has no menu entry");
        }
        assert!(RsvpStatus::None.info().is_none());
    }

    #[test]
    fn category_labels_are_localized() {
        assert_eq!(EventCategory::Workshop.info().label, "Taller");
        assert_eq!(EventCategory::OfficeHours.info().emoji, "☕");
        assert_eq!(EventType::Hybrid.info().label, "Híbrido");
    }
}
