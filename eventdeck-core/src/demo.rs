//! Demo catalog used when nothing has been persisted yet.

use chrono::{DateTime, Duration, Utc};

use crate::event::{Event, EventCategory, EventType, Speaker};
use crate::rsvp::{RsvpStatus, UserRsvp};
use crate::storage::StoreState;

const DEMO_TIMEZONE: &str = "America/Santiago";

fn speaker(id: &str, name: &str, role: &str, avatar_emoji: &str) -> Speaker {
    Speaker {
        id: id.into(),
        name: name.into(),
        role: role.into(),
        avatar_emoji: avatar_emoji.into(),
        bio: None,
    }
}

fn tags(list: &[&str]) -> Vec<String> {
    list.iter().map(|t| t.to_string()).collect()
}

/// Six demo events scheduled relative to `now`.
pub fn demo_events(now: DateTime<Utc>) -> Vec<Event> {
    let day = Duration::days(1);

    vec![
        Event {
            id: "evt-1".into(),
            title: "Introducción a la Programación con Python".into(),
            description: "Aprende los fundamentos de programación con Python desde cero. Ideal para principiantes.".into(),
            event_type: EventType::Virtual,
            category: EventCategory::Webinar,
            cover_emoji: "🐍".into(),
            start_date: now + day * 2,
            end_date: now + day * 2 + Duration::minutes(90),
            timezone: DEMO_TIMEZONE.into(),
            location: None,
            virtual_url: Some("https://meet.newcool.io/python-intro".into()),
            max_attendees: Some(100),
            current_attendees: 67,
            speakers: vec![speaker("s1", "María García", "Senior Developer", "👩‍💻")],
            tags: tags(&["python", "programación", "principiantes"]),
            is_featured: true,
            is_recurring: false,
            recurring_pattern: None,
            created_at: now,
        },
        Event {
            id: "evt-2".into(),
            title: "Hackathon NewCool 2025".into(),
            description: "48 horas de innovación. Crea soluciones educativas que impacten a miles de estudiantes.".into(),
            event_type: EventType::Hybrid,
            category: EventCategory::Hackathon,
            cover_emoji: "🏆".into(),
            start_date: now + day * 7,
            end_date: now + day * 9,
            timezone: DEMO_TIMEZONE.into(),
            location: Some("Santiago, Chile + Virtual".into()),
            virtual_url: Some("https://meet.newcool.io/hackathon-2025".into()),
            max_attendees: Some(500),
            current_attendees: 342,
            speakers: vec![
                speaker("s2", "Carlos Ruiz", "CTO NewCool", "👨‍💼"),
                speaker("s3", "Ana López", "Product Lead", "👩‍🎨"),
            ],
            tags: tags(&["hackathon", "innovación", "premios"]),
            is_featured: true,
            is_recurring: false,
            recurring_pattern: None,
            created_at: now,
        },
        Event {
            id: "evt-3".into(),
            title: "Office Hours: Matemáticas".into(),
            description: "Sesión semanal de preguntas y respuestas sobre matemáticas con nuestros tutores.".into(),
            event_type: EventType::Virtual,
            category: EventCategory::OfficeHours,
            cover_emoji: "📐".into(),
            start_date: now + day,
            end_date: now + day + Duration::hours(1),
            timezone: DEMO_TIMEZONE.into(),
            location: None,
            virtual_url: Some("https://meet.newcool.io/math-office".into()),
            max_attendees: None,
            current_attendees: 23,
            speakers: vec![speaker("s4", "Pedro Soto", "Tutor de Matemáticas", "🧮")],
            tags: tags(&["matemáticas", "tutorías", "preguntas"]),
            is_featured: false,
            is_recurring: true,
            recurring_pattern: Some("weekly".into()),
            created_at: now,
        },
        Event {
            id: "evt-4".into(),
            title: "Taller: Creación de Contenido Educativo".into(),
            description: "Aprende a crear contenido educativo atractivo y efectivo para tus estudiantes.".into(),
            event_type: EventType::Presential,
            category: EventCategory::Workshop,
            cover_emoji: "🎨".into(),
            start_date: now + day * 5,
            end_date: now + day * 5 + Duration::minutes(180),
            timezone: DEMO_TIMEZONE.into(),
            location: Some("Biblioteca Nacional, Santiago".into()),
            virtual_url: None,
            max_attendees: Some(30),
            current_attendees: 28,
            speakers: vec![speaker("s5", "Sofía Mendez", "Diseñadora Instruccional", "✨")],
            tags: tags(&["contenido", "diseño", "profesores"]),
            is_featured: false,
            is_recurring: false,
            recurring_pattern: None,
            created_at: now,
        },
        Event {
            id: "evt-5".into(),
            title: "Meetup Comunidad NewCool - Valparaíso".into(),
            description: "Únete a la comunidad NewCool en Valparaíso. Networking, charlas y sorpresas.".into(),
            event_type: EventType::Presential,
            category: EventCategory::Meetup,
            cover_emoji: "🌊".into(),
            start_date: now + day * 14,
            end_date: now + day * 14 + Duration::minutes(180),
            timezone: DEMO_TIMEZONE.into(),
            location: Some("Cowork Valparaíso".into()),
            virtual_url: None,
            max_attendees: Some(50),
            current_attendees: 31,
            speakers: vec![],
            tags: tags(&["meetup", "networking", "valparaíso"]),
            is_featured: false,
            is_recurring: false,
            recurring_pattern: None,
            created_at: now,
        },
        Event {
            id: "evt-6".into(),
            title: "Lanzamiento: NewCool Science".into(),
            description: "Presentación oficial de nuestra nueva plataforma de ciencias interactiva.".into(),
            event_type: EventType::Virtual,
            category: EventCategory::Launch,
            cover_emoji: "🔬".into(),
            start_date: now + day * 10,
            end_date: now + day * 10 + Duration::hours(1),
            timezone: DEMO_TIMEZONE.into(),
            location: None,
            virtual_url: Some("https://meet.newcool.io/science-launch".into()),
            max_attendees: None,
            current_attendees: 156,
            speakers: vec![speaker("s6", "Dr. Alejandro Torres", "Director Científico", "🔭")],
            tags: tags(&["lanzamiento", "ciencias", "nuevo"]),
            is_featured: true,
            is_recurring: false,
            recurring_pattern: None,
            created_at: now,
        },
    ]
}

pub fn demo_rsvps(now: DateTime<Utc>) -> Vec<UserRsvp> {
    vec![
        UserRsvp {
            event_id: "evt-1".into(),
            status: RsvpStatus::Going,
            registered_at: now,
            reminder: true,
        },
        UserRsvp {
            event_id: "evt-2".into(),
            status: RsvpStatus::Interested,
            registered_at: now,
            reminder: false,
        },
    ]
}

pub fn demo_state(now: DateTime<Utc>) -> StoreState {
    StoreState {
        events: demo_events(now),
        user_rsvps: demo_rsvps(now),
    }
}
