//! Shared test fixtures

use crate::catalog::{Catalog, Event, EventType};

/// A minimal event with the given identity and partition
pub fn event(id: &str, event_type: EventType, category: &str, is_archived: bool) -> Event {
    Event {
        id: id.to_string(),
        title: format!("{} {} event", category, event_type),
        event_type,
        category: category.to_string(),
        date: "Jan 01, 2025".to_string(),
        location: "Algiers".to_string(),
        attendee_count: 100,
        price: "1,000 DA".to_string(),
        image: String::new(),
        description: "Scientific meeting.".to_string(),
        contact_email: "contact@med.dz".to_string(),
        contact_phone: "+213 00 00 00 00".to_string(),
        speakers: Vec::new(),
        committee: Vec::new(),
        sessions: Vec::new(),
        is_archived,
    }
}

fn described(
    id: &str,
    event_type: EventType,
    category: &str,
    title: &str,
    location: &str,
    description: &str,
    is_archived: bool,
) -> Event {
    Event {
        title: title.to_string(),
        location: location.to_string(),
        description: description.to_string(),
        ..event(id, event_type, category, is_archived)
    }
}

/// Four upcoming and two archived events
pub fn sample_catalog() -> Catalog {
    Catalog::new(vec![
        described(
            "1",
            EventType::Conference,
            "Neurology",
            "Global Summit on Neurology & Brain Disorders",
            "Zenith de Constantine",
            "Advances in treating degenerative diseases.",
            false,
        ),
        described(
            "2",
            EventType::Symposium,
            "Oncology",
            "Advanced Oncology & Precision Medicine",
            "EHU Oran",
            "Targeted therapies for solid tumors.",
            false,
        ),
        described(
            "3",
            EventType::Workshop,
            "Surgery",
            "Hands-on Laparoscopic Surgery Workshop",
            "CHU Mustapha Bacha, Algiers",
            "Practical training on minimally invasive techniques.",
            false,
        ),
        described(
            "4",
            EventType::Webinar,
            "Pediatrics",
            "Pediatric Telemedicine Webinar",
            "Online",
            "Remote care for children.",
            false,
        ),
        described(
            "5",
            EventType::Symposium,
            "Cardiology",
            "National Cardiology Symposium",
            "CIC Abdelatif Rahal, Algiers",
            "Interventional cardiology and heart failure.",
            true,
        ),
        described(
            "6",
            EventType::Workshop,
            "Digital Health",
            "Future of Digital Health Workshop",
            "Cyberparc de Sidi Abdellah",
            "Machine learning in patient diagnostics.",
            true,
        ),
    ])
    .expect("fixture ids are unique")
}
