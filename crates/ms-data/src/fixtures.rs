//! Built-in event catalog

use ms_core::{Catalog, CoreResult, Event, EventType, Session, Speaker};

/// Specialties offered on the home page
pub const SPECIALTIES: [&str; 12] = [
    "Cardiology",
    "Oncology",
    "Neurology",
    "Pediatrics",
    "Dermatology",
    "Psychiatry",
    "Orthopedics",
    "Gastroenterology",
    "Radiology",
    "Endocrinology",
    "Immunology",
    "Surgery",
];

const PORTRAIT_A: &str =
    "https://images.unsplash.com/photo-1559839734-2b71f1536783?auto=format&fit=crop&q=80&w=200";
const PORTRAIT_B: &str =
    "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?auto=format&fit=crop&q=80&w=200";
const PORTRAIT_C: &str =
    "https://images.unsplash.com/photo-1537368910025-700350fe46c7?auto=format&fit=crop&q=80&w=200";
const PORTRAIT_D: &str =
    "https://images.unsplash.com/photo-1594824476967-48c8b964273f?auto=format&fit=crop&q=80&w=200";

fn speaker(name: &str, role: &str, image: &str) -> Speaker {
    Speaker {
        name: name.to_string(),
        role: role.to_string(),
        image: image.to_string(),
    }
}

fn session(time: &str, title: &str, room: &str) -> Session {
    Session {
        time: time.to_string(),
        title: title.to_string(),
        room: room.to_string(),
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// The events shipped with the application
pub fn builtin_events() -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Global Summit on Neurology & Brain Disorders".to_string(),
            event_type: EventType::Conference,
            category: "Neurology".to_string(),
            date: "15-18 Dec 2025".to_string(),
            location: "Zénith de Constantine".to_string(),
            attendee_count: 1200,
            price: "5,000 DA".to_string(),
            image: "https://images.unsplash.com/photo-1559757175-5700dde675bc?auto=format&fit=crop&q=80&w=800".to_string(),
            description: "Join leading Algerian and international neurologists to discuss the latest advancements in treating neurodegenerative diseases.".to_string(),
            contact_email: "neurology2025@medsymposium.dz".to_string(),
            contact_phone: "+213 31 12 34 56".to_string(),
            speakers: vec![
                speaker("Pr. Elena Rodriguez", "Chief of Neurosurgery", PORTRAIT_A),
                speaker("Dr. Farid Mansouri", "Neurology Researcher", PORTRAIT_B),
            ],
            committee: names(&["Dr. Amine K.", "Pr. Sarah L.", "Dr. Yacine B."]),
            sessions: vec![
                session("09:00", "Opening Keynote: Future of Neuro-regeneration", "Amphi A"),
                session("11:00", "Alzheimer Case Studies in North Africa", "Salle 102"),
            ],
            is_archived: false,
        },
        Event {
            id: "2".to_string(),
            title: "Advanced Oncology & Precision Medicine 2025".to_string(),
            event_type: EventType::Symposium,
            category: "Oncology".to_string(),
            date: "Feb 12-14, 2025".to_string(),
            location: "EHU Oran".to_string(),
            attendee_count: 950,
            price: "8,500 DA".to_string(),
            image: "https://images.unsplash.com/photo-1579152276503-34e85743b171?auto=format&fit=crop&q=80&w=800".to_string(),
            description: "Focusing on targeted therapies and immunotherapies for solid tumors in clinical practice.".to_string(),
            contact_email: "oncology.oran@medsymposium.dz".to_string(),
            contact_phone: "+213 41 00 22 33".to_string(),
            speakers: vec![speaker("Dr. Marcus Thorne", "Oncology Lead", PORTRAIT_C)],
            committee: names(&["Pr. Belkacem Z.", "Dr. Nadia H."]),
            sessions: vec![session("10:00", "Genomics in Breast Cancer Treatment", "Main Auditorium")],
            is_archived: false,
        },
        Event {
            id: "3".to_string(),
            title: "Hands-on Laparoscopic Surgery Workshop".to_string(),
            event_type: EventType::Workshop,
            category: "Surgery".to_string(),
            date: "Mar 05, 2025".to_string(),
            location: "CHU Mustapha Bacha, Algiers".to_string(),
            attendee_count: 50,
            price: "15,000 DA".to_string(),
            image: "https://images.unsplash.com/photo-1516549655169-df83a0774514?auto=format&fit=crop&q=80&w=800".to_string(),
            description: "Intensive practical training session on minimally invasive techniques for abdominal surgeries.".to_string(),
            contact_email: "surgery.workshop@med.dz".to_string(),
            contact_phone: "+213 21 66 55 44".to_string(),
            speakers: vec![speaker("Pr. Ahmed Rezki", "Master Surgeon", PORTRAIT_B)],
            committee: names(&["Pr. Karim F.", "Dr. Souad G."]),
            sessions: vec![session("08:00", "Live Surgery Demonstration", "Operating Theater A")],
            is_archived: false,
        },
        Event {
            id: "5".to_string(),
            title: "National Cardiology Symposium 2024".to_string(),
            event_type: EventType::Symposium,
            category: "Cardiology".to_string(),
            date: "Nov 05-08, 2024".to_string(),
            location: "CIC Abdelatif Rahal, Algiers".to_string(),
            attendee_count: 850,
            price: "12,000 DA".to_string(),
            image: "https://images.unsplash.com/photo-1576091160399-112ba8d25d1d?auto=format&fit=crop&q=80&w=800".to_string(),
            description: "A deep dive into interventional cardiology techniques, heart failure management, and future clinical trials in Algeria.".to_string(),
            contact_email: "cardio2024@cic.dz".to_string(),
            contact_phone: "+213 21 99 88 77".to_string(),
            speakers: vec![speaker("Dr. John Smith", "Cardiology Consultant", PORTRAIT_C)],
            committee: names(&["Pr. Karim M.", "Dr. Nadia S."]),
            sessions: vec![session("14:00", "Interventional Cardiology Workshop", "Lab 1")],
            is_archived: true,
        },
        Event {
            id: "6".to_string(),
            title: "Future of Digital Health Workshop".to_string(),
            event_type: EventType::Workshop,
            category: "Digital Health".to_string(),
            date: "Dec 01, 2024".to_string(),
            location: "Cyberparc de Sidi Abdellah".to_string(),
            attendee_count: 3000,
            price: "3,500 DA".to_string(),
            image: "https://images.unsplash.com/photo-1579684385127-1ef15d508118?auto=format&fit=crop&q=80&w=800".to_string(),
            description: "Hands-on workshop focusing on the integration of machine learning in patient diagnostics and Algerian telemedicine platforms.".to_string(),
            contact_email: "digital@health.dz".to_string(),
            contact_phone: "+213 23 00 11 22".to_string(),
            speakers: vec![speaker("Ali Benali", "Health Tech Lead", PORTRAIT_D)],
            committee: names(&["Eng. Meriem B.", "Dr. Omar T."]),
            sessions: vec![session("10:00", "AI in Radiology", "Tech Hub")],
            is_archived: true,
        },
    ]
}

/// Catalog over [`builtin_events`]
pub fn builtin_catalog() -> CoreResult<Catalog> {
    Catalog::new(builtin_events())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ms_core::filter::{compute_visible, home_preview};
    use ms_core::{FilterAction, FilterSpec, StatusFilter};

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = builtin_catalog().unwrap();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.iter().filter(|e| e.is_archived).count(), 2);
    }

    #[test]
    fn test_builtin_home_has_no_see_more() {
        let catalog = builtin_catalog().unwrap();
        let preview = home_preview(&catalog, &FilterSpec::default());

        assert_eq!(preview.events.len(), 3);
        assert!(!preview.show_see_more);
    }

    #[test]
    fn test_builtin_archived_listing() {
        let catalog = builtin_catalog().unwrap();
        let mut spec = FilterSpec::default();
        spec.apply(FilterAction::SetStatus(StatusFilter::Archived));

        let titles: Vec<&str> = compute_visible(&catalog, &spec)
            .iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(
            titles,
            vec![
                "National Cardiology Symposium 2024",
                "Future of Digital Health Workshop"
            ]
        );
    }

    #[test]
    fn test_builtin_search_hits_description() {
        let catalog = builtin_catalog().unwrap();
        let mut spec = FilterSpec::default();
        spec.apply(FilterAction::Search("TUMORS".to_string()));

        let ids: Vec<&str> = compute_visible(&catalog, &spec).iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["2"]);
    }
}
