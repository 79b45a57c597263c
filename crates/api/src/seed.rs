//! Demo schedule seeded into the in-memory store at startup.
//!
//! Seven events placed relative to the given instant: three today, three in
//! the coming days, one in the recent past.

use chrono::{DateTime, Duration, Utc};
use timeflow_domain::{Event, EventCategory};

fn at(now: DateTime<Utc>, hour: u32, minute: u32) -> DateTime<Utc> {
    now.date_naive()
        .and_hms_opt(hour, minute, 0)
        .map(|dt| dt.and_utc())
        .unwrap_or(now)
}

/// Build the demo events relative to `now`.
pub fn demo_events(now: DateTime<Utc>) -> Vec<Event> {
    vec![
        Event {
            id: "1".to_string(),
            title: "Team Standup".to_string(),
            description: Some("Daily sync with the development team.".to_string()),
            start: at(now, 9, 0),
            end: at(now, 9, 15),
            category: EventCategory::Work,
            reminder: None,
            notifications: None,
        },
        Event {
            id: "2".to_string(),
            title: "Design Review".to_string(),
            description: Some("Review the new dashboard mockups.".to_string()),
            start: at(now, 11, 0),
            end: at(now, 12, 30),
            category: EventCategory::Meeting,
            reminder: None,
            notifications: None,
        },
        Event {
            id: "3".to_string(),
            title: "Focus Block: Code".to_string(),
            description: Some("Work on the AI integration feature.".to_string()),
            start: at(now, 14, 0),
            end: at(now, 16, 0),
            category: EventCategory::FocusTime,
            reminder: None,
            notifications: None,
        },
        Event {
            id: "4".to_string(),
            title: "Dentist Appointment".to_string(),
            description: None,
            start: now + Duration::days(2) + Duration::hours(2),
            end: now + Duration::days(2) + Duration::hours(3),
            category: EventCategory::Personal,
            reminder: None,
            notifications: None,
        },
        Event {
            id: "5".to_string(),
            title: "Project Kickoff".to_string(),
            description: Some("Kickoff meeting for the Q3 project.".to_string()),
            start: now + Duration::days(1) + Duration::hours(5),
            end: now + Duration::days(1) + Duration::hours(6),
            category: EventCategory::Work,
            reminder: None,
            notifications: None,
        },
        Event {
            id: "6".to_string(),
            title: "Weekly Report".to_string(),
            description: Some("Prepare and send the weekly progress report.".to_string()),
            start: now - Duration::days(3) - Duration::hours(4),
            end: now - Duration::days(3) - Duration::hours(3) + Duration::minutes(30),
            category: EventCategory::Work,
            reminder: None,
            notifications: None,
        },
        Event {
            id: "7".to_string(),
            title: "Lunch with Sarah".to_string(),
            description: None,
            start: now + Duration::days(4) - Duration::hours(2),
            end: now + Duration::days(4) - Duration::hours(1),
            category: EventCategory::Personal,
            reminder: None,
            notifications: None,
        },
    ]
}
