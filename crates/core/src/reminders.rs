//! Upcoming reminder derivation
//!
//! Reminders are never stored; they are derived on demand from events that
//! carry a reminder lead time.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use timeflow_domain::{Event, NotificationChannels};

/// A pending reminder for one event.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reminder {
    pub id: String,
    pub event_title: String,
    pub event_start: DateTime<Utc>,
    pub remind_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationChannels>,
}

/// Reminders whose fire time is still in the future, ascending by fire time.
pub fn upcoming_reminders(events: &[Event], now: DateTime<Utc>) -> Vec<Reminder> {
    let mut reminders: Vec<Reminder> = events
        .iter()
        .filter_map(|event| {
            let lead = event.reminder?;
            let remind_at = event.start - Duration::minutes(lead.minutes());
            if remind_at <= now {
                return None;
            }
            Some(Reminder {
                id: format!("{}-reminder", event.id),
                event_title: event.title.clone(),
                event_start: event.start,
                remind_at,
                notifications: event.notifications,
            })
        })
        .collect();

    reminders.sort_by_key(|r| r.remind_at);
    reminders
}
