//! Calendar event records
//!
//! The wire format keeps the dashboard's original field names: camelCase
//! keys, kebab-case categories, and reminder lead times as numeric strings.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A titled, timed, categorized calendar entry.
///
/// Invariant: `end > start`. The id is assigned once at creation and is
/// stable across edits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub category: EventCategory,
    /// Reminder lead time, minutes before `start`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<ReminderLead>,
    /// Absence means no notification configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notifications: Option<NotificationChannels>,
}

impl Event {
    /// Event length in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Fixed event category set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventCategory {
    Personal,
    Work,
    FocusTime,
    Meeting,
}

/// Fixed reminder lead-time set, serialized as the numeric strings the
/// dashboard stores ("5", "15", "30", "60", "1440").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReminderLead {
    #[serde(rename = "5")]
    FiveMinutes,
    #[serde(rename = "15")]
    FifteenMinutes,
    #[serde(rename = "30")]
    ThirtyMinutes,
    #[serde(rename = "60")]
    OneHour,
    #[serde(rename = "1440")]
    OneDay,
}

impl ReminderLead {
    /// Lead time in minutes before the event start.
    pub fn minutes(self) -> i64 {
        match self {
            Self::FiveMinutes => 5,
            Self::FifteenMinutes => 15,
            Self::ThirtyMinutes => 30,
            Self::OneHour => 60,
            Self::OneDay => 1440,
        }
    }
}

/// Independent notification channels for a reminder
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationChannels {
    pub email: bool,
    pub sms: bool,
    pub push: bool,
}
