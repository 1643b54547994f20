use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::MeetupId;

// ---------------------------------------------------------------------------
// Transport payload, as the backend sends it
// ---------------------------------------------------------------------------

/// Identifiers arrive as strings or integers depending on the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Text(String),
    Number(i64),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        }
    }
}

impl From<&str> for RawId {
    fn from(s: &str) -> Self {
        RawId::Text(s.to_string())
    }
}

impl From<i64> for RawId {
    fn from(n: i64) -> Self {
        RawId::Number(n)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawImage {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawUser {
    pub name: Option<String>,
    pub avatar: Option<RawImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSubscription {
    #[serde(rename = "user_id", alias = "userId")]
    pub user_id: Option<RawId>,
    #[serde(rename = "User", alias = "user")]
    pub user: Option<RawUser>,
}

/// GET /meetups/{id} response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMeetup {
    pub id: Option<RawId>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
    pub banner: Option<RawImage>,
    pub canceled: Option<bool>,
    pub past: Option<bool>,
    #[serde(rename = "Subscriptions", alias = "subscriptions")]
    pub subscriptions: Option<Vec<RawSubscription>>,
}

// ---------------------------------------------------------------------------
// Decoded record
// ---------------------------------------------------------------------------

/// Meetup timestamp. ISO text without an offset stays a wall-clock time;
/// text with an offset is an instant that gets converted for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeetupDate {
    Naive(NaiveDateTime),
    Instant(DateTime<FixedOffset>),
}

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

impl MeetupDate {
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
            return Some(MeetupDate::Instant(instant));
        }
        for fmt in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
                return Some(MeetupDate::Naive(naive));
            }
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(MeetupDate::Naive)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscribedUser {
    pub name: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Subscription {
    pub user_id: String,
    pub user: SubscribedUser,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MeetupRecord {
    pub id: MeetupId,
    pub title: String,
    pub description: String,
    pub date: MeetupDate,
    pub location: String,
    pub banner_url: Option<String>,
    pub canceled: bool,
    /// Computed by the backend; never derived locally.
    pub past: bool,
    pub subscriptions: Vec<Subscription>,
}
