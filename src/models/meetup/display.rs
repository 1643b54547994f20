use chrono_tz::Tz;

use super::types::{MeetupDate, MeetupRecord, SubscribedUser};
use super::MeetupId;
use crate::config::{DEFAULT_AVATAR_PLACEHOLDER, DEFAULT_BANNER};

/// Knobs for turning a record into something renderable.
#[derive(Debug, Clone)]
pub struct DisplaySettings {
    pub timezone: Tz,
    pub default_banner: String,
    pub avatar_placeholder: String,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            timezone: Tz::UTC,
            default_banner: DEFAULT_BANNER.to_string(),
            avatar_placeholder: DEFAULT_AVATAR_PLACEHOLDER.to_string(),
        }
    }
}

const DATE_PATTERN: &str = "%m/%d/%Y - %Hh%M";

/// `03/15/2024 - 14h30`
pub fn format_date(date: &MeetupDate, tz: Tz) -> String {
    match date {
        MeetupDate::Naive(naive) => naive.format(DATE_PATTERN).to_string(),
        MeetupDate::Instant(instant) => instant.with_timezone(&tz).format(DATE_PATTERN).to_string(),
    }
}

pub fn image_url(banner_url: Option<&str>, default_banner: &str) -> String {
    match banner_url {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => default_banner.to_string(),
    }
}

pub fn avatar_url(user: &SubscribedUser, user_id: &str, placeholder_base: &str) -> String {
    match user.avatar_url.as_deref() {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => format!("{placeholder_base}{user_id}"),
    }
}

/// Lines of a description, for rendering with `<br>` between them.
pub fn description_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line).to_string())
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubscriberView {
    pub user_id: String,
    pub name: String,
    pub avatar_url: String,
}

/// A loaded meetup plus everything derived from it for rendering.
///
/// Always rebuilt from a `MeetupRecord`; the derived fields are never
/// edited on their own.
#[derive(Debug, Clone, PartialEq)]
pub struct MeetupView {
    pub record: MeetupRecord,
    pub formatted_date: String,
    pub image_url: String,
    pub description_lines: Vec<String>,
    pub subscribers: Vec<SubscriberView>,
}

impl MeetupView {
    pub fn new(record: MeetupRecord, settings: &DisplaySettings) -> Self {
        let formatted_date = format_date(&record.date, settings.timezone);
        let image_url = image_url(record.banner_url.as_deref(), &settings.default_banner);
        let description_lines = description_lines(&record.description);
        let subscribers = record
            .subscriptions
            .iter()
            .map(|s| SubscriberView {
                user_id: s.user_id.clone(),
                name: s.user.name.clone(),
                avatar_url: avatar_url(&s.user, &s.user_id, &settings.avatar_placeholder),
            })
            .collect();

        Self {
            record,
            formatted_date,
            image_url,
            description_lines,
            subscribers,
        }
    }

    pub fn id(&self) -> &MeetupId {
        &self.record.id
    }

    pub fn title(&self) -> &str {
        &self.record.title
    }

    pub fn location(&self) -> &str {
        &self.record.location
    }

    pub fn canceled(&self) -> bool {
        self.record.canceled
    }

    pub fn past(&self) -> bool {
        self.record.past
    }

    /// Edit and cancel are only offered for meetups still ahead and not cancelled.
    pub fn can_manage(&self) -> bool {
        !self.record.canceled && !self.record.past
    }
}
