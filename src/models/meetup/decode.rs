//! Transport payload -> `MeetupRecord`.
//!
//! Decoding fails fast on anything the page cannot render honestly:
//! no identifier, no title, no usable date, or a subscription list that
//! cannot be keyed by user.

use std::collections::HashSet;
use std::fmt;

use super::types::{MeetupDate, MeetupRecord, RawMeetup, RawSubscription, SubscribedUser, Subscription};
use super::MeetupId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    MissingId,
    InvalidId(String),
    MissingTitle,
    MissingDate,
    InvalidDate(String),
    MissingSubscriber(usize),
    MissingSubscriberUser(usize),
    DuplicateSubscriber(String),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::MissingId => write!(f, "meetup has no id"),
            DecodeError::InvalidId(e) => write!(f, "meetup id is invalid: {e}"),
            DecodeError::MissingTitle => write!(f, "meetup has no title"),
            DecodeError::MissingDate => write!(f, "meetup has no date"),
            DecodeError::InvalidDate(raw) => write!(f, "meetup date '{raw}' is not an ISO-8601 timestamp"),
            DecodeError::MissingSubscriber(idx) => write!(f, "subscription #{idx} has no user_id"),
            DecodeError::MissingSubscriberUser(idx) => write!(f, "subscription #{idx} has no user"),
            DecodeError::DuplicateSubscriber(uid) => write!(f, "user {uid} is subscribed more than once"),
        }
    }
}

impl std::error::Error for DecodeError {}

pub fn decode(raw: RawMeetup) -> Result<MeetupRecord, DecodeError> {
    let id = raw.id.ok_or(DecodeError::MissingId)?.into_string();
    let id = MeetupId::parse(&id).map_err(|e| DecodeError::InvalidId(e.to_string()))?;

    let title = raw
        .title
        .filter(|t| !t.trim().is_empty())
        .ok_or(DecodeError::MissingTitle)?;

    let raw_date = raw.date.ok_or(DecodeError::MissingDate)?;
    let date = MeetupDate::parse(&raw_date).ok_or(DecodeError::InvalidDate(raw_date))?;

    let subscriptions = decode_subscriptions(raw.subscriptions.unwrap_or_default())?;

    Ok(MeetupRecord {
        id,
        title,
        description: raw.description.unwrap_or_default(),
        date,
        location: raw.location.unwrap_or_default(),
        banner_url: raw.banner.and_then(|b| b.url),
        canceled: raw.canceled.unwrap_or(false),
        past: raw.past.unwrap_or(false),
        subscriptions,
    })
}

fn decode_subscriptions(raw: Vec<RawSubscription>) -> Result<Vec<Subscription>, DecodeError> {
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(raw.len());

    for (idx, sub) in raw.into_iter().enumerate() {
        let user_id = sub
            .user_id
            .map(|id| id.into_string())
            .filter(|id| !id.trim().is_empty())
            .ok_or(DecodeError::MissingSubscriber(idx))?;

        if !seen.insert(user_id.clone()) {
            return Err(DecodeError::DuplicateSubscriber(user_id));
        }

        let user = sub.user.ok_or(DecodeError::MissingSubscriberUser(idx))?;
        out.push(Subscription {
            user_id,
            user: SubscribedUser {
                name: user.name.unwrap_or_default(),
                avatar_url: user.avatar.and_then(|a| a.url),
            },
        });
    }

    Ok(out)
}
