use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Identifier of a meetup resource on the backend.
///
/// Opaque to this application. The only rules are that it is non-empty and
/// fits in a single URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MeetupId(String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidMeetupId {
    Empty,
    ContainsSlash(String),
}

impl fmt::Display for InvalidMeetupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMeetupId::Empty => write!(f, "meetup id is empty"),
            InvalidMeetupId::ContainsSlash(id) => write!(f, "meetup id '{id}' contains '/'"),
        }
    }
}

impl std::error::Error for InvalidMeetupId {}

impl MeetupId {
    pub fn parse(raw: &str) -> Result<Self, InvalidMeetupId> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(InvalidMeetupId::Empty);
        }
        if trimmed.contains('/') {
            return Err(InvalidMeetupId::ContainsSlash(trimmed.to_string()));
        }
        Ok(MeetupId(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Percent-encoded form for use as one segment of a local URL.
    pub fn path_segment(&self) -> Cow<'_, str> {
        urlencoding::encode(&self.0)
    }
}

impl fmt::Display for MeetupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for MeetupId {
    type Error = InvalidMeetupId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        MeetupId::parse(&value)
    }
}

impl From<MeetupId> for String {
    fn from(id: MeetupId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_whitespace() {
        assert_eq!(MeetupId::parse(" 42 ").unwrap().as_str(), "42");
    }

    #[test]
    fn rejects_empty_and_slashes() {
        assert_eq!(MeetupId::parse("   "), Err(InvalidMeetupId::Empty));
        assert!(matches!(MeetupId::parse("1/delete"), Err(InvalidMeetupId::ContainsSlash(_))));
    }

    #[test]
    fn path_segment_escapes_reserved_and_non_ascii() {
        assert_eq!(MeetupId::parse("42").unwrap().path_segment(), "42");
        assert_eq!(MeetupId::parse("a?b#c").unwrap().path_segment(), "a%3Fb%23c");
        assert_eq!(MeetupId::parse("caf\u{e9}\u{7f}").unwrap().path_segment(), "caf%C3%A9%7F");
    }
}
