//! Collaborators the detail view talks to but does not own.
//!
//! The HTTP layer implements these with redirects, session flashes and
//! confirmation forms; tests implement them with recorders.

use async_trait::async_trait;
use std::fmt;

use crate::models::meetup::MeetupId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    MeetupDetail(MeetupId),
    EditMeetup(MeetupId),
}

impl Route {
    pub fn path(&self) -> String {
        match self {
            Route::Dashboard => "/dashboard".to_string(),
            Route::MeetupDetail(id) => format!("/meetups/{}", id.path_segment()),
            Route::EditMeetup(id) => format!("/manage/{}", id.path_segment()),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

pub trait Navigator {
    /// Fire-and-forget transition to another page.
    fn push(&self, route: Route);
}

pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub text: String,
    /// Destructive action; rendered with danger styling.
    pub danger: bool,
}

impl ConfirmPrompt {
    pub fn cancel_meetup() -> Self {
        Self {
            title: "Are you sure?".to_string(),
            text: "Are you sure you want to delete this meetup?".to_string(),
            danger: true,
        }
    }
}

#[async_trait(?Send)]
pub trait Confirmer {
    /// Ask the user; `false` covers both "no" and dismissal.
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}
