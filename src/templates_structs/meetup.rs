use askama::Template;

use super::PageContext;
use crate::models::meetup::{MeetupId, MeetupView};
use crate::view::{ConfirmPrompt, Route, ViewState};

/// What the detail body needs, whatever state the view is in.
pub struct MeetupContent {
    /// Encoded `/meetups/{id}` prefix for links and form actions.
    pub meetup_path: String,
    pub csrf_token: String,
    pub loading: bool,
    pub meetup: Option<MeetupView>,
    pub failure: Option<String>,
}

impl MeetupContent {
    pub fn from_state(meetup_id: &MeetupId, state: ViewState, csrf_token: String) -> Self {
        let (loading, meetup, failure) = match state {
            ViewState::Loading => (true, None, None),
            ViewState::Loaded(m) => (false, Some(*m), None),
            ViewState::Failed(f) => (false, None, Some(f.user_message())),
        };
        Self {
            meetup_path: Route::MeetupDetail(meetup_id.clone()).path(),
            csrf_token,
            loading,
            meetup,
            failure,
        }
    }
}

/// Full page shell. Rendered in the loading state; the body is fetched
/// from `/meetups/{id}/content` once the page is up.
#[derive(Template)]
#[template(path = "meetups/detail.html")]
pub struct MeetupPageTemplate {
    pub ctx: PageContext,
    pub content: MeetupContent,
}

#[derive(Template)]
#[template(path = "meetups/content.html")]
pub struct MeetupContentTemplate {
    pub content: MeetupContent,
}

#[derive(Template)]
#[template(path = "meetups/confirm_cancel.html")]
pub struct CancelConfirmTemplate {
    pub ctx: PageContext,
    pub meetup_path: String,
    pub meetup_title: String,
    pub prompt: ConfirmPrompt,
}
