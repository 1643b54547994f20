use actix_session::Session;
use actix_web::HttpResponse;
use async_trait::async_trait;
use std::cell::RefCell;

use crate::session::{set_flash, FlashKind};
use crate::view::{ConfirmPrompt, Confirmer, Navigator, Notifier, Route};

/// Notifications become flash messages on the next page.
pub struct SessionNotifier<'a> {
    session: &'a Session,
}

impl<'a> SessionNotifier<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }
}

impl Notifier for SessionNotifier<'_> {
    fn success(&self, message: &str) {
        set_flash(self.session, FlashKind::Success, message);
    }

    fn error(&self, message: &str) {
        set_flash(self.session, FlashKind::Error, message);
    }
}

/// Records the last pushed route and turns it into a 303.
#[derive(Default)]
pub struct RedirectNavigator {
    target: RefCell<Option<Route>>,
}

impl RedirectNavigator {
    pub fn target(&self) -> Option<Route> {
        self.target.borrow().clone()
    }

    /// 303 to the pushed route, or to `fallback` when nothing was pushed.
    pub fn into_response(self, fallback: Route) -> HttpResponse {
        let route = self.target.into_inner().unwrap_or(fallback);
        HttpResponse::SeeOther()
            .insert_header(("Location", route.path()))
            .finish()
    }
}

impl Navigator for RedirectNavigator {
    fn push(&self, route: Route) {
        *self.target.borrow_mut() = Some(route);
    }
}

/// The user already answered the prompt on the confirmation page; this
/// replays that answer.
pub struct FormDecision {
    confirmed: bool,
}

impl FormDecision {
    pub fn from_form(decision: &str) -> Self {
        Self { confirmed: decision.trim().eq_ignore_ascii_case("confirm") }
    }
}

#[async_trait(?Send)]
impl Confirmer for FormDecision {
    async fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        self.confirmed
    }
}
