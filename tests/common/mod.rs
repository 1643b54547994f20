//! Shared test infrastructure: fake collaborators and payload fixtures.
//!
//! - `FakeMeetupClient` stands in for the REST backend and counts calls
//! - `RecordingNavigator` / `RecordingNotifier` / `ScriptedConfirmer` record
//!   what the view asked of its collaborators
#![allow(dead_code)]

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use meetapp::api::{ApiError, MeetupClient};
use meetapp::models::meetup::{MeetupId, RawMeetup};
use meetapp::view::{ConfirmPrompt, Confirmer, Navigator, Notifier, Route};

// ============================================================================
// FIXTURES
// ============================================================================

pub const MEETUP_ID: &str = "1";

/// A future, not-cancelled meetup with no subscribers, as the backend sends it.
pub fn meetup_json() -> Value {
    json!({
        "id": 1,
        "title": "Rust & Coffee",
        "description": "Talks\nPizza <b>after</b>",
        "date": "2024-03-15T14:30:00",
        "location": "Main hall",
        "banner": null,
        "canceled": false,
        "past": false,
        "Subscriptions": []
    })
}

pub fn subscription_json(user_id: i64, name: &str, avatar: Option<&str>) -> Value {
    json!({
        "user_id": user_id,
        "User": {
            "name": name,
            "avatar": avatar.map(|url| json!({ "url": url })),
        }
    })
}

pub fn raw(value: Value) -> RawMeetup {
    serde_json::from_value(value).expect("fixture should deserialize")
}

pub fn raw_with(patch: impl FnOnce(&mut Value)) -> RawMeetup {
    let mut v = meetup_json();
    patch(&mut v);
    raw(v)
}

pub fn meetup_id() -> MeetupId {
    MeetupId::parse(MEETUP_ID).expect("valid id")
}

/// Fixed key so a cookie from one test app is readable by another.
pub fn test_session_mw() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::from(&[7u8; 64]))
        .cookie_secure(false)
        .build()
}

// ============================================================================
// FAKE BACKEND CLIENT
// ============================================================================

pub struct FakeMeetupClient {
    fetch_result: Mutex<Result<RawMeetup, ApiError>>,
    delete_result: Mutex<Result<(), ApiError>>,
    fetches: AtomicUsize,
    deletes: AtomicUsize,
}

impl FakeMeetupClient {
    pub fn with_meetup(raw: RawMeetup) -> Self {
        Self {
            fetch_result: Mutex::new(Ok(raw)),
            delete_result: Mutex::new(Ok(())),
            fetches: AtomicUsize::new(0),
            deletes: AtomicUsize::new(0),
        }
    }

    pub fn failing_fetch(err: ApiError) -> Self {
        let client = Self::with_meetup(RawMeetup::default());
        *client.fetch_result.lock().unwrap() = Err(err);
        client
    }

    pub fn failing_delete(self, err: ApiError) -> Self {
        *self.delete_result.lock().unwrap() = Err(err);
        self
    }

    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub fn delete_count(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MeetupClient for FakeMeetupClient {
    async fn fetch_meetup(&self, _id: &MeetupId) -> Result<RawMeetup, ApiError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.fetch_result.lock().unwrap().clone()
    }

    async fn delete_meetup(&self, _id: &MeetupId) -> Result<(), ApiError> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.delete_result.lock().unwrap().clone()
    }
}

// ============================================================================
// RECORDING COLLABORATORS
// ============================================================================

#[derive(Default)]
pub struct RecordingNavigator {
    pub pushes: RefCell<Vec<Route>>,
}

impl Navigator for RecordingNavigator {
    fn push(&self, route: Route) {
        self.pushes.borrow_mut().push(route);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Note {
    Success(String),
    Error(String),
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notes: RefCell<Vec<Note>>,
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.notes.borrow_mut().push(Note::Success(message.to_string()));
    }

    fn error(&self, message: &str) {
        self.notes.borrow_mut().push(Note::Error(message.to_string()));
    }
}

pub struct ScriptedConfirmer {
    answer: bool,
    pub prompts: RefCell<Vec<ConfirmPrompt>>,
}

impl ScriptedConfirmer {
    pub fn answering(answer: bool) -> Self {
        Self { answer, prompts: RefCell::new(Vec::new()) }
    }
}

#[async_trait(?Send)]
impl Confirmer for ScriptedConfirmer {
    async fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self.prompts.borrow_mut().push(prompt.clone());
        self.answer
    }
}
