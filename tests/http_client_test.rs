//! `HttpMeetupClient` against a throwaway actix-web server standing in for
//! the meetup backend.

use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use serde_json::json;
use std::time::Duration;

use meetapp::api::{ApiErrorKind, HttpMeetupClient, MeetupClient, CONNECTION_ERROR};
use meetapp::models::meetup::{DisplaySettings, MeetupId};
use meetapp::view::{CancelOutcome, MeetupDetailView, Route};

mod common;
use common::*;

const TOKEN: &str = "t0ken";

async fn get_meetup(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    let authorized = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        == Some("Bearer t0ken");

    match path.into_inner().as_str() {
        "1" => HttpResponse::Ok().json(meetup_json()),
        "private" if !authorized => HttpResponse::Unauthorized().json(json!({ "error": "Token invalid" })),
        "private" => HttpResponse::Ok().json(meetup_json()),
        "garbled" => HttpResponse::Ok().content_type("application/json").body("{ not json"),
        "slow" => {
            actix_web::rt::time::sleep(Duration::from_secs(3)).await;
            HttpResponse::Ok().json(meetup_json())
        }
        _ => HttpResponse::NotFound().json(json!({ "error": "Meetup not found" })),
    }
}

async fn delete_meetup(path: web::Path<String>) -> HttpResponse {
    match path.into_inner().as_str() {
        "1" => HttpResponse::Ok().finish(),
        "past" => HttpResponse::BadRequest().json(json!({ "error": "You can only cancel upcoming meetups" })),
        _ => HttpResponse::InternalServerError().body("<html>oops</html>"),
    }
}

/// Start the stand-in backend on a free port; returns its base URL.
fn spawn_backend() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/meetups/{id}", web::get().to(get_meetup))
            .route("/meetups/{id}", web::delete().to(delete_meetup))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("bind test backend");
    let addr = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{addr}/")
}

fn client(base: &str, token: Option<&str>) -> HttpMeetupClient {
    HttpMeetupClient::new(base, token.map(String::from), Duration::from_secs(2)).expect("client")
}

fn id(raw: &str) -> MeetupId {
    MeetupId::parse(raw).unwrap()
}

#[actix_web::test]
async fn test_fetch_decodes_payload() {
    let base = spawn_backend();
    let raw = client(&base, None).fetch_meetup(&id("1")).await.expect("fetch");
    assert_eq!(raw.title.as_deref(), Some("Rust & Coffee"));
    assert_eq!(raw.subscriptions, Some(vec![]));
}

#[actix_web::test]
async fn test_fetch_not_found_keeps_server_message() {
    let base = spawn_backend();
    let err = client(&base, None).fetch_meetup(&id("404")).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Status);
    assert!(err.is_not_found());
    assert_eq!(err.message.as_deref(), Some("Meetup not found"));
}

#[actix_web::test]
async fn test_bearer_token_is_sent() {
    let base = spawn_backend();

    let err = client(&base, None).fetch_meetup(&id("private")).await.unwrap_err();
    assert_eq!(err.status, Some(401));
    assert_eq!(err.user_message(), "Token invalid");

    assert!(client(&base, Some(TOKEN)).fetch_meetup(&id("private")).await.is_ok());
}

#[actix_web::test]
async fn test_garbled_body_is_decode_error() {
    let base = spawn_backend();
    let err = client(&base, None).fetch_meetup(&id("garbled")).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Decode);
}

#[actix_web::test]
async fn test_slow_backend_times_out() {
    let base = spawn_backend();
    let slow = HttpMeetupClient::new(&base, None, Duration::from_millis(200)).unwrap();
    let err = slow.fetch_meetup(&id("slow")).await.unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Transport);
    assert_eq!(err.user_message(), CONNECTION_ERROR);
}

#[actix_web::test]
async fn test_unreachable_backend_is_connection_error() {
    let err = client("http://127.0.0.1:1/", None)
        .delete_meetup(&id("1"))
        .await
        .unwrap_err();
    assert_eq!(err.kind, ApiErrorKind::Transport);
    assert_eq!(err.user_message(), CONNECTION_ERROR);
}

#[actix_web::test]
async fn test_delete_outcomes() {
    let base = spawn_backend();
    let c = client(&base, None);

    assert!(c.delete_meetup(&id("1")).await.is_ok());

    let err = c.delete_meetup(&id("past")).await.unwrap_err();
    assert_eq!(err.status, Some(400));
    assert_eq!(err.user_message(), "You can only cancel upcoming meetups");

    // Non-JSON error body: no structured message.
    let err = c.delete_meetup(&id("boom")).await.unwrap_err();
    assert_eq!(err.status, Some(500));
    assert_eq!(err.user_message(), CONNECTION_ERROR);
}

#[actix_web::test]
async fn test_view_over_http_loads_and_cancels() {
    let base = spawn_backend();
    let c = client(&base, None);

    let mut view = MeetupDetailView::new(id("1"), DisplaySettings::default());
    view.load(&c).await;
    assert_eq!(view.meetup().expect("loaded").formatted_date, "03/15/2024 - 14h30");

    let notifier = RecordingNotifier::default();
    let nav = RecordingNavigator::default();
    let outcome = view
        .cancel_meetup(&c, &ScriptedConfirmer::answering(true), &notifier, &nav)
        .await
        .unwrap();

    assert_eq!(outcome, CancelOutcome::Cancelled);
    assert_eq!(*notifier.notes.borrow(), vec![Note::Success("Meetup cancelled.".into())]);
    assert_eq!(*nav.pushes.borrow(), vec![Route::Dashboard]);
}
