//! Meetup detail read operations.
//!
//! The page is served in two steps so the loading state is real: the shell
//! comes back immediately with the loader, then the page script fetches the
//! body fragment, which is where the backend call happens.

use actix_session::Session;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use askama::Template;

use super::helpers::{load_view, parse_id};
use crate::errors::{render, AppError};
use crate::session::csrf;
use crate::state::AppState;
use crate::templates_structs::{MeetupContent, MeetupContentTemplate, MeetupPageTemplate, PageContext};
use crate::view::ViewState;

/// GET /meetups/{id}: page shell in the loading state.
pub async fn detail(session: Session, path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner())?;
    let ctx = PageContext::build(&session);
    let content = MeetupContent::from_state(&id, ViewState::Loading, ctx.csrf_token.clone());
    render(MeetupPageTemplate { ctx, content })
}

/// GET /meetups/{id}/content: loads the meetup and renders the body.
///
/// 200 when loaded, 404 when the backend does not know the meetup,
/// 502 for any other load failure.
pub async fn content(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner())?;
    let view = load_view(&state, id.clone()).await;

    let status = match view.failure() {
        None => StatusCode::OK,
        Some(f) if f.is_not_found() => StatusCode::NOT_FOUND,
        Some(_) => StatusCode::BAD_GATEWAY,
    };

    let csrf_token = csrf::get_or_create_token(&session);
    let tmpl = MeetupContentTemplate {
        content: MeetupContent::from_state(&id, view.into_state(), csrf_token),
    };
    let body = tmpl.render()?;
    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}
