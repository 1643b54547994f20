use actix_session::Session;
use actix_web::{web, HttpResponse};

use super::collaborators::{RedirectNavigator, SessionNotifier};
use super::forms::CsrfOnly;
use super::helpers::{load_view, parse_id, refusal_message};
use crate::errors::AppError;
use crate::session::csrf::validate_csrf;
use crate::state::AppState;
use crate::view::{Notifier, Route};

/// POST /meetups/{id}/edit: hand over to the edit page at /manage/{id}.
pub async fn edit(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    validate_csrf(&session, &form.csrf_token)?;
    let id = parse_id(&path.into_inner())?;
    let view = load_view(&state, id.clone()).await;

    let navigator = RedirectNavigator::default();
    if let Err(e) = view.navigate_to_edit(&navigator) {
        log::warn!("edit of meetup {id} refused: {e}");
        SessionNotifier::new(&session).error(&refusal_message(&view, &e));
    }

    Ok(navigator.into_response(Route::MeetupDetail(id)))
}
