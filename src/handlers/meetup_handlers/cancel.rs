use actix_session::Session;
use actix_web::{web, HttpResponse};

use super::collaborators::{FormDecision, RedirectNavigator, SessionNotifier};
use super::forms::CancelForm;
use super::helpers::{load_view, parse_id, redirect, refusal_message};
use crate::errors::{render, AppError};
use crate::session::csrf::validate_csrf;
use crate::session::{set_flash, FlashKind};
use crate::state::AppState;
use crate::templates_structs::{CancelConfirmTemplate, PageContext};
use crate::view::{ActionError, CancelOutcome, ConfirmPrompt, Notifier, Route};

/// GET /meetups/{id}/cancel: the "are you sure?" prompt.
///
/// Only offered while the meetup can still be managed; otherwise the user
/// is sent back to the detail page with the reason.
pub async fn confirm_page(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let id = parse_id(&path.into_inner())?;
    let view = load_view(&state, id.clone()).await;

    let meetup = match view.meetup() {
        Some(m) if m.can_manage() => m,
        Some(m) => {
            let err = ActionError::NotAllowed { canceled: m.canceled(), past: m.past() };
            set_flash(&session, FlashKind::Error, &refusal_message(&view, &err));
            return Ok(redirect(Route::MeetupDetail(id)));
        }
        None => {
            set_flash(&session, FlashKind::Error, &refusal_message(&view, &ActionError::NotLoaded));
            return Ok(redirect(Route::MeetupDetail(id)));
        }
    };

    let tmpl = CancelConfirmTemplate {
        ctx: PageContext::build(&session),
        meetup_path: Route::MeetupDetail(id).path(),
        meetup_title: meetup.title().to_string(),
        prompt: ConfirmPrompt::cancel_meetup(),
    };
    render(tmpl)
}

/// POST /meetups/{id}/cancel: apply the user's answer to the prompt.
pub async fn cancel(
    state: web::Data<AppState>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CancelForm>,
) -> Result<HttpResponse, AppError> {
    validate_csrf(&session, &form.csrf_token)?;
    let id = parse_id(&path.into_inner())?;
    let view = load_view(&state, id.clone()).await;

    let confirmer = FormDecision::from_form(&form.decision);
    let notifier = SessionNotifier::new(&session);
    let navigator = RedirectNavigator::default();

    match view
        .cancel_meetup(state.client.as_ref(), &confirmer, &notifier, &navigator)
        .await
    {
        Ok(CancelOutcome::Declined) => log::debug!("cancel of meetup {id} declined"),
        Ok(CancelOutcome::Cancelled) => {}
        Ok(CancelOutcome::Failed(msg)) => log::debug!("cancel of meetup {id} reported: {msg}"),
        Err(e) => {
            log::warn!("cancel of meetup {id} refused: {e}");
            notifier.error(&refusal_message(&view, &e));
        }
    }

    Ok(navigator.into_response(Route::MeetupDetail(id)))
}
