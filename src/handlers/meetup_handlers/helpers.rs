use actix_web::HttpResponse;

use crate::errors::AppError;
use crate::models::meetup::MeetupId;
use crate::state::AppState;
use crate::view::{ActionError, MeetupDetailView, Route};

/// Path id -> `MeetupId`; anything unusable is a 404.
pub fn parse_id(raw: &str) -> Result<MeetupId, AppError> {
    MeetupId::parse(raw).map_err(|_| AppError::NotFound)
}

/// Fresh view for `id`, loaded from the backend.
pub async fn load_view(state: &AppState, id: MeetupId) -> MeetupDetailView {
    let mut view = MeetupDetailView::new(id, state.display.clone());
    view.load(state.client.as_ref()).await;
    view
}

/// Message shown when edit/cancel is attempted while not offered.
pub fn refusal_message(view: &MeetupDetailView, err: &ActionError) -> String {
    match err {
        ActionError::NotLoaded => view
            .failure()
            .map(|f| f.user_message())
            .unwrap_or_else(|| "Meetup is not available.".to_string()),
        ActionError::NotAllowed { canceled: true, .. } => "This meetup was already cancelled.".to_string(),
        ActionError::NotAllowed { .. } => "Past meetups can't be changed.".to_string(),
    }
}

pub fn redirect(route: Route) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", route.path()))
        .finish()
}
