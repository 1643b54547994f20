use std::fmt;

use crate::api::{ApiError, MeetupClient};
use crate::models::meetup::{decode, DecodeError, DisplaySettings, MeetupId, MeetupView, RawMeetup};

use super::services::{ConfirmPrompt, Confirmer, Navigator, Notifier, Route};

pub const CANCELLED_MESSAGE: &str = "Meetup cancelled.";

#[derive(Debug, Clone, PartialEq)]
pub enum LoadFailure {
    Api(ApiError),
    Decode(DecodeError),
}

impl LoadFailure {
    pub fn is_not_found(&self) -> bool {
        matches!(self, LoadFailure::Api(e) if e.is_not_found())
    }

    pub fn user_message(&self) -> String {
        match self {
            LoadFailure::Api(e) if e.is_not_found() => "Meetup not found.".to_string(),
            LoadFailure::Api(e) => e.user_message(),
            LoadFailure::Decode(_) => "This meetup could not be displayed.".to_string(),
        }
    }
}

impl fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadFailure::Api(e) => write!(f, "{e}"),
            LoadFailure::Decode(e) => write!(f, "{e}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Loading,
    Loaded(Box<MeetupView>),
    Failed(LoadFailure),
}

/// Action attempted while its controls would not be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    NotLoaded,
    NotAllowed { canceled: bool, past: bool },
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::NotLoaded => write!(f, "meetup is not loaded"),
            ActionError::NotAllowed { canceled: true, .. } => write!(f, "meetup is already cancelled"),
            ActionError::NotAllowed { .. } => write!(f, "meetup has already happened"),
        }
    }
}

impl std::error::Error for ActionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CancelOutcome {
    Declined,
    Cancelled,
    /// Delete failed; carries the message shown to the user.
    Failed(String),
}

/// Proof that a load was started for a given id. Results presented with a
/// superseded ticket are dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadTicket {
    id: MeetupId,
    generation: u64,
}

impl LoadTicket {
    pub fn id(&self) -> &MeetupId {
        &self.id
    }
}

/// Detail page for one meetup: `Loading -> Loaded | Failed`, plus the
/// edit and cancel actions.
#[derive(Debug)]
pub struct MeetupDetailView {
    id: MeetupId,
    state: ViewState,
    generation: u64,
    settings: DisplaySettings,
}

impl MeetupDetailView {
    pub fn new(id: MeetupId, settings: DisplaySettings) -> Self {
        Self {
            id,
            state: ViewState::Loading,
            generation: 0,
            settings,
        }
    }

    pub fn id(&self) -> &MeetupId {
        &self.id
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ViewState::Loading)
    }

    pub fn meetup(&self) -> Option<&MeetupView> {
        match &self.state {
            ViewState::Loaded(m) => Some(m.as_ref()),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        match &self.state {
            ViewState::Failed(f) => Some(f),
            _ => None,
        }
    }

    pub fn into_state(self) -> ViewState {
        self.state
    }

    /// Point the view at another meetup. Same id is a no-op; a new id drops
    /// the cached record and re-enters `Loading`.
    pub fn set_identifier(&mut self, id: MeetupId) -> Option<LoadTicket> {
        if id == self.id {
            return None;
        }
        log::debug!("meetup view switching {} -> {}", self.id, id);
        self.id = id;
        Some(self.begin_load())
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.state = ViewState::Loading;
        LoadTicket {
            id: self.id.clone(),
            generation: self.generation,
        }
    }

    /// Apply a fetch result. Returns `false` when the ticket is stale and
    /// the result was ignored.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<RawMeetup, ApiError>) -> bool {
        if ticket.generation != self.generation || ticket.id != self.id {
            log::debug!("dropping stale load result for meetup {}", ticket.id);
            return false;
        }

        self.state = match result {
            Ok(raw) => match decode(raw) {
                Ok(record) => ViewState::Loaded(Box::new(MeetupView::new(record, &self.settings))),
                Err(e) => {
                    log::warn!("meetup {} payload rejected: {e}", self.id);
                    ViewState::Failed(LoadFailure::Decode(e))
                }
            },
            Err(e) => {
                log::warn!("failed to load meetup {}: {e}", self.id);
                ViewState::Failed(LoadFailure::Api(e))
            }
        };
        true
    }

    pub async fn load(&mut self, client: &dyn MeetupClient) -> &ViewState {
        let ticket = self.begin_load();
        let result = client.fetch_meetup(ticket.id()).await;
        self.finish_load(ticket, result);
        &self.state
    }

    /// Loaded and neither cancelled nor past.
    pub fn can_manage(&self) -> bool {
        self.meetup().is_some_and(|m| m.can_manage())
    }

    fn require_manageable(&self) -> Result<(), ActionError> {
        let meetup = self.meetup().ok_or(ActionError::NotLoaded)?;
        if meetup.can_manage() {
            Ok(())
        } else {
            Err(ActionError::NotAllowed {
                canceled: meetup.canceled(),
                past: meetup.past(),
            })
        }
    }

    pub fn navigate_to_edit(&self, navigator: &dyn Navigator) -> Result<(), ActionError> {
        self.require_manageable()?;
        navigator.push(Route::EditMeetup(self.id.clone()));
        Ok(())
    }

    /// Confirm, delete, then report. A failed delete leaves the view as it was.
    pub async fn cancel_meetup(
        &self,
        client: &dyn MeetupClient,
        confirmer: &dyn Confirmer,
        notifier: &dyn Notifier,
        navigator: &dyn Navigator,
    ) -> Result<CancelOutcome, ActionError> {
        self.require_manageable()?;

        if !confirmer.confirm(&ConfirmPrompt::cancel_meetup()).await {
            return Ok(CancelOutcome::Declined);
        }

        match client.delete_meetup(&self.id).await {
            Ok(()) => {
                log::info!("meetup {} cancelled", self.id);
                notifier.success(CANCELLED_MESSAGE);
                navigator.push(Route::Dashboard);
                Ok(CancelOutcome::Cancelled)
            }
            Err(e) => {
                log::warn!("cancelling meetup {} failed: {e}", self.id);
                let message = e.user_message();
                notifier.error(&message);
                Ok(CancelOutcome::Failed(message))
            }
        }
    }
}
