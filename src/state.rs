use std::sync::Arc;

use crate::api::MeetupClient;
use crate::models::meetup::DisplaySettings;

/// Shared application data handed to every handler via `web::Data`.
pub struct AppState {
    pub client: Arc<dyn MeetupClient>,
    pub display: DisplaySettings,
}

impl AppState {
    pub fn new(client: Arc<dyn MeetupClient>, display: DisplaySettings) -> Self {
        Self { client, display }
    }
}
