pub mod services;
pub mod state;

pub use services::{ConfirmPrompt, Confirmer, Navigator, Notifier, Route};
pub use state::{
    ActionError, CancelOutcome, LoadFailure, LoadTicket, MeetupDetailView, ViewState, CANCELLED_MESSAGE,
};
