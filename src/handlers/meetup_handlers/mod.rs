//! Meetup detail page handlers.
//!
//! - `read.rs`: GET page shell and GET content fragment
//! - `cancel.rs`: GET confirmation prompt, POST decision
//! - `edit.rs`: POST edit navigation
//! - `collaborators.rs`: session/redirect/form implementations of the view services
//! - `forms.rs`: form bodies
//! - `helpers.rs`: shared loading and redirect helpers

pub mod cancel;
pub mod collaborators;
pub mod edit;
pub mod forms;
pub mod helpers;
pub mod read;

use actix_web::web;

pub use cancel::{cancel, confirm_page};
pub use edit::edit;
pub use read::{content, detail};

/// Register the meetup routes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/meetups")
            .route("/{id}", web::get().to(read::detail))
            .route("/{id}/content", web::get().to(read::content))
            .route("/{id}/cancel", web::get().to(cancel::confirm_page))
            .route("/{id}/cancel", web::post().to(cancel::cancel))
            .route("/{id}/edit", web::post().to(edit::edit)),
    );
}
