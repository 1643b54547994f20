mod meetup;

pub use meetup::*;

use actix_session::Session;

use crate::session::csrf;
use crate::session::{take_flash, Flash};

pub const APP_NAME: &str = "Meetapp";

/// Common context shared by all full pages.
/// Templates access these as `ctx.flash`, `ctx.csrf_token`, etc.
pub struct PageContext {
    pub app_name: String,
    pub flash: Option<Flash>,
    pub csrf_token: String,
}

impl PageContext {
    pub fn build(session: &Session) -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            flash: take_flash(session),
            csrf_token: csrf::get_or_create_token(session),
        }
    }
}
