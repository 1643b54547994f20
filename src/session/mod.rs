pub mod csrf;
pub mod flash;

pub use flash::{set_flash, take_flash, Flash, FlashKind};

use actix_web::cookie::Key;

/// Cookie signing key from SESSION_KEY, or a random one when it is missing
/// or shorter than the 64 bytes actix requires.
pub fn cookie_key(raw: Option<&str>) -> Key {
    match raw {
        Some(val) if val.len() >= 64 => {
            log::info!("Using SESSION_KEY from environment");
            Key::from(val.as_bytes())
        }
        Some(val) => {
            log::warn!("SESSION_KEY too short ({} bytes, need 64+), generating random key", val.len());
            Key::generate()
        }
        None => {
            log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
            Key::generate()
        }
    }
}
