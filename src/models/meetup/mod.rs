pub mod decode;
pub mod display;
pub mod id;
pub mod types;

pub use decode::{decode, DecodeError};
pub use display::{DisplaySettings, MeetupView, SubscriberView};
pub use id::{InvalidMeetupId, MeetupId};
pub use types::*;
