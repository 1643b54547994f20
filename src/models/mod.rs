pub mod meetup;
