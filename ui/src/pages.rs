pub mod conference;
pub mod home;
pub mod not_found;
