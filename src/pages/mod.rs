//! Routed pages.

pub mod admin;
pub mod event_create;
pub mod event_details;
pub mod event_edit;
pub mod home;
pub mod login;
pub mod profile;
pub mod register;
pub mod search;
