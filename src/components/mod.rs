//! Reusable UI components.

pub mod event_card;
pub mod footer;
pub mod form;
pub mod guards;
pub mod header;
pub mod review_section;
pub mod search_filters;
pub mod toast_stack;
