//! Browser utilities shared across pages and components.

pub mod nav;
pub mod storage;
