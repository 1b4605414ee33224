//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `access`, `toasts`) so individual
//! components can depend on small focused models. The session store is an
//! explicit injectable handle rather than ambient global state; the Leptos
//! layer mirrors its snapshots into signals for reactivity.

pub mod access;
pub mod session;
pub mod toasts;
