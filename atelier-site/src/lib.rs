//! Atelier: headless core of a single-page portfolio and blog site.
//!
//! The presentation layer is external; this crate owns the blog content
//! store, the demo admin gate, markdown rendering, settings, and the wiring
//! of the notification subsystem from `beacon-lib`.

pub mod auth;
pub mod blog;
pub mod models;
pub mod setup;
