//! Application layer for the RealSchool client.
//!
//! Each screen first passes the session guard, then calls the remote API
//! scoped to the session's organization. Outcomes are reported to the user
//! through the notifier; navigation goes through the guard's navigator.

pub mod assignments;
pub mod auth;
pub mod context;
pub mod dashboard;
pub mod designations;
pub mod locations;
pub mod persons;
pub mod screen;

pub use context::AppContext;
pub use screen::ScreenOutcome;
