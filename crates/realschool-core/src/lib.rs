//! Domain layer for the RealSchool attendance client.
//!
//! Holds the session & role guard, routes, directory records and the ports
//! (storage, navigation, notifications, remote API) the outer layers
//! implement. Nothing in this crate performs I/O directly.

pub mod config;
pub mod directory;
pub mod error;
pub mod navigation;
pub mod session;
pub mod testing;

// Re-export common types
pub use error::{ApiError, RealSchoolError, Result, SessionError};
pub use navigation::Route;
pub use session::{Role, Session, SessionGuard};
