//! Session domain module.
//!
//! # Module Structure
//!
//! - `role`: closed role enumeration
//! - `model`: validated `Session` and its persisted JSON form
//! - `login`: mapping of login responses into a `Session`
//! - `store`: persistence port for the session record
//! - `guard`: the session & role guard
//! - `mount`: per-view guard lifecycle
//!
//! # Usage
//!
//! ```ignore
//! use realschool_core::session::{SessionGuard, ViewMount, MountOutcome};
//! ```

mod guard;
mod login;
mod model;
mod mount;
mod role;
mod store;

// Re-export public API
pub use guard::{AuthDecision, SessionGuard, SessionSnapshot};
pub use login::{session_from_login, text_field};
pub use model::Session;
pub use mount::{MountOutcome, MountState, ViewMount};
pub use role::{ParseRoleError, Role};
pub use store::{SESSION_RECORD_KEY, SessionStore};
