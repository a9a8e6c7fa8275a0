//! Infrastructure adapters for the RealSchool client.
//!
//! File-backed session storage, configuration loading, platform paths and
//! the HTTP client for the attendance backend.

pub mod api;
pub mod config_service;
pub mod paths;
pub mod storage;

pub use api::HttpAttendanceApi;
pub use config_service::ConfigService;
pub use paths::RealSchoolPaths;
pub use storage::FileSessionStore;
