//! Error types for the RealSchool client.

use thiserror::Error;

/// Failures while resolving the persisted session.
///
/// Every variant is recovered inside the guard: the session is treated as
/// absent and the view falls back to the public landing. Only a failed
/// write is reported to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The record is not parseable JSON or not a JSON object.
    #[error("Malformed session data: {0}")]
    MalformedSessionData(String),

    /// The record parses but a required field is missing, empty or invalid.
    #[error("Incomplete session data: field '{field}' is missing or invalid")]
    IncompleteSessionData { field: &'static str },

    /// Reading or writing the persisted record failed.
    #[error("Session storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl SessionError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedSessionData(message.into())
    }

    pub fn incomplete(field: &'static str) -> Self {
        Self::IncompleteSessionData { field }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::StorageUnavailable(message.into())
    }

    /// True for shape failures that must clear the persisted record.
    pub fn invalidates_record(&self) -> bool {
        matches!(
            self,
            Self::MalformedSessionData(_) | Self::IncompleteSessionData { .. }
        )
    }
}

/// Failures talking to the remote REST API.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Connection, DNS, TLS or timeout failure.
    #[error("Unable to connect to the server: {0}")]
    Transport(String),

    /// The server answered with a non-success status.
    #[error("API call failed: {status}")]
    Status { status: u16, body: String },

    /// The server rejected the request and explained why.
    #[error("{0}")]
    Rejected(String),

    /// The body could not be decoded into the expected shape.
    #[error("Unexpected response from server: {0}")]
    Decode(String),

    /// The call succeeded but returned no records.
    #[error("Server returned no data")]
    Empty,

    /// The request could not be built (bad base URL, etc.).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Error type shared by every layer of the client.
#[derive(Error, Debug, Clone)]
pub enum RealSchoolError {
    /// Local file access failed.
    #[error("IO error: {message}")]
    Io { message: String },

    #[error("Could not decode {format}: {message}")]
    Serialization {
        format: &'static str,
        message: String,
    },

    /// `config.toml` is unreadable or malformed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A form field failed validation before any request was sent.
    #[error("Invalid {field}: {message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

impl RealSchoolError {
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    pub fn is_session(&self) -> bool {
        matches!(self, Self::Session(_))
    }
}

impl From<std::io::Error> for RealSchoolError {
    fn from(err: std::io::Error) -> Self {
        Self::io(format!("{} ({:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for RealSchoolError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON",
            message: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RealSchoolError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_failures_invalidate_record() {
        assert!(SessionError::malformed("eof").invalidates_record());
        assert!(SessionError::incomplete("mobile").invalidates_record());
        assert!(!SessionError::storage("read-only fs").invalidates_record());
    }

    #[test]
    fn test_session_error_converts_transparently() {
        let err: RealSchoolError = SessionError::incomplete("role").into();
        assert!(err.is_session());
        assert_eq!(
            err.to_string(),
            "Incomplete session data: field 'role' is missing or invalid"
        );
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("not json{").unwrap_err();
        let err: RealSchoolError = json_err.into();
        match err {
            RealSchoolError::Serialization { format, .. } => assert_eq!(format, "JSON"),
            other => panic!("Expected Serialization error, got {other:?}"),
        }
    }

    #[test]
    fn test_validation_helper() {
        let err = RealSchoolError::validation("mobile", "must contain only digits");
        assert!(err.is_validation());
        assert_eq!(err.to_string(), "Invalid mobile: must contain only digits");
    }
}
