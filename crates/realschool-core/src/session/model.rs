//! Session domain model.
//!
//! A `Session` is the client-held record of who is signed in. It can only be
//! constructed through validation, so holding one means every required field
//! is present and the role is one of the closed set.

use super::role::Role;
use crate::error::SessionError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The currently signed-in identity and role.
///
/// Required fields must contain something other than whitespace; a blank
/// value counts as missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Opaque external identifier
    identity: String,
    display_name: String,
    /// Mobile number, also the login credential
    mobile: String,
    role: Role,
    /// Tenant scoping key (company id)
    organization_id: String,
    /// Role-scoped identifier used in downstream API calls
    member_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    profile_image_ref: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    attendance_summary: Option<String>,
}

/// Raw shape of the persisted record before validation.
///
/// Every field is optional here so that a missing field is reported as
/// `IncompleteSessionData` rather than as a parse failure.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionRecord {
    identity: Option<String>,
    display_name: Option<String>,
    mobile: Option<String>,
    role: Option<String>,
    organization_id: Option<String>,
    member_id: Option<String>,
    profile_image_ref: Option<String>,
    attendance_summary: Option<String>,
}

fn required(value: Option<String>, field: &'static str) -> Result<String, SessionError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(SessionError::incomplete(field)),
    }
}

impl Session {
    /// Creates a session, rejecting empty required fields.
    pub fn new(
        identity: impl Into<String>,
        display_name: impl Into<String>,
        mobile: impl Into<String>,
        role: Role,
        organization_id: impl Into<String>,
        member_id: impl Into<String>,
    ) -> Result<Self, SessionError> {
        Ok(Self {
            identity: required(Some(identity.into()), "identity")?,
            display_name: required(Some(display_name.into()), "displayName")?,
            mobile: required(Some(mobile.into()), "mobile")?,
            role,
            organization_id: required(Some(organization_id.into()), "organizationId")?,
            member_id: required(Some(member_id.into()), "memberId")?,
            profile_image_ref: None,
            attendance_summary: None,
        })
    }

    pub fn with_profile_image(mut self, reference: Option<String>) -> Self {
        self.profile_image_ref = reference;
        self
    }

    pub fn with_attendance(mut self, summary: Option<String>) -> Self {
        self.attendance_summary = summary;
        self
    }

    /// Parses and validates a persisted record.
    ///
    /// # Errors
    ///
    /// - `MalformedSessionData` if the text is not JSON, not an object, or a
    ///   field has the wrong JSON type
    /// - `IncompleteSessionData` if a required field is missing or empty, or
    ///   the role is not one of the closed set
    pub fn from_json(raw: &str) -> Result<Self, SessionError> {
        let value: Value =
            serde_json::from_str(raw).map_err(|e| SessionError::malformed(e.to_string()))?;

        if !value.is_object() {
            return Err(SessionError::malformed("expected a JSON object"));
        }

        let record: SessionRecord =
            serde_json::from_value(value).map_err(|e| SessionError::malformed(e.to_string()))?;

        Self::try_from(record)
    }

    /// Serializes the session into its persisted form.
    pub fn to_json(&self) -> Result<String, SessionError> {
        serde_json::to_string(self).map_err(|e| SessionError::malformed(e.to_string()))
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn mobile(&self) -> &str {
        &self.mobile
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn organization_id(&self) -> &str {
        &self.organization_id
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    pub fn profile_image_ref(&self) -> Option<&str> {
        self.profile_image_ref.as_deref()
    }

    pub fn attendance_summary(&self) -> Option<&str> {
        self.attendance_summary.as_deref()
    }
}

impl TryFrom<SessionRecord> for Session {
    type Error = SessionError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        let identity = required(record.identity, "identity")?;
        let display_name = required(record.display_name, "displayName")?;
        let mobile = required(record.mobile, "mobile")?;
        let role = required(record.role, "role")?
            .parse::<Role>()
            .map_err(|e| {
                tracing::debug!(error = %e, "Rejecting session with unknown role");
                SessionError::incomplete("role")
            })?;

        Ok(Self {
            identity,
            display_name,
            mobile,
            role,
            organization_id: required(record.organization_id, "organizationId")?,
            member_id: required(record.member_id, "memberId")?,
            profile_image_ref: record.profile_image_ref,
            attendance_summary: record.attendance_summary,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staff_session() -> Session {
        Session::new("1", "A", "999", Role::Staff, "5", "s1").unwrap()
    }

    #[test]
    fn test_parse_complete_record() {
        let raw = r#"{"identity":"1","displayName":"A","mobile":"999","role":"Staff","organizationId":"5","memberId":"s1"}"#;
        let session = Session::from_json(raw).unwrap();
        assert_eq!(session, staff_session());
    }

    #[test]
    fn test_round_trip_keeps_optional_fields() {
        let session = staff_session()
            .with_profile_image(Some("avatar.png".to_string()))
            .with_attendance(Some("12/20".to_string()));
        let parsed = Session::from_json(&session.to_json().unwrap()).unwrap();
        assert_eq!(parsed, session);
        assert_eq!(parsed.profile_image_ref(), Some("avatar.png"));
        assert_eq!(parsed.attendance_summary(), Some("12/20"));
    }

    #[test]
    fn test_missing_field_is_incomplete() {
        let raw = r#"{"identity":"1","displayName":"A"}"#;
        assert_eq!(
            Session::from_json(raw),
            Err(SessionError::incomplete("mobile"))
        );
    }

    #[test]
    fn test_empty_field_is_incomplete() {
        let raw = r#"{"identity":"1","displayName":"A","mobile":"999","role":"Staff","organizationId":"  ","memberId":"s1"}"#;
        assert_eq!(
            Session::from_json(raw),
            Err(SessionError::incomplete("organizationId"))
        );
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let raw = r#"{"identity":"1","displayName":"A","mobile":"999","role":"Admin","organizationId":"5","memberId":"s1"}"#;
        assert_eq!(Session::from_json(raw), Err(SessionError::incomplete("role")));
    }

    #[test]
    fn test_non_json_is_malformed() {
        assert!(matches!(
            Session::from_json("not json{"),
            Err(SessionError::MalformedSessionData(_))
        ));
    }

    #[test]
    fn test_non_object_is_malformed() {
        for raw in ["[]", "\"user\"", "42", "null"] {
            assert!(
                matches!(
                    Session::from_json(raw),
                    Err(SessionError::MalformedSessionData(_))
                ),
                "{raw} should be malformed"
            );
        }
    }

    #[test]
    fn test_wrong_field_type_is_malformed() {
        let raw = r#"{"identity":1,"displayName":"A","mobile":"999","role":"Staff","organizationId":"5","memberId":"s1"}"#;
        assert!(matches!(
            Session::from_json(raw),
            Err(SessionError::MalformedSessionData(_))
        ));
    }

    #[test]
    fn test_new_rejects_empty_member_id() {
        assert_eq!(
            Session::new("1", "A", "999", Role::Owner, "5", ""),
            Err(SessionError::incomplete("memberId"))
        );
    }

    #[test]
    fn test_serialized_shape_is_camel_case() {
        let json: Value = serde_json::from_str(&staff_session().to_json().unwrap()).unwrap();
        assert_eq!(json["displayName"], "A");
        assert_eq!(json["organizationId"], "5");
        assert_eq!(json["role"], "Staff");
        assert!(json.get("profileImageRef").is_none());
    }
}
