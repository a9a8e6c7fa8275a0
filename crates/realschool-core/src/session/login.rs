//! Mapping of a login response into a [`Session`].
//!
//! The login endpoint returns loosely shaped records whose field names vary
//! by role. Ids may arrive as numbers or strings.

use super::model::Session;
use super::role::Role;
use crate::error::SessionError;
use serde_json::Value;

/// Returns the first field among `keys` holding a non-empty string or a number.
pub fn text_field(record: &Value, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match record.get(*key)? {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Builds a session from the first record of a login response.
///
/// `entered_mobile` fills identity, name and mobile when the server omits
/// them. The role and organization must come from the server: a record
/// without a recognizable designation is rejected rather than guessed.
pub fn session_from_login(record: &Value, entered_mobile: &str) -> Result<Session, SessionError> {
    if !record.is_object() {
        return Err(SessionError::malformed("login record is not an object"));
    }

    let identity = text_field(record, &["id", "staffId", "studentId"])
        .unwrap_or_else(|| entered_mobile.to_string());
    let display_name = text_field(record, &["rPersonName", "staffName", "studentName", "rName"])
        .unwrap_or_else(|| entered_mobile.to_string());
    let mobile = text_field(record, &["rMobileNo", "mobileNo"])
        .unwrap_or_else(|| entered_mobile.to_string());

    let designation = text_field(record, &["designation", "rDesignation"])
        .ok_or_else(|| SessionError::incomplete("role"))?;
    let role = Role::from_server_label(&designation).ok_or_else(|| {
        tracing::warn!(designation = %designation, "Login returned an unknown designation");
        SessionError::incomplete("role")
    })?;

    let organization_id =
        text_field(record, &["companyId"]).ok_or_else(|| SessionError::incomplete("organizationId"))?;
    let member_id =
        text_field(record, &["staffId", "id"]).ok_or_else(|| SessionError::incomplete("memberId"))?;

    Ok(Session::new(identity, display_name, mobile, role, organization_id, member_id)?
        .with_profile_image(text_field(record, &["profileImage"]))
        .with_attendance(text_field(record, &["attendance"])))
}
