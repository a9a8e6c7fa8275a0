//! Organization directory records and forms.
//!
//! Records are decoded from loosely shaped JSON; a record without its id is
//! skipped. Forms are validated before any request is sent.

use crate::error::{RealSchoolError, Result};
use crate::session::text_field;
use serde_json::Value;

/// Decoding from one element of an API list response.
pub trait FromRecord: Sized {
    const ENTITY: &'static str;

    fn from_record(record: &Value) -> Option<Self>;
}

/// A person (staff member or student) in the organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub staff_id: String,
    pub name: String,
    pub mobile: Option<String>,
    pub designation: Option<String>,
    pub profile_image: Option<String>,
    pub attendance: Option<String>,
}

impl FromRecord for Person {
    const ENTITY: &'static str = "person";

    fn from_record(record: &Value) -> Option<Self> {
        let staff_id = text_field(record, &["staffId", "studentId", "id"])?;
        Some(Self {
            name: text_field(record, &["staffName", "studentName", "name"])
                .unwrap_or_else(|| staff_id.clone()),
            staff_id,
            mobile: text_field(record, &["mobileNo", "rMobileNo", "mobile"]),
            designation: text_field(record, &["designation", "rDesignation"]),
            profile_image: text_field(record, &["profileImage"]),
            attendance: text_field(record, &["attendance"]),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub location_id: String,
    pub name: String,
}

impl FromRecord for Location {
    const ENTITY: &'static str = "location";

    fn from_record(record: &Value) -> Option<Self> {
        let location_id = text_field(record, &["locationId", "id"])?;
        Some(Self {
            name: text_field(record, &["locationName", "name"]).unwrap_or_default(),
            location_id,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Designation {
    pub designation_id: String,
    pub name: String,
}

impl FromRecord for Designation {
    const ENTITY: &'static str = "designation";

    fn from_record(record: &Value) -> Option<Self> {
        let designation_id = text_field(record, &["designationId", "id"])?;
        Some(Self {
            name: text_field(record, &["designation", "designationName", "name"])
                .unwrap_or_default(),
            designation_id,
        })
    }
}

/// A person assigned to a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub staff_location_id: String,
    pub staff_id: Option<String>,
    pub staff_name: Option<String>,
    pub location_id: Option<String>,
    pub location_name: Option<String>,
}

impl FromRecord for Assignment {
    const ENTITY: &'static str = "assignment";

    fn from_record(record: &Value) -> Option<Self> {
        Some(Self {
            staff_location_id: text_field(record, &["staffLocationId", "id"])?,
            staff_id: text_field(record, &["staffId"]),
            staff_name: text_field(record, &["staffName"]),
            location_id: text_field(record, &["locationId"]),
            location_name: text_field(record, &["locationName"]),
        })
    }
}

/// Organization summary shown on the owner dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Company {
    pub company_id: String,
    pub name: Option<String>,
    pub app_name: Option<String>,
}

impl FromRecord for Company {
    const ENTITY: &'static str = "company";

    fn from_record(record: &Value) -> Option<Self> {
        Some(Self {
            company_id: text_field(record, &["companyId", "id"])?,
            name: text_field(record, &["companyName", "rName", "name"]),
            app_name: text_field(record, &["appName"]),
        })
    }
}

// ============================================================================
// Forms
// ============================================================================

fn require(field: &'static str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RealSchoolError::validation(field, "is required"));
    }
    Ok(())
}

fn require_mobile(value: &str) -> Result<()> {
    require("mobile", value)?;
    if !value.trim().chars().all(|c| c.is_ascii_digit()) {
        return Err(RealSchoolError::validation(
            "mobile",
            "must contain only digits",
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub mobile: String,
    pub password: String,
}

impl Credentials {
    pub fn validate(&self) -> Result<()> {
        require_mobile(&self.mobile)?;
        require("password", &self.password)
    }
}

/// Company self-registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub company_name: String,
    pub owner_name: String,
    pub mobile: String,
    pub password: String,
}

impl Registration {
    pub fn validate(&self) -> Result<()> {
        require("company name", &self.company_name)?;
        require("owner name", &self.owner_name)?;
        require_mobile(&self.mobile)?;
        require("password", &self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub name: String,
    pub mobile: String,
    pub designation: String,
    pub password: String,
}

impl NewPerson {
    pub fn validate(&self) -> Result<()> {
        require("name", &self.name)?;
        require_mobile(&self.mobile)?;
        require("designation", &self.designation)?;
        require("password", &self.password)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLocation {
    pub name: String,
}

impl NewLocation {
    pub fn validate(&self) -> Result<()> {
        require("location name", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDesignation {
    pub name: String,
}

impl NewDesignation {
    pub fn validate(&self) -> Result<()> {
        require("designation", &self.name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    pub staff_id: String,
    pub location_id: String,
}

impl NewAssignment {
    pub fn validate(&self) -> Result<()> {
        require("person", &self.staff_id)?;
        require("location", &self.location_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_person_from_staff_record() {
        let person = Person::from_record(&json!({
            "staffId": 12,
            "staffName": "Kiran",
            "mobileNo": "9000000001",
            "designation": "Instructor"
        }))
        .unwrap();
        assert_eq!(person.staff_id, "12");
        assert_eq!(person.name, "Kiran");
        assert_eq!(person.designation.as_deref(), Some("Instructor"));
        assert_eq!(person.profile_image, None);
    }

    #[test]
    fn test_record_without_id_is_skipped() {
        assert!(Location::from_record(&json!({"locationName": "Gate"})).is_none());
        assert!(Assignment::from_record(&json!({"staffId": 1})).is_none());
    }

    #[test]
    fn test_designation_name_keys() {
        let d = Designation::from_record(&json!({"id": "4", "designation": "Driver"})).unwrap();
        assert_eq!(d, Designation {
            designation_id: "4".to_string(),
            name: "Driver".to_string()
        });
    }

    #[test]
    fn test_credentials_validation() {
        let ok = Credentials {
            mobile: "9798909930".to_string(),
            password: "secret".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_mobile = Credentials {
            mobile: "97a".to_string(),
            ..ok.clone()
        };
        assert!(bad_mobile.validate().unwrap_err().is_validation());

        let no_password = Credentials {
            password: "".to_string(),
            ..ok
        };
        assert_eq!(
            no_password.validate().unwrap_err().to_string(),
            "Invalid password: is required"
        );
    }

    #[test]
    fn test_registration_requires_every_field() {
        let reg = Registration {
            company_name: "Sunrise School".to_string(),
            owner_name: " ".to_string(),
            mobile: "9000000000".to_string(),
            password: "pw".to_string(),
        };
        assert_eq!(
            reg.validate().unwrap_err().to_string(),
            "Invalid owner name: is required"
        );
    }

    #[test]
    fn test_new_assignment_requires_both_ids() {
        let form = NewAssignment {
            staff_id: "3".to_string(),
            location_id: String::new(),
        };
        assert!(form.validate().is_err());
    }
}
