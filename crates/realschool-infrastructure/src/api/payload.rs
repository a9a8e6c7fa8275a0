//! JSON request bodies for the mutation endpoints.

use realschool_core::directory::{NewAssignment, NewDesignation, NewLocation, NewPerson};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddPersonRequest<'a> {
    pub name: &'a str,
    pub mobile: &'a str,
    pub designation: &'a str,
    pub password: &'a str,
    pub company_id: &'a str,
}

impl<'a> AddPersonRequest<'a> {
    pub fn new(company_id: &'a str, person: &'a NewPerson) -> Self {
        Self {
            name: person.name.trim(),
            mobile: person.mobile.trim(),
            designation: person.designation.trim(),
            password: &person.password,
            company_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddLocationRequest<'a> {
    pub location_name: &'a str,
    pub company_id: &'a str,
}

impl<'a> AddLocationRequest<'a> {
    pub fn new(company_id: &'a str, location: &'a NewLocation) -> Self {
        Self {
            location_name: location.name.trim(),
            company_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AddDesignationRequest<'a> {
    pub designation: &'a str,
    pub company_id: &'a str,
}

impl<'a> AddDesignationRequest<'a> {
    pub fn new(company_id: &'a str, designation: &'a NewDesignation) -> Self {
        Self {
            designation: designation.name.trim(),
            company_id,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct AssignRequest<'a> {
    pub staff_id: &'a str,
    pub location_id: &'a str,
    pub company_id: &'a str,
}

impl<'a> AssignRequest<'a> {
    pub fn new(company_id: &'a str, assignment: &'a NewAssignment) -> Self {
        Self {
            staff_id: assignment.staff_id.trim(),
            location_id: assignment.location_id.trim(),
            company_id,
        }
    }
}
