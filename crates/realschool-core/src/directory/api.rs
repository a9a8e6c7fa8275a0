//! Remote attendance API port.

use super::model::{
    Assignment, Company, Credentials, Designation, Location, NewAssignment, NewDesignation,
    NewLocation, NewPerson, Person, Registration,
};
use crate::error::ApiError;
use async_trait::async_trait;
use serde_json::Value;

/// The generic REST backend every screen proxies to.
///
/// All tenant-scoped calls take the organization id from the resolved
/// session. The server is expected to authorize each call itself.
#[async_trait]
pub trait AttendanceApi: Send + Sync {
    /// Raw login records; an empty list means the credentials were refused.
    async fn login(&self, credentials: &Credentials) -> Result<Vec<Value>, ApiError>;

    /// Raw registration records; success carries a `companyId`.
    async fn register(&self, registration: &Registration) -> Result<Vec<Value>, ApiError>;

    async fn staff_profile(&self, organization_id: &str, staff_id: &str)
    -> Result<Vec<Person>, ApiError>;

    async fn student_profile(
        &self,
        organization_id: &str,
        student_id: &str,
    ) -> Result<Vec<Person>, ApiError>;

    async fn companies(&self, organization_id: &str, member_id: &str)
    -> Result<Vec<Company>, ApiError>;

    async fn list_persons(&self, organization_id: &str) -> Result<Vec<Person>, ApiError>;

    async fn add_person(&self, organization_id: &str, person: &NewPerson) -> Result<(), ApiError>;

    async fn delete_person(&self, organization_id: &str, staff_id: &str) -> Result<(), ApiError>;

    async fn list_locations(&self, organization_id: &str) -> Result<Vec<Location>, ApiError>;

    async fn add_location(
        &self,
        organization_id: &str,
        location: &NewLocation,
    ) -> Result<(), ApiError>;

    async fn delete_location(
        &self,
        organization_id: &str,
        location_id: &str,
    ) -> Result<(), ApiError>;

    async fn list_designations(&self, organization_id: &str)
    -> Result<Vec<Designation>, ApiError>;

    async fn add_designation(
        &self,
        organization_id: &str,
        designation: &NewDesignation,
    ) -> Result<(), ApiError>;

    async fn delete_designation(
        &self,
        organization_id: &str,
        designation_id: &str,
    ) -> Result<(), ApiError>;

    async fn list_assignments(&self, organization_id: &str) -> Result<Vec<Assignment>, ApiError>;

    async fn assign(
        &self,
        organization_id: &str,
        assignment: &NewAssignment,
    ) -> Result<(), ApiError>;

    async fn delete_assignment(
        &self,
        organization_id: &str,
        staff_location_id: &str,
    ) -> Result<(), ApiError>;

    /// Absolute URL for a profile image reference.
    fn image_url(&self, reference: &str) -> String;
}
