//! `reqwest` implementation of [`AttendanceApi`].

use super::payload::{AddDesignationRequest, AddLocationRequest, AddPersonRequest, AssignRequest};
use async_trait::async_trait;
use realschool_core::config::ApiSettings;
use realschool_core::directory::{
    Assignment, AttendanceApi, Company, Credentials, Designation, FromRecord, Location, NewAssignment,
    NewDesignation, NewLocation, NewPerson, Person, Registration,
};
use realschool_core::error::ApiError;
use reqwest::{Client, RequestBuilder, Url, header};
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;

/// REST client for the attendance backend.
///
/// Every endpoint is a path joined onto the configured base URL. Reads are
/// `GET` with query parameters; additions are `POST` with a JSON body.
#[derive(Debug, Clone)]
pub struct HttpAttendanceApi {
    client: Client,
    base_url: Url,
}

impl HttpAttendanceApi {
    pub fn new(settings: &ApiSettings) -> Result<Self, ApiError> {
        let base_url = parse_base_url(&settings.base_url)?;
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| ApiError::InvalidRequest(format!("Failed to build HTTP client: {}", e)))?;

        tracing::debug!(base_url = %base_url, timeout_secs = settings.timeout_secs, "API client ready");
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<RequestBuilder, ApiError> {
        let url = endpoint_url(&self.base_url, endpoint, params)?;
        Ok(self.client.get(url))
    }

    fn post<B: Serialize + ?Sized>(&self, endpoint: &str, body: &B) -> Result<RequestBuilder, ApiError> {
        let url = endpoint_url(&self.base_url, endpoint, &[])?;
        Ok(self.client.post(url).json(body))
    }

    /// Sends the request and returns the body of a successful response.
    async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<String, ApiError> {
        let response = request
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                // Query strings may carry credentials.
                let e = e.without_url();
                tracing::error!(endpoint, error = %e, "API request failed");
                ApiError::Transport(e.to_string())
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.without_url().to_string()))?;

        if !status.is_success() {
            tracing::error!(endpoint, status = status.as_u16(), body = %body, "API error");
            return Err(failure_from_response(status.as_u16(), body));
        }

        tracing::debug!(endpoint, status = status.as_u16(), "API call succeeded");
        Ok(body)
    }

    async fn fetch_records(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<Value>, ApiError> {
        let body = self.send(endpoint, self.get(endpoint, params)?).await?;
        records_from_body(&body)
    }

    async fn fetch_list<T: FromRecord>(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Vec<T>, ApiError> {
        let records = self.fetch_records(endpoint, params).await?;
        Ok(decode_list(&records))
    }

    async fn execute(&self, endpoint: &str, request: RequestBuilder) -> Result<(), ApiError> {
        self.send(endpoint, request).await.map(|_| ())
    }
}

#[async_trait]
impl AttendanceApi for HttpAttendanceApi {
    async fn login(&self, credentials: &Credentials) -> Result<Vec<Value>, ApiError> {
        self.fetch_records(
            "loginmahi",
            &[
                ("rMobileNo", credentials.mobile.trim()),
                ("rPassword", credentials.password.as_str()),
            ],
        )
        .await
    }

    async fn register(&self, registration: &Registration) -> Result<Vec<Value>, ApiError> {
        self.fetch_records(
            "registermahi",
            &[
                ("rPassword", registration.password.as_str()),
                ("rName", registration.company_name.trim()),
                ("rPersonName", registration.owner_name.trim()),
                ("rMobileNo", registration.mobile.trim()),
            ],
        )
        .await
    }

    async fn staff_profile(&self, organization_id: &str, staff_id: &str) -> Result<Vec<Person>, ApiError> {
        self.fetch_list(
            "getstaff",
            &[("pIsLogo", "0"), ("pCompanyId", organization_id), ("pStaffId", staff_id)],
        )
        .await
    }

    async fn student_profile(&self, organization_id: &str, student_id: &str) -> Result<Vec<Person>, ApiError> {
        self.fetch_list(
            "getstudent",
            &[("pCompanyId", organization_id), ("pStudentId", student_id)],
        )
        .await
    }

    async fn companies(&self, organization_id: &str, member_id: &str) -> Result<Vec<Company>, ApiError> {
        self.fetch_list(
            "getcompanies",
            &[("pCompanyId", organization_id), ("pStaffId", member_id), ("pIsLogo", "0")],
        )
        .await
    }

    async fn list_persons(&self, organization_id: &str) -> Result<Vec<Person>, ApiError> {
        self.staff_profile(organization_id, "").await
    }

    async fn add_person(&self, organization_id: &str, person: &NewPerson) -> Result<(), ApiError> {
        let body = AddPersonRequest::new(organization_id, person);
        self.execute("addstaff", self.post("addstaff", &body)?).await
    }

    async fn delete_person(&self, organization_id: &str, staff_id: &str) -> Result<(), ApiError> {
        let request = self.get("delstaff", &[("pCompanyId", organization_id), ("pStaffId", staff_id)])?;
        self.execute("delstaff", request).await
    }

    async fn list_locations(&self, organization_id: &str) -> Result<Vec<Location>, ApiError> {
        self.fetch_list("getlocation", &[("pCompanyId", organization_id)]).await
    }

    async fn add_location(&self, organization_id: &str, location: &NewLocation) -> Result<(), ApiError> {
        let body = AddLocationRequest::new(organization_id, location);
        self.execute("addlocation", self.post("addlocation", &body)?).await
    }

    async fn delete_location(&self, organization_id: &str, location_id: &str) -> Result<(), ApiError> {
        let request = self.get(
            "dellocation",
            &[("pCompanyId", organization_id), ("pLocationId", location_id)],
        )?;
        self.execute("dellocation", request).await
    }

    async fn list_designations(&self, organization_id: &str) -> Result<Vec<Designation>, ApiError> {
        self.fetch_list("getdesignation", &[("pCompanyId", organization_id)]).await
    }

    async fn add_designation(&self, organization_id: &str, designation: &NewDesignation) -> Result<(), ApiError> {
        let body = AddDesignationRequest::new(organization_id, designation);
        self.execute("adddesignation", self.post("adddesignation", &body)?).await
    }

    async fn delete_designation(&self, organization_id: &str, designation_id: &str) -> Result<(), ApiError> {
        let request = self.get(
            "deldesignation",
            &[("pCompanyId", organization_id), ("pDesignationId", designation_id)],
        )?;
        self.execute("deldesignation", request).await
    }

    async fn list_assignments(&self, organization_id: &str) -> Result<Vec<Assignment>, ApiError> {
        self.fetch_list("getallstafflocation", &[("pCompanyId", organization_id)]).await
    }

    async fn assign(&self, organization_id: &str, assignment: &NewAssignment) -> Result<(), ApiError> {
        let body = AssignRequest::new(organization_id, assignment);
        self.execute("addstafflocation", self.post("addstafflocation", &body)?).await
    }

    async fn delete_assignment(&self, organization_id: &str, staff_location_id: &str) -> Result<(), ApiError> {
        let request = self.get(
            "delstafflocation",
            &[("pCompanyId", organization_id), ("pStaffLocationId", staff_location_id)],
        )?;
        self.execute("delstafflocation", request).await
    }

    fn image_url(&self, reference: &str) -> String {
        resolve_image_url(&self.base_url, reference)
    }
}

/// Parses the base URL, ensuring it ends with `/` so endpoints join under it.
fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let raw = raw.trim();
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{}/", raw)
    };
    let url = Url::parse(&normalized)
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid base URL '{}': {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(ApiError::InvalidRequest(format!("Invalid base URL '{}'", raw)));
    }
    Ok(url)
}

fn endpoint_url(base: &Url, endpoint: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
    let mut url = base
        .join(endpoint)
        .map_err(|e| ApiError::InvalidRequest(format!("Invalid endpoint '{}': {}", endpoint, e)))?;
    if !params.is_empty() {
        url.query_pairs_mut().extend_pairs(params);
    }
    Ok(url)
}

fn resolve_image_url(base: &Url, reference: &str) -> String {
    if reference.starts_with("http") {
        return reference.to_string();
    }
    match endpoint_url(base, "getimage", &[("fileName", reference)]) {
        Ok(url) => url.to_string(),
        Err(_) => format!("{}getimage?fileName={}", base, reference),
    }
}

/// Maps a failed response, preferring the server's own `message`.
fn failure_from_response(status: u16, body: String) -> ApiError {
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|value| value.get("message")?.as_str().map(str::to_string))
        .filter(|message| !message.trim().is_empty());

    match message {
        Some(message) => ApiError::Rejected(message),
        None => ApiError::Status { status, body },
    }
}

/// Splits a response body into records. A single object counts as one
/// record; an empty body or `null` counts as none.
fn records_from_body(body: &str) -> Result<Vec<Value>, ApiError> {
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    match serde_json::from_str::<Value>(body).map_err(|e| ApiError::Decode(e.to_string()))? {
        Value::Array(records) => Ok(records),
        Value::Null => Ok(Vec::new()),
        record @ Value::Object(_) => Ok(vec![record]),
        other => Err(ApiError::Decode(format!("expected a list, got {}", other))),
    }
}

fn decode_list<T: FromRecord>(records: &[Value]) -> Vec<T> {
    records
        .iter()
        .filter_map(|record| {
            let decoded = T::from_record(record);
            if decoded.is_none() {
                tracing::debug!(entity = T::ENTITY, "Skipping record without id");
            }
            decoded
        })
        .collect()
}
