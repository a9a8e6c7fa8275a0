#![allow(dead_code)]

use async_trait::async_trait;
use realschool_application::AppContext;
use realschool_core::directory::{
    Assignment, AttendanceApi, Company, Credentials, Designation, Location, NewAssignment,
    NewDesignation, NewLocation, NewPerson, Person, Registration,
};
use realschool_core::error::ApiError;
use realschool_core::session::{Role, Session, SessionGuard};
use realschool_core::testing::{MemoryStore, RecordingNavigator, RecordingNotifier};
use serde_json::Value;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

/// Attendance API double that records calls and replays canned answers.
#[derive(Default)]
pub struct ScriptedApi {
    calls: Mutex<Vec<String>>,
    pub login_records: Mutex<Vec<Value>>,
    pub register_records: Mutex<Vec<Value>>,
    pub persons: Mutex<Vec<Person>>,
    pub locations: Mutex<Vec<Location>>,
    pub failure: Mutex<Option<ApiError>>,
}

impl ScriptedApi {
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn fail_with(&self, error: ApiError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    fn record(&self, call: String) -> Result<(), ApiError> {
        self.calls.lock().unwrap().push(call);
        match self.failure.lock().unwrap().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl AttendanceApi for ScriptedApi {
    async fn login(&self, credentials: &Credentials) -> Result<Vec<Value>, ApiError> {
        self.record(format!("login {}", credentials.mobile))?;
        Ok(self.login_records.lock().unwrap().clone())
    }

    async fn register(&self, registration: &Registration) -> Result<Vec<Value>, ApiError> {
        self.record(format!("register {}", registration.company_name))?;
        Ok(self.register_records.lock().unwrap().clone())
    }

    async fn staff_profile(&self, org: &str, id: &str) -> Result<Vec<Person>, ApiError> {
        self.record(format!("staff_profile {org} {id}"))?;
        Ok(self.persons.lock().unwrap().clone())
    }

    async fn student_profile(&self, org: &str, id: &str) -> Result<Vec<Person>, ApiError> {
        self.record(format!("student_profile {org} {id}"))?;
        Ok(self.persons.lock().unwrap().clone())
    }

    async fn companies(&self, org: &str, id: &str) -> Result<Vec<Company>, ApiError> {
        self.record(format!("companies {org} {id}"))?;
        Ok(vec![Company {
            company_id: org.to_string(),
            name: Some("Sunrise School".to_string()),
            app_name: None,
        }])
    }

    async fn list_persons(&self, org: &str) -> Result<Vec<Person>, ApiError> {
        self.record(format!("list_persons {org}"))?;
        Ok(self.persons.lock().unwrap().clone())
    }

    async fn add_person(&self, org: &str, person: &NewPerson) -> Result<(), ApiError> {
        self.record(format!("add_person {org} {}", person.name))
    }

    async fn delete_person(&self, org: &str, staff_id: &str) -> Result<(), ApiError> {
        self.record(format!("delete_person {org} {staff_id}"))
    }

    async fn list_locations(&self, org: &str) -> Result<Vec<Location>, ApiError> {
        self.record(format!("list_locations {org}"))?;
        Ok(self.locations.lock().unwrap().clone())
    }

    async fn add_location(&self, org: &str, location: &NewLocation) -> Result<(), ApiError> {
        self.record(format!("add_location {org} {}", location.name))
    }

    async fn delete_location(&self, org: &str, location_id: &str) -> Result<(), ApiError> {
        self.record(format!("delete_location {org} {location_id}"))
    }

    async fn list_designations(&self, org: &str) -> Result<Vec<Designation>, ApiError> {
        self.record(format!("list_designations {org}"))?;
        Ok(Vec::new())
    }

    async fn add_designation(&self, org: &str, designation: &NewDesignation) -> Result<(), ApiError> {
        self.record(format!("add_designation {org} {}", designation.name))
    }

    async fn delete_designation(&self, org: &str, designation_id: &str) -> Result<(), ApiError> {
        self.record(format!("delete_designation {org} {designation_id}"))
    }

    async fn list_assignments(&self, org: &str) -> Result<Vec<Assignment>, ApiError> {
        self.record(format!("list_assignments {org}"))?;
        Ok(Vec::new())
    }

    async fn assign(&self, org: &str, assignment: &NewAssignment) -> Result<(), ApiError> {
        self.record(format!(
            "assign {org} {} {}",
            assignment.staff_id, assignment.location_id
        ))
    }

    async fn delete_assignment(&self, org: &str, staff_location_id: &str) -> Result<(), ApiError> {
        self.record(format!("delete_assignment {org} {staff_location_id}"))
    }

    fn image_url(&self, reference: &str) -> String {
        format!("http://images.test/{reference}")
    }
}

pub struct Harness {
    pub ctx: AppContext,
    pub api: Arc<ScriptedApi>,
    pub store: Arc<MemoryStore>,
    pub navigator: Arc<RecordingNavigator>,
    pub notifier: Arc<RecordingNotifier>,
}

impl Harness {
    pub fn new(record: Option<&str>) -> Self {
        let api = Arc::new(ScriptedApi::default());
        let store = Arc::new(MemoryStore::new(record));
        let navigator = Arc::new(RecordingNavigator::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let guard = Arc::new(SessionGuard::new(
            store.clone(),
            navigator.clone(),
            notifier.clone(),
        ));
        let ctx = AppContext::new(guard, api.clone());
        Self {
            ctx,
            api,
            store,
            navigator,
            notifier,
        }
    }

    pub fn signed_in(role: Role) -> Self {
        let session = Session::new("7", "Asha Rao", "9000000007", role, "76", "m7")
            .unwrap()
            .with_profile_image(Some("asha.jpg".to_string()));
        Self::new(Some(&session.to_json().unwrap()))
    }

    pub fn notification_titles(&self) -> Vec<String> {
        self.notifier
            .notifications()
            .into_iter()
            .map(|n| n.title)
            .collect()
    }
}

/// Captures the level of every event logged on the current thread.
#[derive(Clone, Default)]
pub struct LogLevels(Arc<Mutex<Vec<Level>>>);

impl LogLevels {
    /// Installs the recorder until the returned guard is dropped.
    pub fn capture() -> (Self, DefaultGuard) {
        let levels = Self::default();
        let subscriber = tracing_subscriber::registry().with(levels.clone());
        (levels, tracing::subscriber::set_default(subscriber))
    }

    pub fn levels(&self) -> Vec<Level> {
        self.0.lock().unwrap().clone()
    }
}

impl<S: Subscriber> Layer<S> for LogLevels {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        self.0.lock().unwrap().push(*event.metadata().level());
    }
}
