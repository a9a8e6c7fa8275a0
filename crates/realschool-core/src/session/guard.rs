//! Session & role guard.
//!
//! The guard is the single read/write choke point for the session record. It
//! resolves "who is signed in" from storage, decides whether a view may
//! render, and routes every role to its landing.
//!
//! # Trust boundary
//!
//! Role checks here only decide which screens are shown. They are not access
//! control: the server must authorize every API call on its own.

use super::model::Session;
use super::role::Role;
use super::store::SessionStore;
use crate::error::SessionError;
use crate::navigation::{Navigator, Notification, Notifier, Route};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Where the guard is in resolving the persisted session.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Resolution {
    Unresolved,
    Loading,
    Resolved(Option<Session>),
}

/// The caller-visible result of [`SessionGuard::load_session`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub session: Option<Session>,
    pub is_loading: bool,
}

/// Outcome of an authorization check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// The session has not been resolved yet; render a neutral loading state.
    Loading,
    /// No valid session.
    Unauthenticated,
    /// Valid session whose role is not allowed on the requested view.
    Unauthorized { role: Role },
    /// The view may render with this session.
    Allow(Session),
}

impl AuthDecision {
    /// Computes a decision for an already-resolved session.
    ///
    /// An absent or empty `required_roles` admits any signed-in role.
    pub fn evaluate(session: Option<&Session>, required_roles: Option<&[Role]>) -> Self {
        let Some(session) = session else {
            return AuthDecision::Unauthenticated;
        };

        match required_roles {
            Some(roles) if !roles.is_empty() && !roles.contains(&session.role()) => {
                AuthDecision::Unauthorized {
                    role: session.role(),
                }
            }
            _ => AuthDecision::Allow(session.clone()),
        }
    }

    /// The route this decision sends the visitor to, if any.
    pub fn redirect(&self) -> Option<Route> {
        match self {
            AuthDecision::Unauthenticated => Some(Route::Public),
            AuthDecision::Unauthorized { role } => Some(Route::landing_for(*role)),
            AuthDecision::Loading | AuthDecision::Allow(_) => None,
        }
    }

    pub fn is_allowed(&self) -> bool {
        matches!(self, AuthDecision::Allow(_))
    }
}

/// Owns the client's notion of the current user.
///
/// Construct one at the application root and share it (`Arc`) with every
/// protected view.
pub struct SessionGuard {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    state: RwLock<Resolution>,
}

impl SessionGuard {
    pub fn new(
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            store,
            navigator,
            notifier,
            state: RwLock::new(Resolution::Unresolved),
        }
    }

    /// Current resolution state without touching storage.
    pub async fn snapshot(&self) -> SessionSnapshot {
        match &*self.state.read().await {
            Resolution::Unresolved | Resolution::Loading => SessionSnapshot {
                session: None,
                is_loading: true,
            },
            Resolution::Resolved(session) => SessionSnapshot {
                session: session.clone(),
                is_loading: false,
            },
        }
    }

    /// The resolved session, if any.
    pub async fn current_session(&self) -> Option<Session> {
        self.snapshot().await.session
    }

    /// Resolves the session from persisted storage.
    ///
    /// Invalid records are cleared and reported as absent; storage failures
    /// are reported as absent. No network call is made.
    pub async fn load_session(&self) -> SessionSnapshot {
        *self.state.write().await = Resolution::Loading;

        let session = self.read_persisted().await;

        *self.state.write().await = Resolution::Resolved(session.clone());
        SessionSnapshot {
            session,
            is_loading: false,
        }
    }

    async fn read_persisted(&self) -> Option<Session> {
        let raw = match self.store.read().await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                tracing::warn!(error = %e, "Session storage unreadable, treating as signed out");
                return None;
            }
        };

        match Session::from_json(&raw) {
            Ok(session) => {
                tracing::debug!(role = %session.role(), "Session restored from storage");
                Some(session)
            }
            Err(e) if e.invalidates_record() => {
                tracing::warn!(error = %e, "Discarding invalid session record");
                if let Err(remove_err) = self.store.remove().await {
                    tracing::warn!(error = %remove_err, "Failed to clear invalid session record");
                }
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Session record unusable, treating as signed out");
                None
            }
        }
    }

    /// Decides whether a view requiring `required_roles` may render.
    ///
    /// Never decides while the session is unresolved: returns
    /// [`AuthDecision::Loading`] instead.
    pub async fn authorize(&self, required_roles: Option<&[Role]>) -> AuthDecision {
        match &*self.state.read().await {
            Resolution::Unresolved | Resolution::Loading => AuthDecision::Loading,
            Resolution::Resolved(session) => {
                AuthDecision::evaluate(session.as_ref(), required_roles)
            }
        }
    }

    /// Persists a freshly authenticated session and navigates to its landing.
    ///
    /// # Errors
    ///
    /// Returns `StorageUnavailable` if the record could not be written. The
    /// user is notified and the in-memory session stays as it was.
    pub async fn establish(&self, session: Session) -> Result<Route, SessionError> {
        let record = session.to_json()?;

        if let Err(e) = self.store.write(&record).await {
            tracing::error!(error = %e, "Failed to persist session");
            self.notifier.notify(
                Notification::error("Session could not be saved")
                    .with_description("You may need to sign in again."),
            );
            return Err(e);
        }

        let landing = Route::landing_for(session.role());
        tracing::info!(role = %session.role(), route = %landing, "Signed in");
        *self.state.write().await = Resolution::Resolved(Some(session));
        self.navigator.navigate(landing);
        Ok(landing)
    }

    /// Clears the session and returns to the public landing.
    ///
    /// Always ends signed out in memory, whatever the prior state.
    pub async fn logout(&self) {
        if let Err(e) = self.store.remove().await {
            tracing::warn!(error = %e, "Failed to clear persisted session");
            self.notifier.notify(
                Notification::error("Session could not be cleared")
                    .with_description("Stored sign-in data may remain on this device."),
            );
        }

        *self.state.write().await = Resolution::Resolved(None);
        tracing::info!("Signed out");
        self.navigator.navigate(Route::Public);
    }

    /// Where the generic dashboard entry should send the current visitor.
    pub async fn landing(&self) -> Route {
        match self.current_session().await {
            Some(session) => Route::landing_for(session.role()),
            None => Route::Public,
        }
    }

    pub fn navigate(&self, route: Route) {
        self.navigator.navigate(route);
    }

    pub fn notify(&self, notification: Notification) {
        self.notifier.notify(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FailingStore, MemoryStore, RecordingNavigator, RecordingNotifier};

    const STAFF_RECORD: &str = r#"{"identity":"1","displayName":"A","mobile":"999","role":"Staff","organizationId":"5","memberId":"s1"}"#;

    struct Fixture {
        guard: SessionGuard,
        store: Arc<MemoryStore>,
        navigator: Arc<RecordingNavigator>,
        notifier: Arc<RecordingNotifier>,
    }

    fn fixture(record: Option<&str>) -> Fixture {
        let store = Arc::new(MemoryStore::new(record));
        let navigator = Arc::new(RecordingNavigator::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let guard = SessionGuard::new(store.clone(), navigator.clone(), notifier.clone());
        Fixture {
            guard,
            store,
            navigator,
            notifier,
        }
    }

    fn session(role: Role) -> Session {
        Session::new("1", "A", "999", role, "5", "m1").unwrap()
    }

    #[tokio::test]
    async fn test_unresolved_guard_reports_loading() {
        let f = fixture(Some(STAFF_RECORD));
        assert!(f.guard.snapshot().await.is_loading);
        assert_eq!(f.guard.authorize(None).await, AuthDecision::Loading);
        assert!(f.navigator.routes().is_empty());
    }

    #[tokio::test]
    async fn test_load_staff_record_and_allow() {
        let f = fixture(Some(STAFF_RECORD));
        let snapshot = f.guard.load_session().await;
        assert!(!snapshot.is_loading);
        let loaded = snapshot.session.unwrap();
        assert_eq!(loaded.role(), Role::Staff);
        assert_eq!(loaded.member_id(), "s1");

        let decision = f
            .guard
            .authorize(Some(&[Role::Staff, Role::Owner]))
            .await;
        assert_eq!(decision, AuthDecision::Allow(loaded));
    }

    #[tokio::test]
    async fn test_incomplete_record_is_cleared() {
        let f = fixture(Some(r#"{"identity":"1","displayName":"A"}"#));
        assert_eq!(f.guard.load_session().await.session, None);
        assert_eq!(f.store.record(), None);
        assert_eq!(f.store.remove_calls(), 1);
    }

    #[tokio::test]
    async fn test_malformed_record_is_cleared_without_panicking() {
        let f = fixture(Some("not json{"));
        assert_eq!(f.guard.load_session().await.session, None);
        assert_eq!(f.store.record(), None);
        assert!(f.notifier.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_blank_record_is_cleared() {
        let f = fixture(Some("  \n"));
        assert_eq!(f.guard.load_session().await.session, None);
        assert_eq!(f.store.remove_calls(), 1);
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let f = fixture(Some(r#"{"identity":"1"}"#));
        let first = f.guard.load_session().await;
        let second = f.guard.load_session().await;
        assert_eq!(first, second);
        assert_eq!(f.store.remove_calls(), 1);

        let f = fixture(Some(STAFF_RECORD));
        assert_eq!(f.guard.load_session().await, f.guard.load_session().await);
    }

    #[tokio::test]
    async fn test_unreadable_storage_fails_closed() {
        let guard = SessionGuard::new(
            Arc::new(FailingStore),
            Arc::new(RecordingNavigator::default()),
            Arc::new(RecordingNotifier::default()),
        );
        assert_eq!(guard.load_session().await.session, None);
        assert_eq!(guard.authorize(None).await, AuthDecision::Unauthenticated);
    }

    #[tokio::test]
    async fn test_wrong_role_redirects_to_own_landing() {
        let f = fixture(Some(STAFF_RECORD));
        f.guard.load_session().await;
        let decision = f.guard.authorize(Some(&[Role::Owner])).await;
        assert_eq!(decision, AuthDecision::Unauthorized { role: Role::Staff });
        assert_eq!(decision.redirect(), Some(Route::StaffDashboard));
    }

    #[tokio::test]
    async fn test_no_session_redirects_public() {
        let f = fixture(None);
        f.guard.load_session().await;
        let decision = f.guard.authorize(Some(&[Role::Student])).await;
        assert_eq!(decision, AuthDecision::Unauthenticated);
        assert_eq!(decision.redirect(), Some(Route::Public));
    }

    #[test]
    fn test_empty_required_roles_always_allow() {
        for role in Role::ALL {
            let s = session(role);
            assert!(AuthDecision::evaluate(Some(&s), Some(&[])).is_allowed());
            assert!(AuthDecision::evaluate(Some(&s), None).is_allowed());
        }
    }

    #[tokio::test]
    async fn test_establish_persists_and_navigates() {
        let f = fixture(None);
        let route = f.guard.establish(session(Role::Owner)).await.unwrap();
        assert_eq!(route, Route::OwnerDashboard);
        assert_eq!(f.navigator.routes(), vec![Route::OwnerDashboard]);
        assert_eq!(f.guard.current_session().await, Some(session(Role::Owner)));

        let stored = Session::from_json(&f.store.record().unwrap()).unwrap();
        assert_eq!(stored, session(Role::Owner));
    }

    #[tokio::test]
    async fn test_establish_write_failure_notifies_and_stays_signed_out() {
        let navigator = Arc::new(RecordingNavigator::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let guard = SessionGuard::new(Arc::new(FailingStore), navigator.clone(), notifier.clone());
        guard.load_session().await;

        let result = guard.establish(session(Role::Staff)).await;
        assert!(matches!(result, Err(SessionError::StorageUnavailable(_))));
        assert_eq!(notifier.notifications().len(), 1);
        assert!(navigator.routes().is_empty());
        assert_eq!(guard.current_session().await, None);
    }

    #[tokio::test]
    async fn test_logout_from_any_state() {
        for record in [Some(STAFF_RECORD), None, Some("garbage")] {
            let f = fixture(record);
            f.guard.load_session().await;
            f.guard.logout().await;
            assert_eq!(f.store.record(), None);
            assert_eq!(f.guard.current_session().await, None);
            assert_eq!(f.navigator.routes().last(), Some(&Route::Public));
        }

        // Logging out before anything was loaded also works.
        let f = fixture(Some(STAFF_RECORD));
        f.guard.logout().await;
        assert_eq!(f.store.record(), None);
        assert_eq!(f.navigator.routes(), vec![Route::Public]);
    }

    #[tokio::test]
    async fn test_logout_with_broken_storage_still_signs_out() {
        let navigator = Arc::new(RecordingNavigator::default());
        let notifier = Arc::new(RecordingNotifier::default());
        let guard = SessionGuard::new(Arc::new(FailingStore), navigator.clone(), notifier.clone());
        guard.logout().await;
        assert_eq!(guard.current_session().await, None);
        assert_eq!(navigator.routes(), vec![Route::Public]);
        assert_eq!(notifier.notifications().len(), 1);
    }

    #[tokio::test]
    async fn test_landing_follows_session() {
        let f = fixture(None);
        f.guard.load_session().await;
        assert_eq!(f.guard.landing().await, Route::Public);

        let f = fixture(Some(STAFF_RECORD));
        f.guard.load_session().await;
        assert_eq!(f.guard.landing().await, Route::StaffDashboard);
    }
}
