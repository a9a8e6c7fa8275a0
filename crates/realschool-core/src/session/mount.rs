//! Per-view guard lifecycle.
//!
//! ```text
//! INIT -> LOADING -> { UNAUTHENTICATED, AUTHORIZED(role), UNAUTHORIZED(role) }
//! ```
//!
//! A view that unmounts before resolution finishes keeps the decision but
//! never applies its navigation side effect.

use super::guard::{AuthDecision, SessionGuard};
use super::model::Session;
use super::role::Role;
use crate::navigation::Route;
use tokio_util::sync::CancellationToken;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MountState {
    Init,
    Loading,
    Unauthenticated,
    Authorized(Role),
    Unauthorized(Role),
}

impl MountState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, MountState::Init | MountState::Loading)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MountOutcome {
    /// Render the view with this session.
    Authorized(Session),
    /// The visitor was sent elsewhere.
    Redirected(Route),
    /// The view went away before the guard resolved; nothing was applied.
    Abandoned,
}

/// One mount of a protected view.
#[derive(Debug)]
pub struct ViewMount {
    required_roles: Option<Vec<Role>>,
    state: MountState,
    unmounted: CancellationToken,
}

impl ViewMount {
    pub fn new(required_roles: Option<&[Role]>) -> Self {
        Self {
            required_roles: required_roles.map(<[Role]>::to_vec),
            state: MountState::Init,
            unmounted: CancellationToken::new(),
        }
    }

    /// A mount gated by the roles the route requires.
    pub fn for_route(route: Route) -> Self {
        Self::new(route.required_roles())
    }

    pub fn state(&self) -> MountState {
        self.state
    }

    /// Token that marks this view as unmounted when cancelled.
    pub fn unmount_token(&self) -> CancellationToken {
        self.unmounted.clone()
    }

    pub fn unmount(&self) {
        self.unmounted.cancel();
    }

    /// Drives the mount to a terminal state.
    pub async fn resolve(&mut self, guard: &SessionGuard) -> MountOutcome {
        if self.unmounted.is_cancelled() {
            return MountOutcome::Abandoned;
        }

        self.state = MountState::Loading;
        guard.load_session().await;
        let decision = guard.authorize(self.required_roles.as_deref()).await;

        self.state = match &decision {
            AuthDecision::Allow(session) => MountState::Authorized(session.role()),
            AuthDecision::Unauthorized { role } => MountState::Unauthorized(*role),
            AuthDecision::Unauthenticated => MountState::Unauthenticated,
            AuthDecision::Loading => MountState::Loading,
        };

        if self.unmounted.is_cancelled() {
            tracing::debug!(state = ?self.state, "View unmounted before guard resolved");
            return MountOutcome::Abandoned;
        }

        if let Some(route) = decision.redirect() {
            tracing::debug!(route = %route, "Guard redirecting");
            guard.navigate(route);
            return MountOutcome::Redirected(route);
        }

        match decision {
            AuthDecision::Allow(session) => MountOutcome::Authorized(session),
            _ => MountOutcome::Abandoned,
        }
    }
}
