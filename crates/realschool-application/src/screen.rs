//! Guarded screen entry and user-facing error reporting.

use crate::context::AppContext;
use realschool_core::error::{ApiError, RealSchoolError, Result};
use realschool_core::navigation::{Notification, Route};
use realschool_core::session::{MountOutcome, Role, Session, ViewMount};
use std::future::Future;

/// Result of opening a protected screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenOutcome<T> {
    /// The guard allowed the screen and it produced `T`.
    Rendered(T),
    /// The guard sent the visitor elsewhere; nothing was loaded.
    Redirected(Route),
    /// The screen was closed before the guard resolved.
    Abandoned,
}

impl<T> ScreenOutcome<T> {
    pub fn rendered(self) -> Option<T> {
        match self {
            ScreenOutcome::Rendered(value) => Some(value),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ScreenOutcome<U> {
        match self {
            ScreenOutcome::Rendered(value) => ScreenOutcome::Rendered(f(value)),
            ScreenOutcome::Redirected(route) => ScreenOutcome::Redirected(route),
            ScreenOutcome::Abandoned => ScreenOutcome::Abandoned,
        }
    }
}

const OWNER_ONLY: &[Role] = &[Role::Owner];

/// Runs `body` only if the guard admits the visitor to `route`.
pub(crate) async fn on_route<T, F, Fut>(ctx: &AppContext, route: Route, body: F) -> Result<ScreenOutcome<T>>
where
    F: FnOnce(Session) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    guarded(ctx, ViewMount::for_route(route), body).await
}

/// Runs `body` only for an Owner session.
pub(crate) async fn owner_only<T, F, Fut>(ctx: &AppContext, body: F) -> Result<ScreenOutcome<T>>
where
    F: FnOnce(Session) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    guarded(ctx, ViewMount::new(Some(OWNER_ONLY)), body).await
}

/// Resolves `mount` and hands the session to `body` when allowed.
pub async fn guarded<T, F, Fut>(ctx: &AppContext, mut mount: ViewMount, body: F) -> Result<ScreenOutcome<T>>
where
    F: FnOnce(Session) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    match mount.resolve(ctx.guard()).await {
        MountOutcome::Authorized(session) => Ok(ScreenOutcome::Rendered(body(session).await?)),
        MountOutcome::Redirected(route) => Ok(ScreenOutcome::Redirected(route)),
        MountOutcome::Abandoned => Ok(ScreenOutcome::Abandoned),
    }
}

/// Shows `error` to the user under `title` and hands it back.
pub(crate) fn report(ctx: &AppContext, title: &str, error: RealSchoolError) -> RealSchoolError {
    if error.is_validation() {
        tracing::debug!(error = %error, "{}", title);
    } else {
        tracing::error!(error = %error, "{}", title);
    }
    let description = match &error {
        RealSchoolError::Api(ApiError::Rejected(message)) => message.clone(),
        RealSchoolError::Api(ApiError::Transport(_)) => "Unable to connect to the server.".to_string(),
        RealSchoolError::Validation { .. } => error.to_string(),
        _ => "Please try again later.".to_string(),
    };
    ctx.guard()
        .notify(Notification::error(title).with_description(description));
    error
}

/// Validates a form, reporting the failure to the user.
pub(crate) fn check(ctx: &AppContext, validation: Result<()>) -> Result<()> {
    validation.map_err(|e| report(ctx, "Please check the form", e))
}
