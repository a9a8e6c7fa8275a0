//! Sign-in, company registration and sign-out.

use crate::context::AppContext;
use crate::screen::{check, report};
use realschool_core::directory::{Credentials, Registration};
use realschool_core::error::{ApiError, RealSchoolError, Result};
use realschool_core::navigation::{Notification, Route};
use realschool_core::session::{session_from_login, text_field};

/// Signs in and navigates to the role landing.
///
/// The role comes only from the server's designation; a response without
/// one is refused.
pub async fn login(ctx: &AppContext, credentials: &Credentials) -> Result<Route> {
    check(ctx, credentials.validate())?;
    let mobile = credentials.mobile.trim();

    let records = ctx
        .api()
        .login(credentials)
        .await
        .map_err(|e| report(ctx, "Login failed. Please try again.", e.into()))?;

    let Some(record) = records.first() else {
        tracing::info!("Login refused");
        ctx.guard()
            .notify(Notification::error("Invalid mobile number or password"));
        return Err(ApiError::Empty.into());
    };

    let session = session_from_login(record, mobile).map_err(|e| {
        tracing::warn!(error = %e, "Login response could not be turned into a session");
        ctx.guard().notify(
            Notification::error("Login failed. Please try again.")
                .with_description("Invalid user data received from server"),
        );
        RealSchoolError::from(e)
    })?;

    Ok(ctx.guard().establish(session).await?)
}

/// Registers a company. The owner then signs in with the same mobile.
pub async fn register(ctx: &AppContext, registration: &Registration) -> Result<()> {
    check(ctx, registration.validate())?;

    let records = ctx
        .api()
        .register(registration)
        .await
        .map_err(|e| report(ctx, "Registration failed. Please try again.", e.into()))?;

    match records.first().and_then(|r| text_field(r, &["companyId"])) {
        Some(company_id) => {
            tracing::info!(company_id = %company_id, "Company registered");
            ctx.guard().notify(Notification::success(
                "Company registered successfully! Please login.",
            ));
            Ok(())
        }
        None => {
            ctx.guard()
                .notify(Notification::error("Registration failed. Please try again."));
            Err(ApiError::Rejected("registration returned no company".to_string()).into())
        }
    }
}

pub async fn logout(ctx: &AppContext) {
    ctx.guard().logout().await;
}

/// Entry to the public landing: a signed-in visitor is sent to their
/// dashboard, anyone else stays on the login screen.
pub async fn public_landing(ctx: &AppContext) -> Route {
    match ctx.guard().load_session().await.session {
        Some(session) => {
            let landing = Route::landing_for(session.role());
            ctx.guard().navigate(landing);
            landing
        }
        None => Route::Public,
    }
}
