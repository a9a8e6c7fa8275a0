//! Designation screens. All of them are Owner-only.

use crate::context::AppContext;
use crate::screen::{ScreenOutcome, check, on_route, owner_only, report};
use realschool_core::directory::{Designation, NewDesignation};
use realschool_core::error::Result;
use realschool_core::navigation::{Notification, Route};

pub async fn list(ctx: &AppContext) -> Result<ScreenOutcome<Vec<Designation>>> {
    on_route(ctx, Route::DesignationAll, |session| async move {
        ctx.api()
            .list_designations(session.organization_id())
            .await
            .map_err(|e| report(ctx, "Failed to fetch designations", e.into()))
    })
    .await
}

pub async fn add(ctx: &AppContext, designation: &NewDesignation) -> Result<ScreenOutcome<()>> {
    on_route(ctx, Route::DesignationAdd, |session| async move {
        check(ctx, designation.validate())?;
        ctx.api()
            .add_designation(session.organization_id(), designation)
            .await
            .map_err(|e| report(ctx, "Failed to add designation", e.into()))?;

        ctx.guard()
            .notify(Notification::success("Designation added successfully"));
        ctx.guard().navigate(Route::DesignationAll);
        Ok(())
    })
    .await
}

pub async fn delete(ctx: &AppContext, designation_id: &str) -> Result<ScreenOutcome<()>> {
    owner_only(ctx, |session| async move {
        ctx.api()
            .delete_designation(session.organization_id(), designation_id)
            .await
            .map_err(|e| report(ctx, "Failed to delete designation", e.into()))?;

        ctx.guard()
            .notify(Notification::success("Designation deleted successfully"));
        Ok(())
    })
    .await
}
