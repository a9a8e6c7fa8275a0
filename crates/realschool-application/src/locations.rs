//! Location screens.

use crate::context::AppContext;
use crate::screen::{ScreenOutcome, check, on_route, owner_only, report};
use realschool_core::directory::{Location, NewLocation};
use realschool_core::error::Result;
use realschool_core::navigation::{Notification, Route};

pub async fn list(ctx: &AppContext) -> Result<ScreenOutcome<Vec<Location>>> {
    on_route(ctx, Route::LocationAll, |session| async move {
        ctx.api()
            .list_locations(session.organization_id())
            .await
            .map_err(|e| report(ctx, "Failed to fetch locations", e.into()))
    })
    .await
}

pub async fn add(ctx: &AppContext, location: &NewLocation) -> Result<ScreenOutcome<()>> {
    on_route(ctx, Route::LocationAdd, |session| async move {
        check(ctx, location.validate())?;
        ctx.api()
            .add_location(session.organization_id(), location)
            .await
            .map_err(|e| report(ctx, "Failed to add location", e.into()))?;

        ctx.guard()
            .notify(Notification::success("Location added successfully"));
        ctx.guard().navigate(Route::LocationAll);
        Ok(())
    })
    .await
}

pub async fn delete(ctx: &AppContext, location_id: &str) -> Result<ScreenOutcome<()>> {
    owner_only(ctx, |session| async move {
        ctx.api()
            .delete_location(session.organization_id(), location_id)
            .await
            .map_err(|e| report(ctx, "Failed to delete location", e.into()))?;

        ctx.guard()
            .notify(Notification::success("Location deleted successfully"));
        Ok(())
    })
    .await
}
