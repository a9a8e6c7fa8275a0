//! Person-to-location assignment screens.

use crate::context::AppContext;
use crate::screen::{ScreenOutcome, check, on_route, owner_only, report};
use realschool_core::directory::{Assignment, Location, NewAssignment, Person};
use realschool_core::error::Result;
use realschool_core::navigation::{Notification, Route};

/// What the assign form offers to pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentChoices {
    pub persons: Vec<Person>,
    pub locations: Vec<Location>,
}

pub async fn list(ctx: &AppContext) -> Result<ScreenOutcome<Vec<Assignment>>> {
    on_route(ctx, Route::PersonLocation, |session| async move {
        ctx.api()
            .list_assignments(session.organization_id())
            .await
            .map_err(|e| report(ctx, "Failed to fetch assignments", e.into()))
    })
    .await
}

/// Loads persons and locations for the assign form.
pub async fn choices(ctx: &AppContext) -> Result<ScreenOutcome<AssignmentChoices>> {
    on_route(ctx, Route::PersonAssign, |session| async move {
        let org = session.organization_id();
        let (persons, locations) =
            tokio::join!(ctx.api().list_persons(org), ctx.api().list_locations(org));

        let persons = persons.map_err(|e| report(ctx, "Failed to fetch data", e.into()))?;
        let locations = locations.map_err(|e| report(ctx, "Failed to fetch data", e.into()))?;
        Ok(AssignmentChoices { persons, locations })
    })
    .await
}

pub async fn assign(ctx: &AppContext, assignment: &NewAssignment) -> Result<ScreenOutcome<()>> {
    on_route(ctx, Route::PersonAssign, |session| async move {
        check(ctx, assignment.validate())?;
        ctx.api()
            .assign(session.organization_id(), assignment)
            .await
            .map_err(|e| report(ctx, "Failed to assign person to location", e.into()))?;

        ctx.guard().notify(Notification::success(
            "Person assigned to location successfully",
        ));
        ctx.guard().navigate(Route::PersonLocation);
        Ok(())
    })
    .await
}

pub async fn delete(ctx: &AppContext, staff_location_id: &str) -> Result<ScreenOutcome<()>> {
    owner_only(ctx, |session| async move {
        ctx.api()
            .delete_assignment(session.organization_id(), staff_location_id)
            .await
            .map_err(|e| report(ctx, "Failed to delete assignment", e.into()))?;

        ctx.guard()
            .notify(Notification::success("Assignment deleted successfully"));
        Ok(())
    })
    .await
}
