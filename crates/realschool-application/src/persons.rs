//! Person screens: add, list, delete.

use crate::context::AppContext;
use crate::screen::{ScreenOutcome, check, on_route, owner_only, report};
use realschool_core::directory::{NewPerson, Person};
use realschool_core::error::Result;
use realschool_core::navigation::{Notification, Route};

pub async fn list(ctx: &AppContext) -> Result<ScreenOutcome<Vec<Person>>> {
    on_route(ctx, Route::PersonAll, |session| async move {
        ctx.api()
            .list_persons(session.organization_id())
            .await
            .map_err(|e| report(ctx, "Failed to fetch persons", e.into()))
    })
    .await
}

/// Adds a person, then shows the full list.
pub async fn add(ctx: &AppContext, person: &NewPerson) -> Result<ScreenOutcome<()>> {
    on_route(ctx, Route::PersonAdd, |session| async move {
        check(ctx, person.validate())?;
        ctx.api()
            .add_person(session.organization_id(), person)
            .await
            .map_err(|e| report(ctx, "Failed to add person", e.into()))?;

        tracing::info!(name = %person.name.trim(), "Person added");
        ctx.guard()
            .notify(Notification::success("Person added successfully"));
        ctx.guard().navigate(Route::PersonAll);
        Ok(())
    })
    .await
}

pub async fn delete(ctx: &AppContext, staff_id: &str) -> Result<ScreenOutcome<()>> {
    owner_only(ctx, |session| async move {
        ctx.api()
            .delete_person(session.organization_id(), staff_id)
            .await
            .map_err(|e| report(ctx, "Failed to delete person", e.into()))?;

        tracing::info!(staff_id, "Person deleted");
        ctx.guard()
            .notify(Notification::success("Person deleted successfully"));
        Ok(())
    })
    .await
}
