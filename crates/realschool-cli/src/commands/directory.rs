//! Person, location, designation and assignment subcommands.

use super::rendered;
use crate::{AssignmentAction, NamedAction, PersonAction};
use anyhow::Result;
use realschool_application::{
    AppContext, ScreenOutcome, assignments, designations, locations, persons,
};
use realschool_core::directory::{NewAssignment, NewDesignation, NewLocation, NewPerson, Person};

fn print_rows<T>(
    outcome: ScreenOutcome<Vec<T>>,
    empty: &str,
    row: impl Fn(&T) -> String,
) -> Result<()> {
    let items = rendered(outcome)?;
    if items.is_empty() {
        println!("{}", empty);
    }
    for item in &items {
        println!("{}", row(item));
    }
    Ok(())
}

fn person_row(ctx: &AppContext, person: &Person) -> String {
    let mut row = format!(
        "{:>6}  {:<24} {:<14} {}",
        person.staff_id,
        person.name,
        person.mobile.as_deref().unwrap_or("-"),
        person.designation.as_deref().unwrap_or("-"),
    );
    if let Some(reference) = &person.profile_image {
        row.push_str(&format!("  {}", ctx.api().image_url(reference)));
    }
    row
}

pub async fn person(ctx: &AppContext, action: PersonAction) -> Result<()> {
    match action {
        PersonAction::List => print_rows(persons::list(ctx).await?, "No persons found", |p| {
            person_row(ctx, p)
        })?,
        PersonAction::Add {
            name,
            mobile,
            designation,
            password,
        } => {
            let form = NewPerson {
                name,
                mobile,
                designation,
                password,
            };
            rendered(persons::add(ctx, &form).await?)?;
        }
        PersonAction::Delete { id } => {
            rendered(persons::delete(ctx, &id).await?)?;
        }
    }
    Ok(())
}

pub async fn location(ctx: &AppContext, action: NamedAction) -> Result<()> {
    match action {
        NamedAction::List => print_rows(locations::list(ctx).await?, "No locations found", |l| {
            format!("{:>6}  {}", l.location_id, l.name)
        })?,
        NamedAction::Add { name } => {
            rendered(locations::add(ctx, &NewLocation { name }).await?)?;
        }
        NamedAction::Delete { id } => {
            rendered(locations::delete(ctx, &id).await?)?;
        }
    }
    Ok(())
}

pub async fn designation(ctx: &AppContext, action: NamedAction) -> Result<()> {
    match action {
        NamedAction::List => print_rows(
            designations::list(ctx).await?,
            "No designations found",
            |d| format!("{:>6}  {}", d.designation_id, d.name),
        )?,
        NamedAction::Add { name } => {
            rendered(designations::add(ctx, &NewDesignation { name }).await?)?;
        }
        NamedAction::Delete { id } => {
            rendered(designations::delete(ctx, &id).await?)?;
        }
    }
    Ok(())
}

pub async fn assignment(ctx: &AppContext, action: AssignmentAction) -> Result<()> {
    match action {
        AssignmentAction::List => print_rows(
            assignments::list(ctx).await?,
            "No assignments found",
            |a| {
                format!(
                    "{:>6}  {:<24} -> {}",
                    a.staff_location_id,
                    a.staff_name.as_deref().or(a.staff_id.as_deref()).unwrap_or("-"),
                    a.location_name.as_deref().or(a.location_id.as_deref()).unwrap_or("-"),
                )
            },
        )?,
        AssignmentAction::Choices => {
            let choices = rendered(assignments::choices(ctx).await?)?;
            println!("Persons:");
            for person in &choices.persons {
                println!("  {}", person_row(ctx, person));
            }
            println!("Locations:");
            for location in &choices.locations {
                println!("  {:>6}  {}", location.location_id, location.name);
            }
        }
        AssignmentAction::Add { person, location } => {
            let form = NewAssignment {
                staff_id: person,
                location_id: location,
            };
            rendered(assignments::assign(ctx, &form).await?)?;
        }
        AssignmentAction::Delete { id } => {
            rendered(assignments::delete(ctx, &id).await?)?;
        }
    }
    Ok(())
}
