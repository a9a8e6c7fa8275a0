use super::rendered;
use anyhow::{Result, bail};
use realschool_application::dashboard::{self, Header, MemberDashboard};
use realschool_application::{AppContext, ScreenOutcome};
use realschool_core::navigation::Route;

/// Opens `/dashboard`, then renders whichever landing the guard chose.
pub async fn open(ctx: &AppContext) -> Result<()> {
    match dashboard::open(ctx).await {
        Route::OwnerDashboard => {
            let board = rendered(dashboard::owner(ctx).await?)?;
            print_header(&board.header);
            for company in board.companies {
                println!(
                    "Company {}: {}",
                    company.company_id,
                    company.name.as_deref().unwrap_or("-")
                );
                if let Some(app_name) = company.app_name {
                    println!("  app name: {}", app_name);
                }
            }
        }
        Route::StaffDashboard => print_member(dashboard::staff(ctx).await?)?,
        Route::StudentDashboard => print_member(dashboard::student(ctx).await?)?,
        other => bail!("Redirected to {}", other),
    }
    Ok(())
}

fn print_header(header: &Header) {
    println!("[{}] {} - {}", header.initials, header.display_name, header.designation);
    println!("Attendance: {}", header.attendance);
    if let Some(url) = &header.profile_image_url {
        println!("Image: {}", url);
    }
}

fn print_member(outcome: ScreenOutcome<MemberDashboard>) -> Result<()> {
    let board = rendered(outcome)?;
    print_header(&board.header);
    match board.profile {
        Some(person) => {
            println!("Id: {}", person.staff_id);
            if let Some(designation) = person.designation {
                println!("Designation: {}", designation);
            }
            if let Some(mobile) = person.mobile {
                println!("Mobile: {}", mobile);
            }
        }
        None => println!("No profile data"),
    }
    Ok(())
}
