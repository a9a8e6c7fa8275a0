use anyhow::Result;
use realschool_application::{AppContext, auth};
use realschool_core::directory::{Credentials, Registration};
use realschool_core::navigation::{MenuAction, Notification, attendance_display, menu_for};

pub async fn login(ctx: &AppContext, mobile: String, password: String) -> Result<()> {
    let route = auth::login(ctx, &Credentials { mobile, password }).await?;
    println!("Signed in. Landing: {}", route);
    Ok(())
}

pub async fn register(
    ctx: &AppContext,
    company_name: String,
    owner_name: String,
    mobile: String,
    password: String,
) -> Result<()> {
    let registration = Registration {
        company_name,
        owner_name,
        mobile,
        password,
    };
    auth::register(ctx, &registration).await?;
    Ok(())
}

pub async fn logout(ctx: &AppContext) {
    auth::logout(ctx).await;
}

pub async fn whoami(ctx: &AppContext) -> Result<()> {
    let Some(session) = ctx.guard().load_session().await.session else {
        ctx.guard().notify(Notification::info("Not signed in"));
        return Ok(());
    };

    println!("{} ({})", session.display_name(), session.role().label());
    println!("  mobile:     {}", session.mobile());
    println!("  company:    {}", session.organization_id());
    println!("  member:     {}", session.member_id());
    println!("  attendance: {}", attendance_display(&session));
    if let Some(reference) = session.profile_image_ref() {
        println!("  image:      {}", ctx.api().image_url(reference));
    }
    Ok(())
}

pub async fn menu(ctx: &AppContext) -> Result<()> {
    let Some(session) = ctx.guard().load_session().await.session else {
        ctx.guard().notify(Notification::info("Not signed in"));
        return Ok(());
    };

    for item in menu_for(session.role()) {
        match item.action {
            MenuAction::Navigate(route) => println!("{:<36} {}", item.label, route),
            MenuAction::ChangeTheme => println!("{:<36} (theme)", item.label),
            MenuAction::Logout => println!("{:<36} realschool logout", item.label),
        }
    }
    Ok(())
}
