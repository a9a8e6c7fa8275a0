//! Role dashboards and the shared header.

use crate::context::AppContext;
use crate::screen::{ScreenOutcome, on_route, report};
use realschool_core::directory::{Company, Person};
use realschool_core::error::Result;
use realschool_core::navigation::{MenuItem, Route, attendance_display, initials, menu_for};
use realschool_core::session::{Role, Session};

/// Header content for a signed-in visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub display_name: String,
    pub initials: String,
    pub designation: &'static str,
    pub attendance: String,
    pub profile_image_url: Option<String>,
    pub menu: Vec<MenuItem>,
}

impl Header {
    pub fn for_session(ctx: &AppContext, session: &Session) -> Self {
        Self {
            display_name: session.display_name().to_string(),
            initials: initials(session.display_name()),
            designation: session.role().label(),
            attendance: attendance_display(session).to_string(),
            profile_image_url: session
                .profile_image_ref()
                .map(|reference| ctx.api().image_url(reference)),
            menu: menu_for(session.role()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerDashboard {
    pub header: Header,
    pub companies: Vec<Company>,
}

/// Staff and student dashboards share one shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDashboard {
    pub header: Header,
    pub profile: Option<Person>,
}

/// The generic `/dashboard` entry: forwards to the visitor's own landing.
pub async fn open(ctx: &AppContext) -> Route {
    ctx.guard().load_session().await;
    let landing = ctx.guard().landing().await;
    ctx.guard().navigate(landing);
    landing
}

pub async fn owner(ctx: &AppContext) -> Result<ScreenOutcome<OwnerDashboard>> {
    on_route(ctx, Route::OwnerDashboard, |session| async move {
        let companies = ctx
            .api()
            .companies(session.organization_id(), session.member_id())
            .await
            .map_err(|e| report(ctx, "Failed to fetch company data", e.into()))?;
        Ok(OwnerDashboard {
            header: Header::for_session(ctx, &session),
            companies,
        })
    })
    .await
}

pub async fn staff(ctx: &AppContext) -> Result<ScreenOutcome<MemberDashboard>> {
    member(ctx, Route::StaffDashboard).await
}

pub async fn student(ctx: &AppContext) -> Result<ScreenOutcome<MemberDashboard>> {
    member(ctx, Route::StudentDashboard).await
}

async fn member(ctx: &AppContext, route: Route) -> Result<ScreenOutcome<MemberDashboard>> {
    on_route(ctx, route, |session| async move {
        let (org, id) = (session.organization_id(), session.member_id());
        let profiles = match session.role() {
            Role::Student => ctx.api().student_profile(org, id).await,
            _ => ctx.api().staff_profile(org, id).await,
        };
        let profile = profiles
            .map_err(|e| report(ctx, "Failed to fetch profile data", e.into()))?
            .into_iter()
            .next();

        Ok(MemberDashboard {
            header: Header::for_session(ctx, &session),
            profile,
        })
    })
    .await
}
